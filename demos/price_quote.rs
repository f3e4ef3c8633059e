// ============================================================================
// Price Quote Example
// ============================================================================

use jewellery_pricing::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Jewellery Price Quote ===\n");

    let store = ConfigStore::default();
    let config = store.snapshot();
    println!(
        "Gold: {} / 10g, Silver: {} / 10g\n",
        config.base_rates.gold_price_per_10g, config.base_rates.silver_price_per_10g
    );

    let calculator = match store.calculator() {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return;
        },
    };

    let requests = [
        (Metal::Gold, "1", Decimal::new(125, 1)),
        (Metal::Gold, "2", Decimal::from(8)),
        (Metal::Silver, "s1", Decimal::from(250)),
    ];

    for (metal, id, weight) in requests {
        match calculator.quote(metal, &ItemId::new(id), weight) {
            Ok(quote) => {
                println!("{} ({}g)", quote.item_name, quote.weight_grams);
                println!("  Total:         {}", quote.total_price.round_dp(2));
                println!("                 {}", quote.words.total_price.hindi);
                println!("                 {}", quote.words.total_price.english);
                println!("  Rate applied:  {}", quote.words.rate_applied.english);
                println!("  Making charge: {}", quote.words.making_charge.english);
                println!("  Purchase rate: {}\n", quote.words.purchase_rate.english);
            },
            Err(err) => eprintln!("Could not quote {} item {}: {}", metal, id, err),
        }
    }

    println!("=== Amounts in Words ===\n");
    for amount in [0.0, 7.5, 1_00_000.0, 12_34_56_789.0] {
        match format_amount(Some(amount)) {
            Ok(words) => println!("{:>14} -> {} | {}", amount, words.english, words.hindi),
            Err(err) => eprintln!("{} rejected: {}", amount, err),
        }
    }
}
