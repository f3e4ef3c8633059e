// ============================================================================
// Grouping Driver
// South-Asian numeral grouping shared by every lexicon
// ============================================================================

use crate::interfaces::{GroupUnit, NumeralLexicon};

/// Spell out `n` using thousand/lakh/crore grouping.
///
/// Zero yields an empty string; the formatter decides how to say zero.
/// A unit whose remainder is zero is emitted without a remainder clause
/// ("one lakh", never "one lakh zero"). The crore quotient recurses through
/// the full grouping, so any `u64` can be spelled.
///
/// # Example
/// ```text
/// 1,23,45,678 -> one crore | twenty three lakh | forty five thousand | six hundred seventy eight
/// ```
pub fn spell_out<L: NumeralLexicon + ?Sized>(lexicon: &L, n: u64) -> String {
    let mut words = String::new();
    push_group(lexicon, n, &mut words);
    words
}

fn push_group<L: NumeralLexicon + ?Sized>(lexicon: &L, n: u64, out: &mut String) {
    let Some(unit) = GroupUnit::largest_for(n) else {
        push_words(out, &lexicon.small(n as u16));
        return;
    };

    let divisor = unit.divisor();
    let quotient = n / divisor;
    let remainder = n % divisor;

    // Below a crore each step is x100, so the quotient stays in the small range.
    debug_assert!(
        unit == GroupUnit::Crore || quotient < 100,
        "{unit:?} quotient {quotient} out of range for {n}"
    );

    push_group(lexicon, quotient, out);
    push_words(out, lexicon.unit(unit));
    if remainder != 0 {
        push_group(lexicon, remainder, out);
    }
}

fn push_words(out: &mut String, words: &str) {
    if words.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(words);
}
