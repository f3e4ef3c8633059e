// ============================================================================
// Indian-English Lexicon
// Cardinal numbers in English words with lakh/crore grouping
// ============================================================================

use crate::interfaces::{GroupUnit, NumeralLexicon};

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Indian-English number names.
///
/// No "and" between hundreds and the rest (705 is "seven hundred five"),
/// units are thousand, lakh and crore. Every word is title-cased in the
/// final output.
///
/// # Example
/// ```
/// use jewellery_pricing::words::{spell_out, IndianEnglish};
///
/// assert_eq!(spell_out(&IndianEnglish, 2_50_000), "two lakh fifty thousand");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IndianEnglish;

impl NumeralLexicon for IndianEnglish {
    fn name(&self) -> &str {
        "en-IN"
    }

    fn small(&self, n: u16) -> String {
        below_thousand(n)
    }

    fn unit(&self, unit: GroupUnit) -> &'static str {
        match unit {
            GroupUnit::Thousand => "thousand",
            GroupUnit::Lakh => "lakh",
            GroupUnit::Crore => "crore",
        }
    }

    fn zero(&self) -> &'static str {
        "zero"
    }

    fn currency_suffix(&self) -> &'static str {
        " / Rupees"
    }

    fn finish(&self, words: &str) -> String {
        title_case(words)
    }
}

/// Render `0..1000`, composing tens and ones words.
fn below_thousand(n: u16) -> String {
    debug_assert!(n < 1000, "english small renderer called with {n}");
    let n = n as usize;
    match n {
        0 => String::new(),
        1..=9 => ONES[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=99 if n % 10 == 0 => TENS[n / 10].to_string(),
        20..=99 => format!("{} {}", TENS[n / 10], ONES[n % 10]),
        _ => {
            let rest = below_thousand((n % 100) as u16);
            if rest.is_empty() {
                format!("{} hundred", ONES[n / 100])
            } else {
                format!("{} hundred {}", ONES[n / 100], rest)
            }
        },
    }
}

/// Capitalise the first letter of every space-separated word.
fn title_case(words: &str) -> String {
    let mut out = String::with_capacity(words.len());
    for (i, word) in words.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
