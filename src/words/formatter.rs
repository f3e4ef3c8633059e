// ============================================================================
// Amount Formatter
// Rounds an amount and renders it in Indian-English and Hindi
// ============================================================================

use super::grouping::spell_out;
use super::{Hindi, IndianEnglish};
use crate::interfaces::NumeralLexicon;
use crate::numeric::{Amount, NumericResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An amount rendered in both languages, each with its currency suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmountInWords {
    /// e.g. "One Thousand Two Hundred Thirty Four / Rupees"
    pub english: String,

    /// e.g. "एक हज़ार दो सौ चौंतीस / रुपये"
    pub hindi: String,
}

impl AmountInWords {
    /// Both fields empty, no suffix. Used when there is no amount to render.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render a whole number of rupees.
    pub fn from_rupees(rupees: u64) -> Self {
        Self {
            english: render(&IndianEnglish, rupees),
            hindi: render(&Hindi, rupees),
        }
    }

    /// Round to the nearest rupee (ties away from zero) and render.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded amount does not fit in a `u64`.
    pub fn from_amount(amount: Amount) -> NumericResult<Self> {
        let rupees = amount.round_to_rupees()?;
        Ok(Self::from_rupees(rupees))
    }

    /// Validate, round and render a floating-point amount.
    ///
    /// # Errors
    /// `Negative`, `NonFinite` or `Overflow` for out-of-domain input.
    pub fn from_f64(amount: f64) -> NumericResult<Self> {
        Self::from_amount(Amount::try_from(amount)?)
    }

    /// True when neither language has any text.
    pub fn is_empty(&self) -> bool {
        self.english.is_empty() && self.hindi.is_empty()
    }
}

/// Render an optional amount in both languages.
///
/// `None` gives an empty pair; anything else is validated, rounded to the
/// nearest rupee and rendered.
///
/// # Example
/// ```
/// use jewellery_pricing::words::format_amount;
///
/// let words = format_amount(Some(1234.0)).unwrap();
/// assert_eq!(words.english, "One Thousand Two Hundred Thirty Four / Rupees");
/// assert_eq!(words.hindi, "एक हज़ार दो सौ चौंतीस / रुपये");
/// ```
pub fn format_amount(amount: Option<f64>) -> NumericResult<AmountInWords> {
    match amount {
        None => Ok(AmountInWords::empty()),
        Some(value) => AmountInWords::from_f64(value),
    }
}

/// Render whole rupees with a single lexicon, suffix included.
pub fn render<L: NumeralLexicon + ?Sized>(lexicon: &L, rupees: u64) -> String {
    let spelled = collapse_whitespace(&spell_out(lexicon, rupees));
    let words: &str = if spelled.is_empty() {
        lexicon.zero()
    } else {
        &spelled
    };

    let mut rendered = lexicon.finish(words);
    rendered.push_str(lexicon.currency_suffix());

    tracing::trace!(lexicon = lexicon.name(), rupees, words = %rendered, "rendered amount");
    rendered
}

fn collapse_whitespace(words: &str) -> String {
    let tokens: SmallVec<[&str; 24]> = words.split_whitespace().collect();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use proptest::prelude::*;

    fn words(amount: f64) -> AmountInWords {
        format_amount(Some(amount)).unwrap()
    }

    #[test]
    fn test_zero() {
        let w = words(0.0);
        assert_eq!(w.english, "Zero / Rupees");
        assert_eq!(w.hindi, "शून्य / रुपये");
    }

    #[test]
    fn test_small_amounts() {
        let five = words(5.0);
        assert_eq!(five.english, "Five / Rupees");
        assert_eq!(five.hindi, "पाँच / रुपये");

        let hundred = words(100.0);
        assert_eq!(hundred.english, "One Hundred / Rupees");
        assert_eq!(hundred.hindi, "एक सौ / रुपये");
    }

    #[test]
    fn test_thousands() {
        let w = words(1234.0);
        assert_eq!(w.english, "One Thousand Two Hundred Thirty Four / Rupees");
        assert_eq!(w.hindi, "एक हज़ार दो सौ चौंतीस / रुपये");
    }

    #[test]
    fn test_lakh_and_crore_without_trailing_zero() {
        let lakh = words(100_000.0);
        assert_eq!(lakh.english, "One Lakh / Rupees");
        assert_eq!(lakh.hindi, "एक लाख / रुपये");

        let crore = words(10_000_000.0);
        assert_eq!(crore.english, "One Crore / Rupees");
        assert_eq!(crore.hindi, "एक करोड़ / रुपये");
    }

    #[test]
    fn test_thousand_boundary() {
        let w = words(99_999.0);
        assert_eq!(
            w.english,
            "Ninety Nine Thousand Nine Hundred Ninety Nine / Rupees"
        );
        assert_eq!(w.english.matches("Thousand").count(), 1);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(words(0.4).english, "Zero / Rupees");
        assert_eq!(words(0.5).english, "One / Rupees");
        assert_eq!(words(99_999.5), words(100_000.0));
        assert_eq!(words(1233.5).hindi, "एक हज़ार दो सौ चौंतीस / रुपये");
    }

    #[test]
    fn test_absent_amount() {
        let w = format_amount(None).unwrap();
        assert!(w.is_empty());
        assert_eq!(w, AmountInWords::empty());
    }

    #[test]
    fn test_out_of_domain() {
        assert_eq!(format_amount(Some(-1.0)), Err(NumericError::Negative));
        assert_eq!(format_amount(Some(f64::NAN)), Err(NumericError::NonFinite));
        assert_eq!(
            format_amount(Some(f64::NEG_INFINITY)),
            Err(NumericError::NonFinite)
        );
        assert_eq!(format_amount(Some(1e20)), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_amount_decimal_input() {
        let amount: Amount = "250000.49".parse().unwrap();
        let w = AmountInWords::from_amount(amount).unwrap();
        assert_eq!(w.english, "Two Lakh Fifty Thousand / Rupees");
        assert_eq!(w.hindi, "दो लाख पचास हज़ार / रुपये");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  one   hundred  "), "one hundred");
        assert_eq!(collapse_whitespace(""), "");
    }

    proptest! {
        #[test]
        fn rounding_law(x in 0.0f64..1e15) {
            prop_assert_eq!(words(x), words(x.round()));
        }

        #[test]
        fn formatting_is_deterministic(x in 0.0f64..1e15) {
            prop_assert_eq!(words(x), words(x));
        }

        #[test]
        fn small_renderers_never_empty_for_nonzero(n in 1u16..1000) {
            prop_assert!(!IndianEnglish.small(n).is_empty());
            prop_assert!(!Hindi.small(n).is_empty());
        }

        #[test]
        fn every_rendering_carries_suffix(n in any::<u64>()) {
            let w = AmountInWords::from_rupees(n);
            prop_assert!(w.english.ends_with(" / Rupees"));
            prop_assert!(w.hindi.ends_with(" / रुपये"));
        }
    }
}
