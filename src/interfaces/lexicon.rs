// ============================================================================
// Numeral Lexicon Interface
// Defines the contract for a language plugged into the grouping driver
// ============================================================================

/// South-Asian grouping units above the hundreds block.
///
/// The ratios are not uniform: thousand is 10^3, then each step up is ×100
/// (lakh 10^5, crore 10^7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupUnit {
    /// 1,000
    Thousand,
    /// 1,00,000
    Lakh,
    /// 1,00,00,000
    Crore,
}

impl GroupUnit {
    /// All units, largest first.
    pub const DESCENDING: [GroupUnit; 3] =
        [GroupUnit::Crore, GroupUnit::Lakh, GroupUnit::Thousand];

    /// The value of one unit.
    #[inline]
    pub const fn divisor(self) -> u64 {
        match self {
            GroupUnit::Thousand => 1_000,
            GroupUnit::Lakh => 100_000,
            GroupUnit::Crore => 10_000_000,
        }
    }

    /// The largest unit not exceeding `n`, or `None` below one thousand.
    #[inline]
    pub fn largest_for(n: u64) -> Option<Self> {
        Self::DESCENDING
            .into_iter()
            .find(|unit| n >= unit.divisor())
    }
}

/// Strategy interface for a language rendered by the grouping driver.
/// Implementations: IndianEnglish, Hindi.
///
/// The driver owns the recursion over thousand/lakh/crore; a lexicon only
/// knows how to say numbers below one thousand and what each unit is called.
pub trait NumeralLexicon: Send + Sync {
    /// Language name for logging
    fn name(&self) -> &str;

    /// Render `n` in `0..1000`. Returns an empty string for zero.
    ///
    /// Passing `n >= 1000` is a programmer error.
    fn small(&self, n: u16) -> String;

    /// Word for a grouping unit
    fn unit(&self, unit: GroupUnit) -> &'static str;

    /// Word used when the whole amount is zero
    fn zero(&self) -> &'static str;

    /// Fixed currency suffix appended by the formatter, including separator
    fn currency_suffix(&self) -> &'static str;

    /// Presentational pass over whitespace-normalised words.
    /// Default implementation returns the words unchanged.
    fn finish(&self, words: &str) -> String {
        words.to_string()
    }
}
