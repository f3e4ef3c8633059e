// ============================================================================
// Words Module
// Amount-in-words rendering for Indian-English and Hindi
// ============================================================================

mod english;
mod formatter;
mod grouping;
mod hindi;

pub use english::IndianEnglish;
pub use formatter::{format_amount, render, AmountInWords};
pub use grouping::spell_out;
pub use hindi::Hindi;
