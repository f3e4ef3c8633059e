// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod lexicon;

pub use lexicon::{GroupUnit, NumeralLexicon};
