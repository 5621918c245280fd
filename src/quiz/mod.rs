//! Quiz data and the text artifacts derived from it.

/// Quiz record and answer resolution.
pub mod model;
/// Narration scripts for the two video phases.
pub mod narration;
/// Section parser for generated quiz prose.
pub mod parse;

pub use model::{OPTION_LABELS, Quiz, ResolvedAnswer};
pub use narration::NarrationStyle;
pub use parse::parse_quiz_text;
