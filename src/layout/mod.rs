//! Text layout for fixed-size canvases.

/// Greedy word wrapping by character budget.
pub mod wrap;

pub use wrap::{WrapLines, wrap_lines, wrap_text, wrap_text_capped};
