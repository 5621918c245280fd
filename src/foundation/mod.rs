/// Shared value types (roles, canvas, fps, run identifiers).
pub mod core;
/// Crate error type.
pub mod error;
