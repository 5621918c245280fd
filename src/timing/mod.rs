//! Narration durations to integer display segments.

/// Ceil-based segment scheduling.
pub mod schedule;

pub use schedule::{Segment, SegmentPlan, schedule, segment_seconds};
