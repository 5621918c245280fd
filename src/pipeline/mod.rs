//! Run orchestration.
//!
//! [`run::CorePipeline`] turns a quiz plus narration audio into a video; [`automation`] wraps it
//! with quiz generation, speech synthesis, publishing and the single-run guard.

/// Full generation runs.
pub mod automation;
/// Core frames-to-video run.
pub mod run;
/// Single-run guard.
pub mod slot;
/// Run state machine.
pub mod state;

pub use automation::{Automation, RunSummary, Services};
pub use run::{CoreOutput, CorePipeline};
pub use slot::{RunSlot, RunTicket};
pub use state::{RunState, RunTracker};
