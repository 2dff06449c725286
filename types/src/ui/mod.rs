//! UI state types shared by the engine and the renderer.
//!
//! Pure data and math with no IO, no async, no ratatui dependency.

mod animation;
mod direction;
mod options;
mod spring;

pub use animation::{AnimPhase, EffectTimer, ease_out_cubic, normalized_progress};
pub use direction::{Direction, SLIDE_DISTANCE};
pub use options::UiOptions;
pub use spring::{Spring, SpringConfig};
