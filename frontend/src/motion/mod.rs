//! Frame-clock driven animation state machines.
//!
//! Nothing in here touches the DOM. Hooks in `crate::hooks` feed these types
//! with browser timestamps and observer reports; tests feed them by hand.

mod activation;
mod easing;
mod interpolate;
mod reveal;
mod tween;

pub use activation::{ActivationConfig, ActivationController, RegionObservation};
pub use easing::Easing;
pub use interpolate::{map_range, Spring};
pub use reveal::{RevealConfig, RevealMode, RevealSequencer};
pub use tween::{format_count, FrameOutcome, RetriggerPolicy, TweenConfig, TweenState, TweenedCounter};
