//! Pullbar Animation System
//!
//! Eased offset tweens and frame scheduling for sheet transitions.
//!
//! # Features
//!
//! - **Easing**: standard curves plus CSS-style cubic bezier
//! - **Tweens**: timed scalar animations toward a single target
//! - **Scheduler**: slotmap-keyed storage ticked by the host's frame pump
//!
//! Completion is observed by polling: the owner reads `is_finished()` after
//! each tick and performs its settle work itself. The scheduler never calls
//! back into the component, which keeps every mutation on the host's main
//! thread.

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, TweenId};
pub use tween::Tween;
