//! Marquee Anim - the text assemble and text move effects
//!
//! Both effects are built against an [`EffectContext`] (a [`Surface`], a
//! [`TextMeasurer`] and an [`IdSequence`]), keep their font size fitted to the
//! viewport, and are driven by the host calling `play`, `update` and
//! `on_resize`.
//!
//! - [`AssembleAnimation`] splits a word into grid cells that fly in from
//!   random rotations and depths.
//! - [`MoveAnimation`] slides a word in from one side of the screen.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let ctx = EffectContext::new(surface, measurer, Arc::new(IdSequence::new()));
//! let mut first = AssembleAnimation::init(&ctx, AssembleConfig::new("Jonas"), &mut rand::rng())?;
//! let mut last = MoveAnimation::init(&ctx, MoveConfig::new("Kahnwald"))?;
//! first.play();
//! last.play();
//!
//! // each frame
//! first.update(delta_time);
//! last.update(delta_time);
//! ```
//!
//! [`Surface`]: marquee_surface::Surface
//! [`TextMeasurer`]: marquee_text::TextMeasurer
//! [`IdSequence`]: marquee_core::IdSequence

pub mod assemble;
pub mod context;
pub mod error;
mod fitting;
pub mod keyframes;
pub mod partition;
pub mod text_move;
pub mod timer;
pub mod tween;

pub use assemble::{AssembleAnimation, AssembleConfig, AssemblePlan, AssembleState};
pub use context::EffectContext;
pub use error::{AnimationError, AnimationResult};
pub use keyframes::{CellKeyframe, KeyframeRanges, generate_keyframes};
pub use partition::{CellRegion, grid_side, partition, partition_box};
pub use text_move::{
    Direction, MoveAnimation, MoveConfig, MovePlan, MoveState, OFFSCREEN_OFFSET_PERCENT,
};
pub use timer::Deferred;
pub use tween::{AnimatableProperty, Animation, AnimationState, AnimationSystem, EasingFunction};
