//! Vector math re-exported from [`glam`].
//!
//! Rotations in the effects are expressed as [`Vec3`] (degrees per axis).
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, Vec3};
