//! Randomized start poses for the assemble effect.
//!
//! Every cell starts scattered (rotated on three axes and pushed along z) and
//! settles into the rest pose. The values are drawn once per effect and never
//! redrawn, so a resize does not reshuffle the scatter.

use std::ops::RangeInclusive;

use marquee_core::math::Vec3;
use marquee_surface::Pose;
use rand::Rng;

use crate::error::{AnimationError, AnimationResult};

/// Ranges the start poses are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeRanges {
    /// Rotation in degrees, per axis.
    pub rotation: RangeInclusive<i32>,
    /// Translation along z.
    pub depth: RangeInclusive<i32>,
}

impl KeyframeRanges {
    pub const DEFAULT_ROTATION: RangeInclusive<i32> = -500..=1000;
    pub const DEFAULT_DEPTH: RangeInclusive<i32> = -5000..=10000;

    pub fn validate(&self) -> AnimationResult<()> {
        if self.rotation.is_empty() {
            return Err(AnimationError::InvalidConfig(format!(
                "rotation range {:?} is empty",
                self.rotation
            )));
        }
        if self.depth.is_empty() {
            return Err(AnimationError::InvalidConfig(format!(
                "depth range {:?} is empty",
                self.depth
            )));
        }
        Ok(())
    }
}

impl Default for KeyframeRanges {
    fn default() -> Self {
        Self {
            rotation: Self::DEFAULT_ROTATION,
            depth: Self::DEFAULT_DEPTH,
        }
    }
}

/// Start pose of one cell. The end pose is always [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellKeyframe {
    pub cell_index: u32,
    /// Rotation around x, y and z in degrees.
    pub rotation: Vec3,
    pub depth: f32,
}

impl CellKeyframe {
    pub fn start_pose(&self) -> Pose {
        Pose::rotated(self.rotation, self.depth)
    }

    pub fn end_pose(&self) -> Pose {
        Pose::REST
    }
}

/// Draw one start pose per cell.
///
/// Inject a seeded RNG to get reproducible poses; production passes an
/// entropy-seeded one. Empty ranges are rejected before anything is drawn.
pub fn generate_keyframes<R: Rng + ?Sized>(
    part_count: u32,
    ranges: &KeyframeRanges,
    rng: &mut R,
) -> AnimationResult<Vec<CellKeyframe>> {
    ranges.validate()?;
    Ok((0..part_count)
        .map(|cell_index| {
            let rotation = Vec3::new(
                rng.random_range(ranges.rotation.clone()) as f32,
                rng.random_range(ranges.rotation.clone()) as f32,
                rng.random_range(ranges.rotation.clone()) as f32,
            );
            CellKeyframe {
                cell_index,
                rotation,
                depth: rng.random_range(ranges.depth.clone()) as f32,
            }
        })
        .collect())
}
