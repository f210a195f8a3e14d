//! Grid partitioning of a text's bounding box.
//!
//! The box is cut into `side x side` equal cells in row-major order, where
//! `side` is the square root of the part count. Each cell becomes the clip
//! region of one full-size copy of the word.

use marquee_core::{Dimensions, Position};
use marquee_text::{FontDescriptor, TextMeasurer};

use crate::error::{AnimationError, AnimationResult};

/// One tile of a partitioned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRegion {
    pub index: u32,
    /// Top-left offset inside the bounding box.
    pub position: Position,
    pub size: Dimensions,
}

/// Side length of the grid for `part_count` cells.
///
/// Fails unless `part_count` is a positive perfect square.
pub fn grid_side(part_count: u32) -> AnimationResult<u32> {
    if part_count == 0 {
        return Err(AnimationError::InvalidPartCount(part_count));
    }
    let side = (part_count as f64).sqrt().round() as u32;
    if side.checked_mul(side) != Some(part_count) {
        return Err(AnimationError::InvalidPartCount(part_count));
    }
    Ok(side)
}

/// Tile `bounds` into `part_count` cells.
pub fn partition_box(bounds: Dimensions, part_count: u32) -> AnimationResult<Vec<CellRegion>> {
    let side = grid_side(part_count)?;
    let cell = bounds / side as f32;

    Ok((0..part_count)
        .map(|index| {
            let col = index % side;
            let row = index / side;
            CellRegion {
                index,
                position: Position::new(col as f32 * cell.width, row as f32 * cell.height),
                size: cell,
            }
        })
        .collect())
}

/// Measure `text` in `font` and tile its box into `part_count` cells.
///
/// The box height is the larger of glyph and font height, the same policy
/// the font-fit solver uses.
pub fn partition<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: &FontDescriptor,
    part_count: u32,
) -> AnimationResult<Vec<CellRegion>> {
    grid_side(part_count)?;
    let bounds = measurer.measure(text, font)?.fit_box();
    partition_box(bounds, part_count)
}
