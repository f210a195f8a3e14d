use std::ops::{Div, Mul};

use crate::math::Vec2;

/// A measured or computed 2D extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shrink both axes to `(100 - padding_percent)%` of their size.
    ///
    /// A viewport of 1000x500 with 10% padding leaves 900x450.
    pub fn without_padding(self, padding_percent: f32) -> Self {
        self * ((100.0 - padding_percent) / 100.0)
    }

    /// True when both axes are strictly smaller than `bounds`.
    pub fn fits_within(&self, bounds: Dimensions) -> bool {
        self.width < bounds.width && self.height < bounds.height
    }

    /// True when either axis is zero, negative or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Mul<f32> for Dimensions {
    type Output = Dimensions;

    fn mul(self, rhs: f32) -> Self::Output {
        Dimensions {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl Div<f32> for Dimensions {
    type Output = Dimensions;

    fn div(self, rhs: f32) -> Self::Output {
        Dimensions {
            width: self.width / rhs,
            height: self.height / rhs,
        }
    }
}

impl From<Vec2> for Dimensions {
    fn from(v: Vec2) -> Self {
        Dimensions::new(v.x, v.y)
    }
}

impl From<Dimensions> for Vec2 {
    fn from(d: Dimensions) -> Self {
        Vec2::new(d.width, d.height)
    }
}

/// Top-left offset of a region, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
