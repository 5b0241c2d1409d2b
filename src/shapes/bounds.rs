use crate::error::{Error, Result};

use super::point::Point;
use super::rect::Rect;

/// Axis aligned rectangle in float units, origin top left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsRect {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundsRect {
    pub fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// maps a rect in normalized units onto an image of the given pixel size.
    pub fn scale(&self, width: f32, height: f32) -> Self {
        Self {
            min_x: self.min_x * width,
            min_y: self.min_y * height,
            width: self.width * width,
            height: self.height * height,
        }
    }

    /// grows the rect by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }

    /// moves a negative origin back to zero. The size is left alone, so the
    /// far edges are never pulled back inside the image.
    pub fn clamp_origin(&self) -> Self {
        Self {
            min_x: self.min_x.max(0.0),
            min_y: self.min_y.max(0.0),
            ..*self
        }
    }

    pub fn round(&self) -> Rect {
        Rect::round(self.min_x, self.min_y, self.width, self.height)
    }
}

/// smallest rect containing all the given points.
pub fn bounds(points: &[Point]) -> Result<BoundsRect> {
    let (first, rest) = points.split_first().ok_or(Error::EmptyPointSet)?;

    let (min_x, min_y, max_x, max_y) = rest.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    );

    Ok(BoundsRect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
