/// raw profile coordinates are divided by this on the way in.
pub const MAP_SCALAR: f32 = 100.0;

/// A waypoint position in normalized map units (raw coordinate / MAP_SCALAR).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// creates a new point with given normalized co-ordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// creates a point from the raw coordinates found in a profile.
    pub fn from_raw(x: f32, y: f32) -> Self {
        Self {
            x: x / MAP_SCALAR,
            y: y / MAP_SCALAR,
        }
    }

    /// scales back up to the coordinates the profile was written in.
    pub fn raw(&self) -> (f32, f32) {
        (self.x * MAP_SCALAR, self.y * MAP_SCALAR)
    }

    /// position on an image of the given pixel size.
    pub fn to_pixel(&self, width: f32, height: f32) -> (i32, i32) {
        (
            (self.x * width).round() as i32,
            (self.y * height).round() as i32,
        )
    }
}

const SIGNIFICANT_DIGITS: i32 = 7;

/// Formats a raw coordinate for display with at most 7 significant digits,
/// dropping the float noise that dividing and multiplying by MAP_SCALAR
/// leaves behind.
pub fn format_coord(value: f32) -> String {
    let magnitude = if value == 0.0 || !value.is_finite() {
        0
    } else {
        value.abs().log10().floor() as i32
    };
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;

    let text = format!("{value:.decimals$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        &text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
