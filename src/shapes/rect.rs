/// Integer pixel rectangle.
/// (lx,ly) is always top left
/// (rx, ry) is always bottom right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub lx: i32,
    pub ly: i32,
    pub rx: i32,
    pub ry: i32,
}

impl Rect {
    pub fn new(lx: i32, ly: i32, rx: i32, ry: i32) -> Self {
        Self { lx, ly, rx, ry }
    }

    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// rounds each of origin and size independently, so the far edge is
    /// `round(x) + round(width)` rather than `round(x + width)`.
    pub fn round(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_origin_size(
            x.round_ties_even() as i32,
            y.round_ties_even() as i32,
            width.round_ties_even() as i32,
            height.round_ties_even() as i32,
        )
    }

    pub fn common(&self, other: &Rect) -> Option<Self> {
        if other.lx < self.rx && other.ly < self.ry && other.rx > self.lx && other.ry > self.ly {
            Some(Self {
                lx: self.lx.max(other.lx),
                ly: self.ly.max(other.ly),
                rx: self.rx.min(other.rx),
                ry: self.ry.min(other.ry),
            })
        } else {
            None
        }
    }

    /// true when `other` lies entirely within this rect.
    pub fn contains(&self, other: &Rect) -> bool {
        other.lx >= self.lx && other.ly >= self.ly && other.rx <= self.rx && other.ry <= self.ry
    }

    /// returns the same rect grown downwards by `amount` pixels.
    pub fn extend_bottom(&self, amount: i32) -> Self {
        Self {
            ry: self.ry.saturating_add(amount),
            ..*self
        }
    }

    pub fn height(&self) -> i32 {
        self.ry.saturating_sub(self.ly)
    }

    pub fn width(&self) -> i32 {
        self.rx.saturating_sub(self.lx)
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}
