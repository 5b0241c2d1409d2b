// Tiny 5x7 bitmap font for the caption strip.
// Only covers what a caption can contain: coordinates and the category letters.

use image::{Rgba, RgbaImage};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// glyph width + 1 column of spacing
const ADVANCE: u32 = 6;
/// glyph height + 1 row of padding above and below
const LINE_HEIGHT: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Pixel size of `text` drawn at the given scale.
pub fn measure_text(text: &str, scale: u32) -> TextSize {
    TextSize {
        width: text.chars().count() as u32 * ADVANCE * scale,
        height: LINE_HEIGHT * scale,
    }
}

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b01100,0b01100),

        _ => None,
    }
}

/// Fill a `scale`x`scale` block, skipping whatever falls outside the image.
fn put_block(img: &mut RgbaImage, x: i64, y: i64, scale: u32, color: Rgba<u8>) {
    for dy in 0..scale as i64 {
        for dx in 0..scale as i64 {
            let (px, py) = (x + dx, y + dy);
            if px < 0 || py < 0 || px >= img.width() as i64 || py >= img.height() as i64 {
                continue;
            }
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}

fn draw_char(img: &mut RgbaImage, x: i64, y: i64, ch: char, color: Rgba<u8>, scale: u32) {
    let Some(rows) = glyph5x7(ch) else {
        return;
    };
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..GLYPH_WIDTH {
            if (rowbits >> (GLYPH_WIDTH - 1 - rx)) & 1 == 1 {
                put_block(
                    img,
                    x + (rx * scale) as i64,
                    y + ry as i64 * scale as i64,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draw `text` with its line box's top-left corner at (x, y).
/// Characters without a glyph still take up their advance.
pub fn draw_text(img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>, scale: u32) {
    let top = y as i64 + ((LINE_HEIGHT - GLYPH_HEIGHT) / 2 * scale) as i64;
    let mut left = x as i64;
    for ch in text.chars() {
        draw_char(img, left, top, ch, color, scale);
        left += (ADVANCE * scale) as i64;
    }
}
