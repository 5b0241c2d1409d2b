//! Draws waypoint markers and the caption strip onto a zone map.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use log::debug;

use crate::error::{Error, Result};
use crate::font;
use crate::shapes::bounds::BoundsRect;
use crate::shapes::point::{format_coord, Point};
use crate::shapes::rect::Rect;
use crate::waypoints::{Category, Waypoints};

pub const AQUA: Rgba<u8> = Rgba([0, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const ORANGE: Rgba<u8> = Rgba([255, 165, 0, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);

/// Colors of one waypoint category. The head is the route start (the last
/// waypoint in the list), the body every other waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerColors {
    pub head: Rgba<u8>,
    pub body: Rgba<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub marker_radius: i32,
    /// pixels added on every side of the waypoint bounds
    pub padding: f32,
    /// horizontal distance between the "G" and "V" glyphs
    pub glyph_offset: i32,
    pub text_scale: u32,
    pub ghost: MarkerColors,
    pub vendor: MarkerColors,
    pub normal: MarkerColors,
    pub strip: Rgba<u8>,
    pub caption: Rgba<u8>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            marker_radius: 3,
            padding: 40.0,
            glyph_offset: 10,
            text_scale: 2,
            ghost: MarkerColors { head: BLACK, body: AQUA },
            vendor: MarkerColors { head: ORANGE, body: YELLOW },
            normal: MarkerColors { head: WHITE, body: RED },
            strip: BLACK,
            caption: WHITE,
        }
    }
}

impl OverlayStyle {
    pub fn colors(&self, category: Category) -> MarkerColors {
        match category {
            Category::Normal => self.normal,
            Category::Ghost => self.ghost,
            Category::Vendor => self.vendor,
        }
    }
}

/// ghost first, normal last so the route is drawn on top.
const DRAW_ORDER: [Category; 3] = [Category::Ghost, Category::Vendor, Category::Normal];

/// Draws every waypoint onto `map` and a caption strip under the padded
/// waypoint bounds. Returns the part of the map to export: the padded bounds
/// plus the strip.
///
/// `bounds` is in normalized units, the same space as the waypoints.
pub fn render(
    map: &mut RgbaImage,
    waypoints: &Waypoints,
    bounds: BoundsRect,
    style: &OverlayStyle,
) -> Result<Rect> {
    // checked before drawing anything so a failed render leaves the map untouched
    let start = waypoints.start_point().ok_or(Error::MissingStartPoint)?;

    let (width, height) = (map.width() as f32, map.height() as f32);

    for category in DRAW_ORDER {
        draw_path(
            map,
            waypoints.get(category),
            width,
            height,
            style.marker_radius,
            style.colors(category),
        );
    }

    let bounding_box = bounds
        .scale(width, height)
        .inflate(style.padding)
        .clamp_origin()
        .round();
    debug!("padded waypoint bounds {:?}", bounding_box);

    let start_text = caption(start);
    let text_size = font::measure_text(&start_text, style.text_scale);
    let strip_height = text_size.height as i32;

    let strip = Rect::from_origin_size(
        bounding_box.lx,
        bounding_box.ry,
        bounding_box.width(),
        strip_height,
    );
    fill_rect(map, &strip, style.strip);

    font::draw_text(map, strip.lx, strip.ly, &start_text, style.caption, style.text_scale);

    // the "G" sits one pixel past the caption's layout box, which is one
    // pixel wider than the text
    let caption_width = text_size.width as i32 + 1;
    let ghost_x = strip.lx.saturating_add(caption_width + 1);
    if !waypoints.ghost.is_empty() {
        font::draw_text(map, ghost_x, strip.ly, "G", style.ghost.body, style.text_scale);
    }

    let vendor_x = ghost_x.saturating_add(style.glyph_offset);
    if !waypoints.vendor.is_empty() {
        font::draw_text(map, vendor_x, strip.ly, "V", style.vendor.body, style.text_scale);
    }

    Ok(bounding_box.extend_bottom(strip_height))
}

/// start coordinates as written in the profile, e.g. "1100 2100".
pub fn caption(start: Point) -> String {
    let (x, y) = start.raw();
    format!("{} {}", format_coord(x), format_coord(y))
}

/// every point but the head in the body color, then the head on top.
/// Markers that can't touch the map are skipped.
fn draw_path(
    map: &mut RgbaImage,
    points: &[Point],
    width: f32,
    height: f32,
    radius: i32,
    colors: MarkerColors,
) {
    let Some((head, body)) = points.split_last() else {
        return;
    };

    let reach = Rect::new(0, 0, map.width() as i32, map.height() as i32);
    let reach = Rect::new(
        reach.lx.saturating_sub(radius),
        reach.ly.saturating_sub(radius),
        reach.rx.saturating_add(radius),
        reach.ry.saturating_add(radius),
    );
    let on_map = |p: &Point| {
        let (x, y) = p.to_pixel(width, height);
        reach.contains(&Rect::new(x, y, x, y)).then_some((x, y))
    };

    for center in body.iter().rev().filter_map(on_map) {
        draw_filled_circle_mut(map, center, radius, colors.body);
    }
    if let Some(center) = on_map(head) {
        draw_filled_circle_mut(map, center, radius, colors.head);
    }
}

/// fills the part of `rect` that lies on the map.
fn fill_rect(map: &mut RgbaImage, rect: &Rect, color: Rgba<u8>) {
    let image_rect = Rect::new(0, 0, map.width() as i32, map.height() as i32);
    let Some(rect) = rect.common(&image_rect) else {
        return;
    };
    let rect = imageproc::rect::Rect::at(rect.lx, rect.ly)
        .of_size(rect.width() as u32, rect.height() as u32);
    draw_filled_rect_mut(map, rect, color);
}
