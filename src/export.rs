use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, RgbaImage};
use log::info;

use crate::error::{Error, Result};
use crate::shapes::rect::Rect;

pub const JPEG_QUALITY: u8 = 100;

/// copies `rect` out of `map` into a new buffer.
/// The whole rect has to lie on the map, nothing is clipped.
pub fn crop(map: &RgbaImage, rect: &Rect) -> Result<RgbaImage> {
    let image_rect = Rect::new(0, 0, map.width() as i32, map.height() as i32);
    if rect.is_empty() || !image_rect.contains(rect) {
        return Err(Error::CropOutOfBounds {
            rect: *rect,
            width: map.width(),
            height: map.height(),
        });
    }

    Ok(image::imageops::crop_imm(
        map,
        rect.lx as u32,
        rect.ly as u32,
        rect.width() as u32,
        rect.height() as u32,
    )
    .to_image())
}

/// Encodes at JPEG_QUALITY. JPEG has no alpha, it is dropped.
pub fn encode_jpeg<W: Write>(image: &RgbaImage, writer: &mut W) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    let mut encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
        .map_err(Error::Encode)
}

/// crops the rendered map to `rect` and writes it to `path` as a jpeg.
pub fn export(map: &RgbaImage, rect: &Rect, path: &Path) -> Result<()> {
    let cropped = crop(map, rect)?;

    let mut writer = BufWriter::new(File::create(path)?);
    encode_jpeg(&cropped, &mut writer)?;
    writer.flush()?;

    info!(
        "wrote {}x{} map to {}",
        cropped.width(),
        cropped.height(),
        path.display()
    );
    Ok(())
}
