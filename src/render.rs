use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::error::EncodeError;
use crate::frames::{Frame, FRAME_HEIGHT, FRAME_WIDTH};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Paints `frame` onto a 12×8 canvas and upscales it by `scale` with
/// nearest-neighbour sampling, so every source pixel becomes a
/// `scale`×`scale` block.
///
/// Cells the frame does not cover stay black; cells outside the canvas are
/// dropped.
pub fn render_frame(frame: &Frame, scale: u32) -> Result<RgbImage, EncodeError> {
    let (width, height) = scaled_dimensions(scale)?;
    let base = base_canvas(frame);
    Ok(imageops::resize(&base, width, height, FilterType::Nearest))
}

/// Output size for `scale`. Zero or overflowing scales are rejected.
pub fn scaled_dimensions(scale: u32) -> Result<(u32, u32), EncodeError> {
    if scale == 0 {
        return Err(EncodeError::invalid_settings("scale must be > 0"));
    }
    let width = (FRAME_WIDTH as u32).checked_mul(scale);
    let height = (FRAME_HEIGHT as u32).checked_mul(scale);
    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(EncodeError::invalid_settings(format!(
            "scale {scale} overflows the output image size"
        ))),
    }
}

fn base_canvas(frame: &Frame) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(FRAME_WIDTH as u32, FRAME_HEIGHT as u32, BACKGROUND);
    for (y, row) in frame.rows().iter().take(FRAME_HEIGHT).enumerate() {
        for (x, pixel) in row.iter().take(FRAME_WIDTH).enumerate() {
            canvas.put_pixel(x as u32, y as u32, pixel.to_rgb());
        }
    }
    canvas
}
