//! Rasterization of a pattern onto a pixel surface and PNG encoding.
//!
//! The surface starts fully transparent; every painted cell becomes an
//! opaque `scale × scale` block, transparent cells leave the surface
//! untouched. The surface lives only for the duration of one
//! [`rasterize`] call.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::pattern::Pattern;

/// An avatar encoded as PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    png: Vec<u8>,
}

impl EncodedImage {
    /// The encoded PNG bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.png
    }

    /// Consumes the image, returning the PNG bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Renders the image as a `data:image/png;base64,…` URL.
    #[cfg(feature = "data-url")]
    #[must_use]
    pub fn to_data_url(&self) -> String {
        use base64::Engine as _;

        let mut url = String::from("data:image/png;base64,");
        base64::engine::general_purpose::STANDARD
            .encode_string(&self.png, &mut url);
        url
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Draws `pattern` onto a fresh transparent surface at `scale` pixels per
/// cell.
///
/// Channel values outside `[0, 255]` (from palette math or bias jitter)
/// are clamped here, at paint time.
#[must_use]
pub fn draw(pattern: &Pattern, scale: u32) -> RgbaImage {
    let height = pattern.len() as u32 * scale;
    let width =
        pattern.iter().map(Vec::len).max().unwrap_or(0) as u32 * scale;

    let mut surface = RgbaImage::new(width, height);
    for (i, row) in pattern.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let Some(color) = cell else { continue };
            let pixel = Rgba([
                clamp_channel(color.r),
                clamp_channel(color.g),
                clamp_channel(color.b),
                255,
            ]);
            let (x0, y0) = (j as u32 * scale, i as u32 * scale);
            for y in y0..y0 + scale {
                for x in x0..x0 + scale {
                    surface.put_pixel(x, y, pixel);
                }
            }
        }
    }
    surface
}

/// Rasterizes `pattern` and encodes the surface as PNG.
pub fn rasterize(
    pattern: &Pattern,
    scale: u32,
) -> Result<EncodedImage, image::ImageError> {
    let surface = draw(pattern, scale);
    let mut png = Cursor::new(Vec::new());
    surface.write_to(&mut png, ImageFormat::Png)?;
    Ok(EncodedImage {
        png: png.into_inner(),
    })
}
