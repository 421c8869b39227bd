pub mod bitmap;

pub use bitmap::render_bitmap;

use crate::PlotBytes;
use anyhow::{Result, anyhow, bail};
use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// JPEG quality used for every encoded plot
pub const JPEG_QUALITY: u8 = 85;

/// Output encoding of a rendered plot
///
/// Parses from and prints to lowercase names, so it can be taken straight
/// from a configuration value:
///
/// ```rust
/// use rank_plots::render::ImageFormat;
///
/// let format: ImageFormat = "jpeg".parse().unwrap();
/// assert_eq!(format, ImageFormat::Jpeg);
/// assert_eq!(ImageFormat::Png.to_string(), "png");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless, the default
    #[default]
    Png,
    /// Smaller files for dense plots, quality 85
    Jpeg,
}

impl ImageFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// Encode a packed RGB8 buffer of `width * height` pixels
    pub fn encode_rgb(&self, buffer: &[u8], width: u32, height: u32) -> Result<PlotBytes> {
        let expected = width as usize * height as usize * 3;
        if buffer.len() != expected {
            bail!(
                "plot buffer holds {} bytes, a {width}x{height} RGB image needs {expected}",
                buffer.len()
            );
        }

        // JPEG at quality 85 typically compresses to ~10-15% of the raw size
        let mut encoded = Vec::with_capacity(expected / 8);
        match self {
            ImageFormat::Png => PngEncoder::new(&mut encoded)
                .write_image(buffer, width, height, image::ExtendedColorType::Rgb8)
                .map_err(|e| anyhow!("failed to PNG encode plot: {e}"))?,
            ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
                .encode(buffer, width, height, image::ExtendedColorType::Rgb8)
                .map_err(|e| anyhow!("failed to JPEG encode plot: {e}"))?,
        }
        Ok(encoded)
    }
}
