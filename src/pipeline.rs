use std::str::FromStr;

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};

use crate::error::OverlayError;

/// JPEG quality used for every JPEG encode.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encodings an overlaid canvas can be written as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Guess a format from a file extension (`png`, `jpg`, `jpeg`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("png") {
            Some(Self::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(Self::Jpeg)
        } else {
            None
        }
    }
}

impl core::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = OverlayError;

    /// Accepts exactly `png` and `jpeg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "jpeg" => Ok(Self::Jpeg),
            other => Err(OverlayError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Decode PNG or JPEG bytes, sniffing the format from the signature.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, OverlayError> {
    let image = image::load_from_memory(bytes).map_err(OverlayError::Decode)?;
    log::debug!(
        "decoded source image {}x{} ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(image.into_rgba8())
}

/// Encode `canvas` as `format`.
///
/// JPEG has no alpha channel; alpha is dropped, not composited.
pub fn encode(canvas: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>, OverlayError> {
    let (width, height) = canvas.dimensions();
    let mut out = Vec::with_capacity(canvas.as_raw().len() / 4);
    match format {
        OutputFormat::Png => PngEncoder::new(&mut out).write_image(
            canvas.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        OutputFormat::Jpeg => {
            let rgb: RgbImage = canvas.convert();
            JpegEncoder::new_with_quality(&mut out, DEFAULT_JPEG_QUALITY).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
    }
    .map_err(OverlayError::Encode)?;
    log::debug!(
        "encoded {}x{} canvas as {} ({} bytes)",
        width,
        height,
        format,
        out.len()
    );
    Ok(out)
}
