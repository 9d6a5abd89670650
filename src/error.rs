use img_caption_glyph::FontParseError;
use img_caption_layout::LayoutError;

/// Overlay, decode and encode failures.
///
/// Every variant is a deterministic input problem; none are worth retrying.
/// A call that fails leaves any session canvas exactly as it was.
#[derive(Debug)]
pub enum OverlayError {
    /// The request's text was empty.
    EmptyText,
    /// Source image bytes are not a decodable image.
    Decode(image::ImageError),
    /// Font data is not a parseable TrueType/OpenType face.
    FontParse(FontParseError),
    /// Encoding was requested before any overlay succeeded.
    NoOutput,
    /// Output format other than `png` or `jpeg`.
    UnsupportedFormat(String),
    /// The image codec failed while encoding.
    Encode(image::ImageError),
}

impl core::fmt::Display for OverlayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "text can't be empty"),
            Self::Decode(err) => write!(f, "image decode failed: {}", err),
            Self::FontParse(err) => write!(f, "font parse failed: {}", err),
            Self::NoOutput => write!(f, "no output image: generate text first"),
            Self::UnsupportedFormat(format) => {
                write!(f, "unsupported output format {:?} (expected png or jpeg)", format)
            }
            Self::Encode(err) => write!(f, "image encode failed: {}", err),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) | Self::Encode(err) => Some(err),
            Self::FontParse(err) => Some(err),
            Self::EmptyText | Self::NoOutput | Self::UnsupportedFormat(_) => None,
        }
    }
}

impl From<LayoutError> for OverlayError {
    fn from(value: LayoutError) -> Self {
        match value {
            LayoutError::EmptyText => Self::EmptyText,
        }
    }
}

impl From<FontParseError> for OverlayError {
    fn from(value: FontParseError) -> Self {
        Self::FontParse(value)
    }
}
