use std::collections::HashMap;
use std::path::{Path, PathBuf};

use img_caption_glyph::DEFAULT_FONT_SIZE_PT;
use img_caption_layout::Cursor;
use serde::Deserialize;

use crate::color::{parse_hex_color, try_parse_hex_color};
use crate::error::OverlayError;
use crate::pipeline::OutputFormat;
use crate::request::LayoutRequest;
use crate::session::EditorSession;

/// A JSON description of captions to stack onto one image.
///
/// ```json
/// {
///   "source": "photo.jpg",
///   "font": "fonts/DejaVuSans.ttf",
///   "output": "photo-captioned.png",
///   "captions": [
///     { "text": "Top line", "start_x": 20, "start_y": 60, "color": "#fff" },
///     { "text": "Smaller note", "font_size_pt": 8, "start_y": 400, "line_wrap_x": 300 }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OverlayJob {
    /// Encoded PNG/JPEG to draw on.
    pub source: PathBuf,
    /// Font used by captions that do not name their own.
    pub font: PathBuf,
    /// Where the CLI writes the result.
    pub output: PathBuf,
    /// `png` or `jpeg`; inferred from `output`'s extension when absent.
    #[serde(default)]
    pub format: Option<String>,
    /// Drawn in order on one session, so later captions land on top.
    pub captions: Vec<CaptionSpec>,
}

/// One caption inside an [`OverlayJob`]. Omitted numbers mean "default".
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CaptionSpec {
    pub text: String,
    #[serde(default = "default_font_size_pt")]
    pub font_size_pt: f32,
    /// Hex color; opaque black when absent.
    #[serde(default)]
    pub color: Option<String>,
    /// Per-caption font override.
    #[serde(default)]
    pub font: Option<PathBuf>,
    #[serde(default)]
    pub start_x: i32,
    #[serde(default)]
    pub start_y: i32,
    #[serde(default)]
    pub line_wrap_x: i32,
    #[serde(default)]
    pub line_wrap_y: i32,
    #[serde(default)]
    pub line_height: i32,
}

fn default_font_size_pt() -> f32 {
    DEFAULT_FONT_SIZE_PT
}

impl CaptionSpec {
    /// Build the request for this caption using `font_data`.
    ///
    /// A color that does not parse is kept as transparent (matching
    /// [`parse_hex_color`]) and reported with a warning.
    pub fn to_request(&self, font_data: Vec<u8>) -> LayoutRequest {
        let mut request = LayoutRequest::new(font_data, self.text.clone());
        request.font_size_pt = self.font_size_pt;
        if let Some(hex) = &self.color {
            if try_parse_hex_color(hex).is_none() {
                log::warn!("caption color {:?} is not valid hex; text will be invisible", hex);
            }
            request.font_color = parse_hex_color(hex);
        }
        request.start_x = self.start_x;
        request.start_y = self.start_y;
        request.line_wrap_x = self.line_wrap_x;
        request.line_wrap_y = self.line_wrap_y;
        request.line_height = self.line_height;
        request
    }
}

/// Result of running a job: encoded bytes plus each caption's final cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct JobReport {
    pub format: OutputFormat,
    pub encoded: Vec<u8>,
    pub cursors: Vec<Cursor>,
}

/// Job loading or execution failure.
#[derive(Debug)]
pub enum JobError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Overlay(OverlayError),
}

impl core::fmt::Display for JobError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Json(err) => write!(f, "invalid job file: {}", err),
            Self::Overlay(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for JobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Overlay(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for JobError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<OverlayError> for JobError {
    fn from(value: OverlayError) -> Self {
        Self::Overlay(value)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, JobError> {
    std::fs::read(path).map_err(|source| JobError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl OverlayJob {
    pub fn from_json_str(json: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a job file; relative paths inside it resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JobError> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        let job: Self = serde_json::from_slice(&bytes)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(job.rebase(base))
    }

    /// Resolve every relative path against `dir`.
    pub fn rebase(mut self, dir: &Path) -> Self {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        };
        rebase(&mut self.source);
        rebase(&mut self.font);
        rebase(&mut self.output);
        for caption in &mut self.captions {
            if let Some(font) = caption.font.as_mut() {
                rebase(font);
            }
        }
        self
    }

    /// Explicit `format`, else the `output` extension.
    pub fn output_format(&self) -> Result<OutputFormat, OverlayError> {
        if let Some(format) = &self.format {
            return format.parse();
        }
        let ext = self
            .output
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        OutputFormat::from_extension(ext)
            .ok_or_else(|| OverlayError::UnsupportedFormat(ext.to_string()))
    }

    /// Read inputs, draw every caption in order and encode the result.
    ///
    /// Nothing is written; the caller decides where `encoded` goes.
    pub fn run(&self) -> Result<JobReport, JobError> {
        let format = self.output_format()?;
        let mut session = EditorSession::new(read_file(&self.source)?);
        let mut fonts: HashMap<&Path, Vec<u8>> = HashMap::new();
        let mut cursors = Vec::with_capacity(self.captions.len());

        for (idx, caption) in self.captions.iter().enumerate() {
            let font_path = caption.font.as_deref().unwrap_or(&self.font);
            let font_data = match fonts.get(font_path) {
                Some(data) => data.clone(),
                None => {
                    let data = read_file(font_path)?;
                    fonts.insert(font_path, data.clone());
                    data
                }
            };
            let outcome = session.overlay(&caption.to_request(font_data))?;
            log::info!(
                "caption {}: {} word(s) drawn, {} dropped, cursor ({}, {})",
                idx,
                outcome.committed_words,
                outcome.dropped_words,
                outcome.cursor.x,
                outcome.cursor.y
            );
            cursors.push(outcome.cursor);
        }

        let encoded = session.encode(format)?;
        Ok(JobReport {
            format,
            encoded,
            cursors,
        })
    }
}
