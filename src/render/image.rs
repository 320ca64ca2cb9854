/// Text-to-bitmap rendering of a day's reply lines
use std::io::Cursor;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, ImageFormat, Rgb};
use image::imageops::FilterType;
use imageproc::drawing::{draw_text_mut, text_size};
use rand::Rng;

use crate::constants::{FONT_SIZE, LINE_STEP, MAX_COLOR_CHANNEL, SIDE_MARGIN, TOP_MARGIN};

/// Errors from asset loading and rasterization
#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    InvalidFont,
    Image(image::ImageError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "failed to read render asset: {}", e),
            RenderError::InvalidFont => write!(f, "font file is not a usable TrueType font"),
            RenderError::Image(e) => write!(f, "image operation failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

/// Seam between the request pipeline and the rasterizer.
/// Implemented by [`ImageRenderer`] and by stubs in tests.
pub trait RenderImage {
    /// Render reply lines to an encoded PNG buffer
    fn render_lines(&self, lines: &[String]) -> Result<Vec<u8>, RenderError>;
}

/// Renders reply lines onto a resized copy of a background template.
/// Font and background are loaded once at startup.
pub struct ImageRenderer {
    font: FontVec,
    background: DynamicImage,
}

impl ImageRenderer {
    pub fn load(font_path: &Path, background_path: &Path) -> Result<Self, RenderError> {
        let font_bytes = std::fs::read(font_path).map_err(RenderError::Io)?;
        let font = FontVec::try_from_vec(font_bytes).map_err(|_| RenderError::InvalidFont)?;
        let background = image::open(background_path).map_err(RenderError::Image)?;

        Ok(Self { font, background })
    }
}

impl RenderImage for ImageRenderer {
    fn render_lines(&self, lines: &[String]) -> Result<Vec<u8>, RenderError> {
        let scale = PxScale::from(FONT_SIZE);

        // Canvas size: widest measured line, fixed step per line,
        // fixed margins all around.
        let max_width = lines
            .iter()
            .map(|line| text_size(scale, &self.font, line).0)
            .max()
            .unwrap_or(0);
        let width = max_width + 2 * SIDE_MARGIN;
        let height = LINE_STEP * lines.len() as u32 + 2 * TOP_MARGIN;

        let mut canvas = self
            .background
            .resize_exact(width.max(1), height.max(1), FilterType::Triangle)
            .to_rgb8();

        let mut rng = rand::rng();
        let mut y = TOP_MARGIN as i32;
        for line in lines {
            let color = Rgb([
                rng.random_range(0..=MAX_COLOR_CHANNEL),
                rng.random_range(0..=MAX_COLOR_CHANNEL),
                rng.random_range(0..=MAX_COLOR_CHANNEL),
            ]);
            draw_text_mut(&mut canvas, color, SIDE_MARGIN as i32, y, scale, &self.font, line);
            y += LINE_STEP as i32;
        }

        let mut buffer = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(RenderError::Image)?;

        Ok(buffer)
    }
}
