//! A device-independent render context.
//!
//! Measures every char with the same advance, a fixed fraction of the font
//! size, and records draw calls instead of painting. Useful for dumping run
//! layouts without a real font backend.

use cardtext_style::{DEFAULT_FONT_SIZE, Font};
use cardtext_traits::RenderContext;
use cardtext_types::{Point, Size};

/// One recorded `draw_text` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub at: Point,
    pub font: Option<Font>,
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct FixedAdvanceContext {
    /// Advance of one char, as a fraction of the scaled font size.
    pub advance: f32,
    font: Option<Font>,
    scale: f32,
    drawn: Vec<DrawnText>,
}

impl Default for FixedAdvanceContext {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl FixedAdvanceContext {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            font: None,
            scale: 1.0,
            drawn: Vec::new(),
        }
    }

    /// Size of the current font after scaling.
    pub fn font_size(&self) -> f32 {
        self.font.as_ref().map_or(DEFAULT_FONT_SIZE, |f| f.size) * self.scale
    }

    pub fn drawn(&self) -> &[DrawnText] {
        &self.drawn
    }

    pub fn take_drawn(&mut self) -> Vec<DrawnText> {
        std::mem::take(&mut self.drawn)
    }
}

impl RenderContext for FixedAdvanceContext {
    fn set_font(&mut self, font: &Font, scale: f32) {
        self.font = Some(font.clone());
        self.scale = scale;
    }

    fn text_extent(&self, text: &str) -> Size {
        let size = self.font_size();
        Size::new(text.chars().count() as f32 * size * self.advance, size)
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.drawn.push(DrawnText {
            text: text.to_string(),
            at,
            font: self.font.clone(),
            scale: self.scale,
        });
    }
}
