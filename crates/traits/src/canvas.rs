//! The drawing surface text elements measure and draw against.

use cardtext_style::Font;
use cardtext_types::{Point, Size};

bitflags::bitflags! {
    /// Which parts of a text box a draw pass should paint.
    ///
    /// An element draws only when every flag it is tagged with is present.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrawWhat: u8 {
        const NORMAL = 0b0000_0001;
        const BORDERS = 0b0000_0010;
        const EDITING = 0b0000_0100;
        /// Content only shown while the box is being edited (soft separators).
        const ACTIVE = 0b0000_1000;
    }
}

impl Default for DrawWhat {
    fn default() -> Self {
        DrawWhat::NORMAL
    }
}

/// A measuring and drawing surface, typically a rotated device context
/// owned by the renderer.
pub trait RenderContext {
    /// Select the font used by subsequent measure and draw calls.
    fn set_font(&mut self, font: &Font, scale: f32);

    /// Size of `text` in the current font.
    fn text_extent(&self, text: &str) -> Size;

    /// Draw `text` with its top-left corner at `at`, in the current font.
    fn draw_text(&mut self, text: &str, at: Point);
}
