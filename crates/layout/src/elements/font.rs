use super::push_per_byte;
use crate::builder::BRACKET_MARKER;
use crate::util::floor_char_boundary;
use cardtext_style::Font;
use cardtext_traits::{DrawWhat, RenderContext};
use cardtext_types::{CharInfo, LineBreak, Rect, Size};
use std::sync::Arc;

/// Plain text drawn in a single font.
///
/// A bracketed run (keyword placeholders, parameters) covers one extra
/// offset on each side and its content is wrapped in [`BRACKET_MARKER`]s.
#[derive(Debug, Clone)]
pub struct FontTextElement {
    pub start: usize,
    pub end: usize,
    pub content: String,
    pub font: Arc<Font>,
    /// Drawn only in passes that include all of these flags.
    pub draw_as: DrawWhat,
    /// Break kind reported for a newline.
    pub break_style: LineBreak,
    pub bracketed: bool,
}

impl FontTextElement {
    pub(crate) fn push(&mut self, c: char) {
        if self.bracketed {
            let at = self.content.len().saturating_sub(BRACKET_MARKER.len_utf8());
            self.content.insert(at, c);
        } else {
            self.content.push(c);
        }
    }

    /// Byte index into `content` corresponding to the tagged offset `offset`.
    fn content_index(&self, offset: usize) -> usize {
        let index = if offset <= self.start {
            0
        } else if offset >= self.end {
            self.content.len()
        } else if self.bracketed {
            BRACKET_MARKER.len_utf8() + offset - self.start - 1
        } else {
            offset - self.start
        };
        floor_char_boundary(&self.content, index)
    }

    pub(crate) fn draw(
        &self,
        dc: &mut dyn RenderContext,
        scale: f32,
        rect: Rect,
        what: DrawWhat,
        start: usize,
        end: usize,
    ) {
        if !what.contains(self.draw_as) {
            return;
        }
        let text = &self.content[self.content_index(start)..self.content_index(end)];
        let text = text.strip_suffix(' ').unwrap_or(text);
        if text.is_empty() {
            return;
        }
        dc.set_font(&self.font, scale);
        dc.draw_text(text, rect.position());
    }

    pub(crate) fn char_info(&self, dc: &mut dyn RenderContext, scale: f32, out: &mut Vec<CharInfo>) {
        dc.set_font(&self.font, scale);
        let last = self.content.chars().count().saturating_sub(1);
        let mut prev_width = 0.0;
        for (n, (i, c)) in self.content.char_indices().enumerate() {
            let extent = dc.text_extent(&self.content[..i + c.len_utf8()]);
            let break_after = match c {
                '\n' => self.break_style,
                ' ' => LineBreak::Space,
                _ => LineBreak::No,
            };
            let info = CharInfo::new(Size::new(extent.width - prev_width, extent.height), break_after);
            prev_width = extent.width;
            // Each marker stands for one offset.
            let is_marker = self.bracketed && (n == 0 || n == last);
            push_per_byte(out, info, if is_marker { 1 } else { c.len_utf8() });
        }
    }
}
