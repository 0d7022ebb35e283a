use super::push_per_byte;
use crate::style::SymbolFontRef;
use crate::util::floor_char_boundary;
use cardtext_traits::{Context, RenderContext};
use cardtext_types::{CharInfo, Rect};

/// Text drawn as glyphs of a symbol font.
#[derive(Debug, Clone)]
pub struct SymbolTextElement {
    pub start: usize,
    pub end: usize,
    pub content: String,
    pub font: SymbolFontRef,
    /// Context symbol codes are resolved in.
    pub ctx: Context,
}

impl SymbolTextElement {
    pub(crate) fn push(&mut self, c: char) {
        self.content.push(c);
    }

    fn content_index(&self, offset: usize) -> usize {
        floor_char_boundary(&self.content, offset.saturating_sub(self.start))
    }

    pub(crate) fn draw(
        &self,
        dc: &mut dyn RenderContext,
        scale: f32,
        rect: Rect,
        start: usize,
        end: usize,
    ) {
        let text = &self.content[self.content_index(start)..self.content_index(end)];
        self.font.font.draw(
            dc,
            &self.ctx,
            rect,
            self.font.size * scale,
            self.font.alignment,
            text,
        );
    }

    pub(crate) fn char_info(&self, dc: &mut dyn RenderContext, scale: f32, out: &mut Vec<CharInfo>) {
        let infos = self
            .font
            .font
            .char_info(dc, &self.ctx, self.font.size * scale, &self.content);
        let mut infos = infos.into_iter();
        for c in self.content.chars() {
            let info = infos.next().unwrap_or_else(CharInfo::placeholder);
            push_per_byte(out, info, c.len_utf8());
        }
    }
}
