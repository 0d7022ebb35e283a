use super::TextElements;
use crate::LayoutError;
use cardtext_traits::{DrawWhat, RenderContext};
use cardtext_types::{CharInfo, LineBreak, Rect};

/// A nested run sequence that line breaking treats as one unit.
#[derive(Debug, Clone)]
pub struct AtomTextElement {
    pub start: usize,
    pub end: usize,
    pub elements: TextElements,
}

impl AtomTextElement {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw(
        &self,
        dc: &mut dyn RenderContext,
        scale: f32,
        rect: Rect,
        xs: &[f32],
        what: DrawWhat,
        start: usize,
        end: usize,
    ) -> Result<(), LayoutError> {
        self.elements.draw(dc, scale, rect, xs, what, start, end)
    }

    pub(crate) fn char_info(&self, dc: &mut dyn RenderContext, scale: f32, out: &mut Vec<CharInfo>) {
        let first = out.len();
        self.elements.char_info(dc, scale, self.start, self.end, out);
        let last = out.len().saturating_sub(1);
        for info in out.iter_mut().take(last).skip(first) {
            info.break_after = LineBreak::No;
        }
    }
}
