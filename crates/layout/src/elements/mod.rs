//! Text elements: the styled runs a tagged string is drawn as.
//!
//! Run ranges are byte offsets into the tagged string the runs were built
//! from. Offsets covered by markup belong to no run.

pub mod atom;
pub mod font;
pub mod symbol;

pub use atom::AtomTextElement;
pub use font::FontTextElement;
pub use symbol::SymbolTextElement;

use crate::LayoutError;
use crate::builder::TextElementsBuilder;
use crate::style::ComputedTextStyle;
use cardtext_traits::{Context, DrawWhat, RenderContext};
use cardtext_types::{CharInfo, Rect};
use std::ops::Range;

/// One run of a [`TextElements`] sequence.
#[derive(Debug, Clone)]
pub enum TextElement {
    Font(FontTextElement),
    Symbol(SymbolTextElement),
    /// Never split by line breaking.
    Atom(AtomTextElement),
}

impl TextElement {
    pub fn start(&self) -> usize {
        match self {
            TextElement::Font(e) => e.start,
            TextElement::Symbol(e) => e.start,
            TextElement::Atom(e) => e.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            TextElement::Font(e) => e.end,
            TextElement::Symbol(e) => e.end,
            TextElement::Atom(e) => e.end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Displayed text of a font or symbol run.
    pub fn content(&self) -> Option<&str> {
        match self {
            TextElement::Font(e) => Some(&e.content),
            TextElement::Symbol(e) => Some(&e.content),
            TextElement::Atom(_) => None,
        }
    }

    /// Draw the part `start..end` of this run into `rect`.
    ///
    /// `xs[i]` is the x position of offset `start + i`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        dc: &mut dyn RenderContext,
        scale: f32,
        rect: Rect,
        xs: &[f32],
        what: DrawWhat,
        start: usize,
        end: usize,
    ) -> Result<(), LayoutError> {
        match self {
            TextElement::Font(e) => {
                e.draw(dc, scale, rect, what, start, end);
                Ok(())
            }
            TextElement::Symbol(e) => {
                e.draw(dc, scale, rect, start, end);
                Ok(())
            }
            TextElement::Atom(e) => e.draw(dc, scale, rect, xs, what, start, end),
        }
    }

    /// Append one entry per offset of this run to `out`.
    pub fn char_info(&self, dc: &mut dyn RenderContext, scale: f32, out: &mut Vec<CharInfo>) {
        match self {
            TextElement::Font(e) => e.char_info(dc, scale, out),
            TextElement::Symbol(e) => e.char_info(dc, scale, out),
            TextElement::Atom(e) => e.char_info(dc, scale, out),
        }
    }

    pub fn min_scale(&self) -> f32 {
        match self {
            TextElement::Font(e) => e.font.min_scale(),
            TextElement::Symbol(e) => e.font.min_scale(),
            TextElement::Atom(e) => e.elements.min_scale(),
        }
    }

    pub fn scale_step(&self) -> f32 {
        match self {
            TextElement::Font(e) => e.font.scale_step(),
            TextElement::Symbol(e) => e.font.scale_step(),
            TextElement::Atom(e) => e.elements.scale_step(),
        }
    }
}

/// Push `info` for the first byte of a char and placeholders for the rest.
pub(crate) fn push_per_byte(out: &mut Vec<CharInfo>, info: CharInfo, byte_len: usize) {
    out.push(info);
    for _ in 1..byte_len {
        out.push(CharInfo::placeholder());
    }
}

/// An ordered sequence of runs, built fresh from a tagged string.
#[derive(Debug, Clone, Default)]
pub struct TextElements {
    pub(crate) elements: Vec<TextElement>,
}

impl TextElements {
    /// Runs for the whole of `text`.
    pub fn from_tagged(text: &str, style: &ComputedTextStyle, ctx: &Context) -> Self {
        Self::from_tagged_range(text, 0..text.len(), style, ctx)
    }

    /// Runs for the tagged offsets `range` of `text`.
    pub fn from_tagged_range(
        text: &str,
        range: Range<usize>,
        style: &ComputedTextStyle,
        ctx: &Context,
    ) -> Self {
        TextElementsBuilder::new(text, style, ctx).build(range)
    }

    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Draw the offsets `start..end` into `rect`.
    ///
    /// `xs[i]` is the x position of offset `start + i`; it needs more than
    /// `end - start` entries.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        dc: &mut dyn RenderContext,
        scale: f32,
        rect: Rect,
        xs: &[f32],
        what: DrawWhat,
        start: usize,
        end: usize,
    ) -> Result<(), LayoutError> {
        let needed = end.saturating_sub(start) + 1;
        if xs.len() < needed {
            return Err(LayoutError::PositionTable {
                needed,
                got: xs.len(),
            });
        }
        for e in &self.elements {
            let from = start.max(e.start());
            let to = end.min(e.end());
            if from < to {
                let x0 = xs[from - start];
                let sub = Rect::new(
                    rect.x + x0 - xs[0],
                    rect.y,
                    xs[to - start] - x0,
                    rect.height,
                );
                e.draw(dc, scale, sub, &xs[from - start..], what, from, to)?;
            }
            if end <= e.end() {
                break;
            }
        }
        Ok(())
    }

    /// Append per-offset metrics for `start..end` to `out`.
    ///
    /// Offsets not covered by a run (markup) get zero-size, non-breaking
    /// entries, so afterwards `out[i]` describes offset `i` and
    /// `out.len() >= end`.
    pub fn char_info(
        &self,
        dc: &mut dyn RenderContext,
        scale: f32,
        start: usize,
        end: usize,
        out: &mut Vec<CharInfo>,
    ) {
        for e in self.elements.iter().filter(|e| e.end() > start) {
            while out.len() < e.start() {
                out.push(CharInfo::placeholder());
            }
            e.char_info(dc, scale, out);
        }
        while out.len() < end {
            out.push(CharInfo::placeholder());
        }
    }

    /// How far the whole sequence may shrink: the most demanding run wins.
    pub fn min_scale(&self) -> f32 {
        self.elements
            .iter()
            .map(TextElement::min_scale)
            .fold(0.0001, f32::max)
    }

    pub fn scale_step(&self) -> f32 {
        self.elements
            .iter()
            .map(TextElement::scale_step)
            .fold(1.0, f32::min)
    }
}

impl<'a> IntoIterator for &'a TextElements {
    type Item = &'a TextElement;
    type IntoIter = std::slice::Iter<'a, TextElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
