//! Single-pass conversion of a tagged string into text elements.

use crate::elements::{
    AtomTextElement, FontTextElement, SymbolTextElement, TextElement, TextElements,
};
use crate::style::ComputedTextStyle;
use crate::util::floor_char_boundary;
use cardtext_tagged::scanner::{base_name, closed_name};
use cardtext_tagged::{ESCAPE_MARKER, match_close_tag, skip_tag, tag_at};
use cardtext_traits::{Context, DrawWhat};
use cardtext_types::{Color, LineBreak};
use log::{debug, trace};
use std::ops::Range;
use std::sync::Arc;

/// Colors given to successive `<param>` scopes.
pub const PARAM_COLORS: [Color; 6] = [
    Color::rgb(0, 170, 0),
    Color::rgb(0, 0, 200),
    Color::rgb(200, 0, 100),
    Color::rgb(200, 200, 0),
    Color::rgb(0, 170, 170),
    Color::rgb(200, 0, 0),
];

/// Wraps the content of bracketed runs.
pub const BRACKET_MARKER: char = '\u{FFFD}';

/// Tags that change how the text after them is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Bold,
    Italic,
    Symbol,
    Soft,
    KeywordPlaceholder,
    Param,
    Line,
    Atom,
}

impl TagKind {
    /// Kind of the tag named `name` and whether it is a closer.
    fn classify(name: &str) -> Option<(TagKind, bool)> {
        let (bare, closing) = match closed_name(name) {
            Some(closed) => (closed, true),
            None => (name, false),
        };
        let kind = if bare.starts_with("atom-kwpph") {
            TagKind::KeywordPlaceholder
        } else if bare.starts_with("sep-soft") {
            TagKind::Soft
        } else {
            match base_name(bare) {
                "b" => TagKind::Bold,
                "i" => TagKind::Italic,
                "sym" => TagKind::Symbol,
                "param" => TagKind::Param,
                "line" => TagKind::Line,
                "atom" => TagKind::Atom,
                _ => return None,
            }
        };
        Some((kind, closing))
    }
}

/// Formatting state carried through one build, including into atoms.
#[derive(Debug, Default)]
struct BuildState {
    bold: i32,
    italic: i32,
    symbol: i32,
    soft: i32,
    kwpph: i32,
    param: i32,
    line: i32,
    param_id: usize,
    param_colors: Vec<Color>,
    bracket: bool,
}

impl BuildState {
    fn apply(&mut self, kind: TagKind, closing: bool) {
        let delta = if closing { -1 } else { 1 };
        match kind {
            TagKind::Bold => self.bold += delta,
            TagKind::Italic => self.italic += delta,
            TagKind::Symbol => self.symbol += delta,
            TagKind::Soft => self.soft += delta,
            TagKind::KeywordPlaceholder => self.kwpph += delta,
            TagKind::Line => self.line += delta,
            TagKind::Param => {
                self.param += delta;
                if closing {
                    self.param_colors.pop();
                } else {
                    self.param_colors
                        .push(PARAM_COLORS[self.param_id % PARAM_COLORS.len()]);
                    self.param_id += 1;
                }
            }
            // Atoms are handled by the builder; a stray closer does nothing.
            TagKind::Atom => {}
        }
    }

    fn param_color(&self) -> Option<Color> {
        if self.param > 0 {
            self.param_colors.last().copied()
        } else {
            None
        }
    }
}

/// Builds [`TextElements`] from a tagged string.
pub struct TextElementsBuilder<'a> {
    text: &'a str,
    style: &'a ComputedTextStyle,
    ctx: &'a Context,
    state: BuildState,
}

impl<'a> TextElementsBuilder<'a> {
    pub fn new(text: &'a str, style: &'a ComputedTextStyle, ctx: &'a Context) -> Self {
        Self {
            text,
            style,
            ctx,
            state: BuildState::default(),
        }
    }

    /// Build the runs for the tagged offsets `range`.
    pub fn build(mut self, range: Range<usize>) -> TextElements {
        let end = floor_char_boundary(self.text, range.end);
        let start = floor_char_boundary(self.text, range.start.min(end));
        let mut elements = Vec::new();
        self.fill(&mut elements, start, end);
        TextElements { elements }
    }

    fn fill(&mut self, elements: &mut Vec<TextElement>, start: usize, end: usize) {
        let text = self.text;
        let mut pos = start;
        while pos < end {
            let Some(c) = text[pos..].chars().next() else {
                break;
            };
            if c != '<' {
                let shown = if c == ESCAPE_MARKER { '<' } else { c };
                self.push_char(elements, pos, shown, c.len_utf8());
                pos += c.len_utf8();
                continue;
            }

            let name = tag_at(text, pos);
            let after = skip_tag(text, pos);
            match TagKind::classify(name) {
                Some((TagKind::Atom, false)) => {
                    let close = match match_close_tag(text, pos).filter(|&close| close <= end) {
                        Some(close) => close,
                        None => {
                            debug!("No closer for <{}> at {}, atom extends to {}.", name, pos, end);
                            end
                        }
                    };
                    let inner = after.min(close);
                    let mut nested = Vec::new();
                    self.fill(&mut nested, inner, close);
                    // Bracketed runs inside reach one offset into the atom's tags.
                    let start = nested.first().map_or(inner, |e| e.start().min(inner));
                    let end = nested.last().map_or(close, |e| e.end().max(close));
                    elements.push(TextElement::Atom(AtomTextElement {
                        start,
                        end,
                        elements: TextElements { elements: nested },
                    }));
                    pos = if close < end { skip_tag(text, close) } else { end };
                }
                Some((kind, closing)) => {
                    self.state.apply(kind, closing);
                    pos = after;
                }
                None => {
                    trace!("Ignoring tag <{}> at {}.", name, pos);
                    pos = after;
                }
            }
        }
    }

    fn push_char(&mut self, elements: &mut Vec<TextElement>, pos: usize, c: char, width: usize) {
        let state = &mut self.state;
        let shift = usize::from(state.bracket);

        match elements.last_mut() {
            Some(TextElement::Font(run)) if run.end == pos + shift => {
                run.end = pos + width + shift;
                run.push(c);
                return;
            }
            Some(TextElement::Symbol(run)) if run.end == pos + shift => {
                run.end = pos + width + shift;
                run.push(c);
                return;
            }
            _ => {}
        }

        if state.symbol > 0 {
            if let Some(symbol_font) = &self.style.symbol_font {
                state.bracket = false;
                elements.push(TextElement::Symbol(SymbolTextElement {
                    start: pos,
                    end: pos + width,
                    content: c.to_string(),
                    font: symbol_font.clone(),
                    ctx: self.ctx.clone(),
                }));
                return;
            }
        }

        let font = self.style.font.make(
            state.bold > 0,
            state.italic > 0,
            state.soft > 0 || state.kwpph > 0,
            state.param_color(),
        );
        state.bracket = state.kwpph > 0 || state.param > 0;
        let (start, end, content) = if state.bracket {
            (
                pos.saturating_sub(1),
                pos + width + 1,
                format!("{BRACKET_MARKER}{c}{BRACKET_MARKER}"),
            )
        } else {
            (pos, pos + width, c.to_string())
        };
        elements.push(TextElement::Font(FontTextElement {
            start,
            end,
            content,
            font: Arc::new(font),
            draw_as: if state.soft > 0 {
                DrawWhat::ACTIVE
            } else {
                DrawWhat::NORMAL
            },
            break_style: if state.line > 0 {
                LineBreak::Line
            } else {
                LineBreak::Hard
            },
            bracketed: state.bracket,
        }));
    }
}
