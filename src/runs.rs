//! Serializable dump of the runs a tagged string builds into.

use cardtext_layout::{FixedAdvanceContext, TextElement, TextElements};
use cardtext_traits::{DrawWhat, RenderContext};
use cardtext_types::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Font,
    Symbol,
    Atom,
}

/// One run as reported by `cardtext runs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub kind: RunKind,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub bold: bool,
    pub italic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Drawn only while editing (soft separators).
    pub active_only: bool,
    /// Total advance at scale 1.
    pub width: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RunSummary>,
}

/// Summarize `elements`, measuring with `dc`.
pub fn summarize(elements: &TextElements, dc: &mut dyn RenderContext) -> Vec<RunSummary> {
    elements.iter().map(|e| summarize_one(e, dc)).collect()
}

fn summarize_one(element: &TextElement, dc: &mut dyn RenderContext) -> RunSummary {
    let mut infos = Vec::new();
    element.char_info(dc, 1.0, &mut infos);
    let width: f32 = infos.iter().map(|i| i.size.width).sum();

    let mut summary = RunSummary {
        kind: RunKind::Font,
        start: element.start(),
        end: element.end(),
        text: element.content().map(String::from),
        family: None,
        bold: false,
        italic: false,
        color: None,
        active_only: false,
        width,
        children: Vec::new(),
    };
    match element {
        TextElement::Font(run) => {
            summary.family = Some(run.font.family.clone());
            summary.bold = run.font.is_bold();
            summary.italic = run.font.is_italic();
            summary.color = Some(run.font.color);
            summary.active_only = !run.draw_as.contains(DrawWhat::NORMAL);
        }
        TextElement::Symbol(run) => {
            summary.kind = RunKind::Symbol;
            summary.family = Some(run.font.font.name().to_string());
        }
        TextElement::Atom(atom) => {
            summary.kind = RunKind::Atom;
            summary.children = summarize(&atom.elements, dc);
        }
    }
    summary
}

/// Summaries measured with a [`FixedAdvanceContext`].
pub fn summarize_fixed(elements: &TextElements) -> Vec<RunSummary> {
    summarize(elements, &mut FixedAdvanceContext::default())
}
