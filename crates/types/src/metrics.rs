//! Per-position measurements handed from text elements to line layout.

use crate::geometry::Size;

/// Whether, and how, a line may be broken after a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreak {
    /// No break is allowed after this position.
    #[default]
    No,
    /// A break is allowed; the position is a space that vanishes at line end.
    Space,
    /// A hard line break (a newline in ordinary text).
    Hard,
    /// A soft line break: a newline inside a `<line>` span.
    Line,
}

impl LineBreak {
    pub fn allows_break(self) -> bool {
        !matches!(self, LineBreak::No)
    }
}

/// Size of one position plus the break opportunity after it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharInfo {
    pub size: Size,
    pub break_after: LineBreak,
}

impl CharInfo {
    pub fn new(size: Size, break_after: LineBreak) -> Self {
        Self { size, break_after }
    }

    /// Zero-size, non-breaking entry used for markup and continuation bytes.
    pub fn placeholder() -> Self {
        Self::new(Size::zero(), LineBreak::No)
    }
}
