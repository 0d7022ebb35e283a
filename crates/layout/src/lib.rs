use cardtext_traits::SymbolFontError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Symbol font lookup failed: {0}")]
    SymbolFont(#[from] SymbolFontError),
    #[error("Position table has {got} entries, {needed} are needed.")]
    PositionTable { needed: usize, got: usize },
}

pub mod builder;
pub mod elements;
pub mod measure;
pub mod style;
pub mod util;

pub use self::builder::{BRACKET_MARKER, PARAM_COLORS, TextElementsBuilder};
pub use self::elements::{
    AtomTextElement, FontTextElement, SymbolTextElement, TextElement, TextElements,
};
pub use self::measure::{DrawnText, FixedAdvanceContext};
pub use self::style::{ComputedTextStyle, SymbolFontRef};

#[cfg(test)]
mod test_utils;
