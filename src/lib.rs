//! Tagged-markup text engine for card rules text.
//!
//! Rules text is stored as a plain string with inline tags
//! (`<b>`, `<sym>`, `<param>`, `<atom>`, ...). This crate ties together the
//! pieces that edit such strings, map between raw offsets and caret
//! positions, and break them into styled runs for drawing:
//!
//! - [`tagged`]: scanning, editing, simplification and cursor mapping.
//! - [`layout`]: building [`TextElements`] from a string, a style and a context.
//! - [`style`], [`traits`], [`types`]: configuration, collaborator seams and values.

pub mod error;
pub mod runs;

pub use cardtext_layout as layout;
pub use cardtext_style as style;
pub use cardtext_tagged as tagged;
pub use cardtext_traits as traits;
pub use cardtext_types as types;

pub use cardtext_layout::{ComputedTextStyle, FixedAdvanceContext, TextElement, TextElements};
pub use cardtext_style::{FontSpec, SymbolFontSpec, TextStyle};
pub use cardtext_tagged::{
    Movement, cursor_to_index, index_to_cursor, simplify_tagged, tagged_substr_replace, untag,
    verify_tagged,
};
pub use cardtext_traits::{Context, DrawWhat, InMemorySymbolFontProvider, SymbolFontProvider};
pub use error::CardTextError;
pub use runs::{RunKind, RunSummary};

use std::path::Path;

/// Read a [`TextStyle`] from a JSON file.
pub fn load_style(path: impl AsRef<Path>) -> Result<TextStyle, CardTextError> {
    let json = std::fs::read_to_string(path)?;
    Ok(TextStyle::from_json(&json)?)
}

/// Build the runs of `text` in `style`, with symbol fonts looked up in `provider`.
pub fn build_runs(
    text: &str,
    style: &TextStyle,
    provider: &dyn SymbolFontProvider,
    ctx: &Context,
) -> Result<TextElements, CardTextError> {
    let computed = ComputedTextStyle::resolve(style, provider)?;
    Ok(TextElements::from_tagged(text, &computed, ctx))
}
