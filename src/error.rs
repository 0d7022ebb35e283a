use cardtext_layout::LayoutError;
use cardtext_style::StyleParseError;
use cardtext_traits::SymbolFontError;
use thiserror::Error;

/// Top-level error for everything that crosses the configuration or I/O boundary.
///
/// Tagged-string editing itself cannot fail; only loading styles, looking up
/// symbol fonts and reading files can.
#[derive(Error, Debug)]
pub enum CardTextError {
    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),

    #[error("Symbol font error: {0}")]
    SymbolFont(#[from] SymbolFontError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
