use crate::font::FontSpec;
use crate::symbol::SymbolFontSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    pub(crate) fn center() -> Self {
        TextAlign::Center
    }
}

/// Style descriptor handed to the text element builder.
///
/// Loaded from JSON, e.g.
/// `{"font": "10pt MPlantin", "symbolFont": {"name": "mana", "size": 9}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub font: FontSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_font: Option<SymbolFontSpec>,
}

impl TextStyle {
    pub fn new(font: FontSpec) -> Self {
        Self {
            font,
            symbol_font: None,
        }
    }

    pub fn with_symbol_font(mut self, symbol_font: SymbolFontSpec) -> Self {
        self.symbol_font = Some(symbol_font);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
