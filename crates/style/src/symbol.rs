use crate::parsers::deserialize_length;
use crate::text::TextAlign;
use serde::{Deserialize, Serialize};

fn default_symbol_size() -> f32 {
    crate::font::DEFAULT_FONT_SIZE
}

fn default_symbol_scale_down_to() -> f32 {
    1.0
}

/// Reference to a symbol font by name, with the size it is drawn at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFontSpec {
    pub name: String,
    #[serde(default = "default_symbol_size", deserialize_with = "deserialize_length")]
    pub size: f32,
    #[serde(default = "default_symbol_scale_down_to", deserialize_with = "deserialize_length")]
    pub scale_down_to: f32,
    #[serde(default = "TextAlign::center")]
    pub alignment: TextAlign,
}

impl SymbolFontSpec {
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
            scale_down_to: default_symbol_scale_down_to(),
            alignment: TextAlign::Center,
        }
    }
}
