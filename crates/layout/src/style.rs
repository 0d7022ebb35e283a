use crate::LayoutError;
use cardtext_style::{FontSpec, SymbolFontSpec, TextAlign, TextStyle};
use cardtext_traits::{SymbolFont, SymbolFontError, SymbolFontProvider};
use log::warn;
use std::sync::Arc;

/// A loaded symbol font with the size and alignment it is drawn at.
#[derive(Debug, Clone)]
pub struct SymbolFontRef {
    pub font: Arc<dyn SymbolFont>,
    pub size: f32,
    pub scale_down_to: f32,
    pub alignment: TextAlign,
}

impl SymbolFontRef {
    pub fn new(font: Arc<dyn SymbolFont>, spec: &SymbolFontSpec) -> Self {
        Self {
            font,
            size: spec.size,
            scale_down_to: spec.scale_down_to,
            alignment: spec.alignment,
        }
    }

    pub fn min_scale(&self) -> f32 {
        self.size.min(self.scale_down_to) / self.size.max(0.01)
    }

    pub fn scale_step(&self) -> f32 {
        1.0 / self.size.max(1.0)
    }
}

/// A [`TextStyle`] with its symbol font looked up.
#[derive(Debug, Clone, Default)]
pub struct ComputedTextStyle {
    pub font: FontSpec,
    pub symbol_font: Option<SymbolFontRef>,
}

impl ComputedTextStyle {
    pub fn new(font: FontSpec) -> Self {
        Self {
            font,
            symbol_font: None,
        }
    }

    pub fn with_symbol_font(mut self, symbol_font: SymbolFontRef) -> Self {
        self.symbol_font = Some(symbol_font);
        self
    }

    /// Resolve `style` against `provider`.
    ///
    /// A symbol font the provider does not know is not an error: symbol
    /// markup then renders in the text font.
    pub fn resolve(
        style: &TextStyle,
        provider: &dyn SymbolFontProvider,
    ) -> Result<Self, LayoutError> {
        let symbol_font = match &style.symbol_font {
            None => None,
            Some(spec) => match provider.load(&spec.name) {
                Ok(font) => Some(SymbolFontRef::new(font, spec)),
                Err(SymbolFontError::NotFound(name)) => {
                    warn!(
                        "Symbol font '{}' not found in {}, symbols fall back to the text font.",
                        name,
                        provider.name()
                    );
                    None
                }
                Err(e) => return Err(e.into()),
            },
        };
        Ok(Self {
            font: style.font.clone(),
            symbol_font,
        })
    }
}
