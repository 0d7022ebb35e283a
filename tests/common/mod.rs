#![allow(dead_code)]

use cardtext::style::TextAlign;
use cardtext::traits::{Context, RenderContext, SymbolFont};
use cardtext::types::{CharInfo, LineBreak, Rect, Size};
use cardtext::{InMemorySymbolFontProvider, TextStyle};
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A symbol font drawing every code as a `size` wide square.
#[derive(Debug)]
pub struct GridSymbolFont {
    name: String,
    drawn: Mutex<Vec<String>>,
}

impl GridSymbolFont {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            drawn: Mutex::new(Vec::new()),
        }
    }

    /// Every text drawn so far, in order.
    pub fn drawn(&self) -> Vec<String> {
        self.drawn.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl SymbolFont for GridSymbolFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(
        &self,
        _dc: &mut dyn RenderContext,
        _ctx: &Context,
        _rect: Rect,
        _size: f32,
        _align: TextAlign,
        text: &str,
    ) {
        if let Ok(mut drawn) = self.drawn.lock() {
            drawn.push(text.to_string());
        }
    }

    fn char_info(
        &self,
        _dc: &mut dyn RenderContext,
        _ctx: &Context,
        size: f32,
        text: &str,
    ) -> Vec<CharInfo> {
        text.chars()
            .map(|_| CharInfo::new(Size::new(size, size), LineBreak::No))
            .collect()
    }
}

/// 10pt serif text with a 9pt `mana` symbol font.
pub fn card_style() -> TextStyle {
    TextStyle::from_json(r#"{"font": "10pt Serif", "symbolFont": {"name": "mana", "size": 9}}"#)
        .expect("valid test style")
}

/// A provider holding one `mana` grid font, returned alongside it.
pub fn mana_provider() -> (InMemorySymbolFontProvider, Arc<GridSymbolFont>) {
    let font = Arc::new(GridSymbolFont::new("mana"));
    let provider = InMemorySymbolFontProvider::new();
    provider
        .add(font.clone())
        .expect("in-memory provider accepts fonts");
    (provider, font)
}
