use crate::elements::{FontTextElement, TextElement, TextElements};
use crate::style::{ComputedTextStyle, SymbolFontRef};
use cardtext_style::{FontSpec, SymbolFontSpec, TextAlign};
use cardtext_traits::{Context, RenderContext, SymbolFont};
use cardtext_types::{CharInfo, LineBreak, Rect, Size};
use std::sync::{Arc, Mutex};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One recorded symbol draw: text, size, alignment and the `card` variable.
pub type SymbolDraw = (String, f32, TextAlign, Option<String>);

/// A symbol font where every symbol is a `size` wide square. Records draws.
#[derive(Debug, Default)]
pub struct RecordingSymbolFont {
    pub draws: Mutex<Vec<SymbolDraw>>,
}

impl RecordingSymbolFont {
    pub fn draws(&self) -> Vec<SymbolDraw> {
        self.draws.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl SymbolFont for RecordingSymbolFont {
    fn name(&self) -> &str {
        "test-symbols"
    }

    fn draw(
        &self,
        _dc: &mut dyn RenderContext,
        ctx: &Context,
        _rect: Rect,
        size: f32,
        align: TextAlign,
        text: &str,
    ) {
        if let Ok(mut draws) = self.draws.lock() {
            draws.push((text.to_string(), size, align, ctx.get("card").map(String::from)));
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

/// 10pt serif text, no symbol font.
pub fn test_style() -> ComputedTextStyle {
    ComputedTextStyle::new(FontSpec::new("Serif", 10.0))
}

/// 10pt serif text with an 8pt recording symbol font.
pub fn test_style_with_symbols() -> (ComputedTextStyle, Arc<RecordingSymbolFont>) {
    let font = Arc::new(RecordingSymbolFont::default());
    let symbol = SymbolFontRef::new(font.clone(), &SymbolFontSpec::new("test-symbols", 8.0));
    (test_style().with_symbol_font(symbol), font)
}

pub fn build(text: &str) -> TextElements {
    TextElements::from_tagged(text, &test_style(), &Context::new())
}

/// The font runs of `elements`, panicking on any other kind.
pub fn font_runs(elements: &TextElements) -> Vec<&FontTextElement> {
    elements
        .iter()
        .map(|e| match e {
            TextElement::Font(f) => f,
            other => panic!("expected a font run, got {:?}", other),
        })
        .collect()
}
