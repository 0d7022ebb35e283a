pub mod canvas;
pub mod context;
pub mod symbol_font;

pub use canvas::{DrawWhat, RenderContext};
pub use context::Context;
pub use symbol_font::{
    InMemorySymbolFontProvider, SymbolFont, SymbolFontError, SymbolFontProvider,
};
