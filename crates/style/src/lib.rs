pub mod font;
pub mod parsers;
pub mod symbol;
pub mod text;

pub use font::{DEFAULT_FONT_SIZE, Font, FontSpec, FontStyle, FontWeight};
pub use parsers::StyleParseError;
pub use symbol::SymbolFontSpec;
pub use text::{TextAlign, TextStyle};
