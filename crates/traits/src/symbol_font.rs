//! Symbol fonts and the providers that look them up by name.
//!
//! A symbol font turns short codes (`"W"`, `"2/G"`, `"T"`) into glyph images.
//! The text layer only needs to measure and draw them, so the trait surface
//! is kept to exactly that.

use crate::canvas::RenderContext;
use crate::context::Context;
use cardtext_style::TextAlign;
use cardtext_types::{CharInfo, Rect};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Errors that can occur while looking up a symbol font.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbolFontError {
    #[error("Symbol font not found: {0}")]
    NotFound(String),

    #[error("Failed to load symbol font '{name}': {message}")]
    LoadFailed { name: String, message: String },
}

/// A font of symbols, drawn from text codes.
pub trait SymbolFont: Send + Sync + Debug {
    fn name(&self) -> &str;

    /// Draw `text` as symbols inside `rect`, `size` points tall.
    fn draw(
        &self,
        dc: &mut dyn RenderContext,
        ctx: &Context,
        rect: Rect,
        size: f32,
        align: TextAlign,
        text: &str,
    );

    /// Measure `text` as symbols, one entry per char of `text`.
    ///
    /// A symbol spanning several chars reports its full size on its first
    /// char and zero-size, non-breaking entries on the rest.
    fn char_info(
        &self,
        dc: &mut dyn RenderContext,
        ctx: &Context,
        size: f32,
        text: &str,
    ) -> Vec<CharInfo>;
}

/// Look up symbol fonts by name.
pub trait SymbolFontProvider: Send + Sync + Debug {
    fn load(&self, name: &str) -> Result<Arc<dyn SymbolFont>, SymbolFontError>;

    fn exists(&self, name: &str) -> bool;

    fn name(&self) -> &'static str;
}

/// Symbol font provider backed by an in-memory map.
///
/// Useful for tests and for embedders that construct their fonts up front.
#[derive(Debug, Default)]
pub struct InMemorySymbolFontProvider {
    fonts: RwLock<HashMap<String, Arc<dyn SymbolFont>>>,
}

impl InMemorySymbolFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font under its own name, replacing any previous one.
    pub fn add(&self, font: Arc<dyn SymbolFont>) -> Result<(), SymbolFontError> {
        let name = font.name().to_string();
        let mut fonts = self
            .fonts
            .write()
            .map_err(|_| SymbolFontError::LoadFailed {
                name: name.clone(),
                message: "symbol font store lock poisoned".to_string(),
            })?;
        fonts.insert(name, font);
        Ok(())
    }

    /// Number of registered fonts; 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl SymbolFontProvider for InMemorySymbolFontProvider {
    fn load(&self, name: &str) -> Result<Arc<dyn SymbolFont>, SymbolFontError> {
        let fonts = self
            .fonts
            .read()
            .map_err(|_| SymbolFontError::LoadFailed {
                name: name.to_string(),
                message: "symbol font store lock poisoned".to_string(),
            })?;
        fonts
            .get(name)
            .cloned()
            .ok_or_else(|| SymbolFontError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.fonts
            .read()
            .map(|f| f.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemorySymbolFontProvider"
    }
}
