use std::collections::HashMap;
use std::sync::Arc;

/// Evaluation context passed explicitly to symbol fonts.
///
/// Cheap to clone: the variables are shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    vars: Arc<HashMap<String, String>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.vars).insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
