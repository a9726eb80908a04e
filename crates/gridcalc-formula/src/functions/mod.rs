//! Built-in spreadsheet functions
//!
//! Functions live in a global registry keyed by their (case-sensitive,
//! upper-case) name. Every function receives its arguments already
//! flattened to scalars, split into a mandatory first argument and the
//! rest; a unary function is handed an empty rest slice no matter how
//! many arguments were written.

mod math;
mod text;

use crate::error::FormulaResult;
use gridcalc_core::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Signature shared by all built-in functions.
pub type FunctionImpl = fn(&Value, &[Value]) -> FormulaResult<Value>;

/// A registered function.
pub struct FunctionDef {
    pub name: &'static str,
    /// Unary functions only ever see their first argument.
    pub unary: bool,
    pub implementation: FunctionImpl,
}

/// Registry of built-in functions, keyed by name.
pub struct FunctionRegistry {
    functions: HashMap<&'static str, FunctionDef>,
}

impl FunctionRegistry {
    fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };
        math::register(&mut registry);
        text::register(&mut registry);
        registry
    }

    pub(crate) fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name, def);
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Names of all registered functions, unordered.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }
}

static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// The global function registry, built on first use.
pub fn registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}
