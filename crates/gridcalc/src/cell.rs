//! A single spreadsheet cell.

use gridcalc_core::{CellKind, Value};
use gridcalc_formula::Program;

/// A named cell: raw formula text plus the compiled program and value
/// cached by the last evaluation.
///
/// The caches are cleared whenever the formula text changes, so a
/// stale program is never evaluated against new text.
#[derive(Debug, Clone)]
pub struct Cell {
    name: String,
    formula: String,
    program: Option<Program>,
    value: Option<Value>,
}

impl Cell {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            program: None,
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Replace the formula text, invalidating the cached program and
    /// value.
    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.formula = formula.into();
        self.program = None;
        self.value = None;
    }

    /// Whether the text is a formula (starts with `=`) rather than a
    /// plain literal.
    pub fn is_formula(&self) -> bool {
        self.formula.starts_with('=')
    }

    /// The kind of content, judged from the raw text alone: formulas
    /// produce numbers, everything else is text.
    pub fn kind(&self) -> CellKind {
        if self.is_formula() {
            CellKind::Number
        } else {
            CellKind::Text
        }
    }

    /// Program cached by the last evaluation, if any.
    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    /// Value cached by the last evaluation, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub(crate) fn set_program(&mut self, program: Program) {
        self.program = Some(program);
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }
}
