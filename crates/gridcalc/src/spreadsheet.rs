//! The spreadsheet store: named cells, their dependency graph, and the
//! recomputation queue that keeps downstream cells current.

use crate::cell::Cell;
use crate::error::{EngineError, EngineResult};
use crate::queue::RecomputeQueue;
use ahash::AHashMap;
use gridcalc_core::range::expand_range;
use gridcalc_core::{CellKind, Value};
use gridcalc_formula::evaluator::CellResolver;
use gridcalc_formula::{compile, evaluate, Program};
use lazy_regex::regex;

/// A collection of cells with dependency-tracked recomputation.
///
/// Cells keep their insertion order. The dependency graph is derived
/// from the raw formula text and rebuilt from scratch whenever any
/// cell's text changes; it is never patched in place.
#[derive(Debug, Default)]
pub struct Spreadsheet {
    cells: Vec<Cell>,
    /// Reverse dependency map: address of an input cell to the names
    /// of the cells whose formulas mention it.
    dependents: AHashMap<String, Vec<String>>,
    queue: RecomputeQueue,
}

impl Spreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from an ordered cell list, deriving the
    /// dependency map once at the end.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut sheet = Self {
            cells: cells.into_iter().collect(),
            ..Self::default()
        };
        sheet.rebuild_dependents();
        sheet
    }

    /// Add a cell, replacing nothing: names are not checked for
    /// uniqueness, and lookups always find the first match.
    pub fn add(&mut self, cell: Cell) {
        self.cells.push(cell);
        self.rebuild_dependents();
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.name() == name)
    }

    /// Replace a cell's formula text. The cell's caches are cleared
    /// and the dependency graph rebuilt, but nothing is recomputed
    /// until the next [`Spreadsheet::evaluate`] or
    /// [`Spreadsheet::recompute_all`].
    pub fn update(&mut self, name: &str, formula: impl Into<String>) -> EngineResult<()> {
        let cell = self
            .cells
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| EngineError::UnknownCell(name.to_string()))?;
        cell.set_formula(formula);
        self.rebuild_dependents();
        Ok(())
    }

    /// Evaluate one cell, then drain the recomputation queue so every
    /// downstream cell reflects the new value. Returns the evaluated
    /// cell's value.
    pub fn evaluate(&mut self, name: &str) -> EngineResult<Value> {
        self.rebuild_dependents();
        let value = self.evaluate_cell(name)?;
        self.drain()?;
        Ok(value)
    }

    /// Evaluate every cell in insertion order, then drain the queue.
    ///
    /// Returns the addresses that were enqueued for recomputation
    /// during the initial pass, in queue order.
    pub fn recompute_all(&mut self) -> EngineResult<Vec<String>> {
        self.rebuild_dependents();
        let names: Vec<String> = self.cells.iter().map(|c| c.name().to_string()).collect();
        for name in &names {
            self.evaluate_cell(name)?;
        }
        let enqueued = self.queue.pending();
        self.drain()?;
        Ok(enqueued)
    }

    /// Evaluate formula text against the sheet without storing
    /// anything: no cell is touched and nothing is enqueued.
    pub fn run(&self, source: &str) -> EngineResult<Value> {
        Ok(evaluate(&compile(source)?, self)?)
    }

    /// Names of the cells whose formulas mention this address.
    pub fn outputs(&self, name: &str) -> Vec<String> {
        self.dependents.get(name).cloned().unwrap_or_default()
    }

    /// Addresses this cell's formula mentions, ranges expanded.
    pub fn inputs(&self, name: &str) -> EngineResult<Vec<String>> {
        let cell = self.require(name)?;
        Ok(referenced_addresses(cell.formula()))
    }

    /// The cell's last evaluated value, or empty text if it has never
    /// been evaluated.
    pub fn value(&self, name: &str) -> EngineResult<Value> {
        let cell = self.require(name)?;
        Ok(cell
            .value()
            .cloned()
            .unwrap_or_else(|| Value::Text(String::new())))
    }

    /// The kind of a cell's content, judged from its raw text.
    pub fn kind(&self, name: &str) -> EngineResult<CellKind> {
        Ok(self.require(name)?.kind())
    }

    fn require(&self, name: &str) -> EngineResult<&Cell> {
        self.get(name)
            .ok_or_else(|| EngineError::UnknownCell(name.to_string()))
    }

    /// Compile, cache, and evaluate one cell, then enqueue its
    /// dependents. The program is cached before evaluation so a
    /// self-referencing formula resolves against its own fresh
    /// compile (and is caught as a cycle).
    fn evaluate_cell(&mut self, name: &str) -> EngineResult<Value> {
        let index = self
            .cells
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| EngineError::UnknownCell(name.to_string()))?;

        let program: Program = compile(self.cells[index].formula())?;
        self.cells[index].set_program(program.clone());

        let value = evaluate(&program, self)?;
        self.cells[index].set_value(value.clone());

        if let Some(dependents) = self.dependents.get(name) {
            for dependent in dependents {
                self.queue.enqueue(dependent);
            }
        }
        Ok(value)
    }

    fn drain(&mut self) -> EngineResult<()> {
        while let Some(address) = self.queue.dequeue() {
            self.evaluate_cell(&address)?;
        }
        Ok(())
    }

    /// Rebuild the reverse dependency map from every cell's raw text.
    fn rebuild_dependents(&mut self) {
        let mut dependents: AHashMap<String, Vec<String>> = AHashMap::new();
        for cell in &self.cells {
            for address in referenced_addresses(cell.formula()) {
                let entry = dependents.entry(address).or_default();
                if !entry.iter().any(|n| n == cell.name()) {
                    entry.push(cell.name().to_string());
                }
            }
        }
        self.dependents = dependents;
    }
}

impl CellResolver for Spreadsheet {
    fn contains(&self, address: &str) -> bool {
        self.get(address).is_some()
    }

    fn program(&self, address: &str) -> Option<&Program> {
        self.get(address).and_then(Cell::program)
    }
}

/// Cell addresses mentioned in formula text, in order of appearance
/// with duplicates removed. Ranges expand to their member addresses.
/// Non-formula text (no leading `=`) mentions nothing, whatever it
/// happens to contain.
pub fn referenced_addresses(formula: &str) -> Vec<String> {
    if !formula.starts_with('=') {
        return Vec::new();
    }

    let pattern = regex!(r"([A-Z]+[0-9]+:[A-Z]+[0-9]+)+|([A-Z]+[0-9]+)");
    let mut addresses: Vec<String> = Vec::new();
    let mut push = |address: String| {
        if !addresses.contains(&address) {
            addresses.push(address);
        }
    };

    for found in pattern.find_iter(formula) {
        match found.as_str().split_once(':') {
            Some((start, end)) => {
                if let Ok(expanded) = expand_range(start, end) {
                    for address in expanded {
                        push(address);
                    }
                }
            }
            None => push(found.as_str().to_string()),
        }
    }
    addresses
}
