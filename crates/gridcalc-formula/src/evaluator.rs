//! Formula evaluator
//!
//! A tree-walking interpreter that reduces a compiled program to a
//! single scalar. Cell references are resolved through the read-only
//! [`CellResolver`] capability; the evaluator itself never mutates
//! cell state and holds nothing between calls.

use crate::ast::{BinaryOp, Expr, Program, UnaryOp};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::registry;
use gridcalc_core::range::expand_range;
use gridcalc_core::Value;

/// Read-only view of the cell collection, as the evaluator sees it.
pub trait CellResolver {
    /// Whether a cell with this address exists at all.
    fn contains(&self, address: &str) -> bool;

    /// The compiled program cached on the cell, if the cell has been
    /// evaluated before.
    fn program(&self, address: &str) -> Option<&Program>;
}

/// Evaluate a compiled program against a cell collection.
///
/// Referenced cells are substituted by evaluating their *cached*
/// programs; nothing is re-parsed on the fly. Any failure aborts the
/// whole evaluation.
pub fn evaluate(program: &Program, cells: &dyn CellResolver) -> FormulaResult<Value> {
    Evaluator {
        cells,
        visiting: Vec::new(),
    }
    .eval(&program.body)
}

struct Evaluator<'a> {
    cells: &'a dyn CellResolver,
    /// Addresses whose programs are currently being resolved.
    /// Re-entering one means the formulas form a cycle.
    visiting: Vec<String>,
}

impl Evaluator<'_> {
    fn eval(&mut self, expr: &Expr) -> FormulaResult<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Text(s) => Ok(Value::Text(s.clone())),
            Expr::Cell(address) => self.eval_cell(address),
            Expr::Range { .. } => Err(FormulaError::RangeOutsideCall),
            Expr::Unary { op, operand } => {
                let n = number(self.eval(operand)?)?;
                Ok(Value::Number(match op {
                    UnaryOp::Plus => n,
                    UnaryOp::Negate => -n,
                }))
            }
            Expr::Binary { op, left, right } => {
                let left = number(self.eval(left)?)?;
                let right = number(self.eval(right)?)?;
                Ok(Value::Number(match op {
                    BinaryOp::Add => left + right,
                    BinaryOp::Subtract => left - right,
                    BinaryOp::Multiply => left * right,
                    // Plain IEEE division: a zero divisor yields
                    // infinity or NaN, not an error.
                    BinaryOp::Divide => left / right,
                }))
            }
            Expr::Call { name, args } => self.eval_call(name, args),
            Expr::Group(inner) => self.eval(inner),
        }
    }

    fn eval_cell(&mut self, address: &str) -> FormulaResult<Value> {
        if self.visiting.iter().any(|a| a == address) {
            return Err(FormulaError::CircularReference(address.to_string()));
        }
        if !self.cells.contains(address) {
            return Err(FormulaError::UnknownCell(address.to_string()));
        }

        let cells = self.cells;
        let program = cells
            .program(address)
            .ok_or_else(|| FormulaError::UninitializedCell(address.to_string()))?;

        self.visiting.push(address.to_string());
        let result = self.eval(&program.body);
        self.visiting.pop();
        result
    }

    fn eval_call(&mut self, name: &str, args: &[Expr]) -> FormulaResult<Value> {
        let def = registry()
            .get(name)
            .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

        // Arguments left to right; a range argument flattens into its
        // scalars in place, interleaving with the other arguments.
        let mut scalars = Vec::new();
        for arg in args {
            match arg {
                Expr::Range { start, end } => {
                    for address in expand_range(start, end)? {
                        scalars.push(self.eval_cell(&address)?);
                    }
                }
                other => scalars.push(self.eval(other)?),
            }
        }

        let (first, rest) = scalars
            .split_first()
            .ok_or_else(|| FormulaError::MissingArgument(name.to_string()))?;

        if def.unary {
            (def.implementation)(first, &[])
        } else {
            (def.implementation)(first, rest)
        }
    }
}

fn number(value: Value) -> FormulaResult<f64> {
    value.as_number().ok_or_else(|| FormulaError::TypeMismatch {
        expected: "number",
        actual: value.to_string(),
    })
}
