//! Numeric built-ins: SUM, AVERAGE, MIN, MAX.

use super::{FunctionDef, FunctionRegistry};
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register(FunctionDef {
        name: "SUM",
        unary: false,
        implementation: sum,
    });
    registry.register(FunctionDef {
        name: "AVERAGE",
        unary: false,
        implementation: average,
    });
    registry.register(FunctionDef {
        name: "MIN",
        unary: false,
        implementation: min,
    });
    registry.register(FunctionDef {
        name: "MAX",
        unary: false,
        implementation: max,
    });
}

fn require_number(value: &Value) -> FormulaResult<f64> {
    value.as_number().ok_or_else(|| FormulaError::TypeMismatch {
        expected: "number",
        actual: value.to_string(),
    })
}

fn total(first: &Value, rest: &[Value]) -> FormulaResult<f64> {
    let mut acc = require_number(first)?;
    for value in rest {
        acc += require_number(value)?;
    }
    Ok(acc)
}

fn sum(first: &Value, rest: &[Value]) -> FormulaResult<Value> {
    Ok(Value::Number(total(first, rest)?))
}

fn average(first: &Value, rest: &[Value]) -> FormulaResult<Value> {
    let count = (rest.len() + 1) as f64;
    Ok(Value::Number(total(first, rest)? / count))
}

fn min(first: &Value, rest: &[Value]) -> FormulaResult<Value> {
    let mut acc = require_number(first)?;
    for value in rest {
        acc = acc.min(require_number(value)?);
    }
    Ok(Value::Number(acc))
}

fn max(first: &Value, rest: &[Value]) -> FormulaResult<Value> {
    let mut acc = require_number(first)?;
    for value in rest {
        acc = acc.max(require_number(value)?);
    }
    Ok(Value::Number(acc))
}
