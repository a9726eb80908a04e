//! Text built-ins: LEN, CONCATENATE.

use super::{FunctionDef, FunctionRegistry};
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register(FunctionDef {
        name: "LEN",
        unary: true,
        implementation: len,
    });
    registry.register(FunctionDef {
        name: "CONCATENATE",
        unary: false,
        implementation: concatenate,
    });
}

fn require_text(value: &Value) -> FormulaResult<&str> {
    value.as_text().ok_or_else(|| FormulaError::TypeMismatch {
        expected: "string",
        actual: value.to_string(),
    })
}

fn len(first: &Value, _rest: &[Value]) -> FormulaResult<Value> {
    let text = require_text(first)?;
    Ok(Value::Number(text.chars().count() as f64))
}

fn concatenate(first: &Value, rest: &[Value]) -> FormulaResult<Value> {
    let mut out = require_text(first)?.to_string();
    for value in rest {
        out.push_str(require_text(value)?);
    }
    Ok(Value::Text(out))
}
