//! End-to-end engine tests over a small grocery sheet.

use gridcalc::prelude::*;
use pretty_assertions::assert_eq;

/// Item / price / quantity rows with per-row totals and a grand total.
fn grocery_sheet() -> Spreadsheet {
    Spreadsheet::from_cells(
        [
            ("A1", "Item"),
            ("B1", "Price"),
            ("C1", "Qty"),
            ("D1", "Total"),
            ("A2", "apples"),
            ("B2", "=2"),
            ("C2", "=3"),
            ("D2", "=B2*C2"),
            ("A3", "bread"),
            ("B3", "=1.5"),
            ("C3", "=2"),
            ("D3", "=B3*C3"),
            ("A4", "milk"),
            ("B4", "=3"),
            ("C4", "=1"),
            ("D4", "=B4*C4"),
            ("A5", "eggs"),
            ("B5", "=4"),
            ("C5", "=2"),
            ("D5", "=B5*C5"),
            ("D6", "=SUM(D2:D5)"),
        ]
        .map(|(name, text)| Cell::new(name, text)),
    )
}

#[test]
fn test_values_are_empty_before_any_evaluation() {
    let sheet = grocery_sheet();
    assert_eq!(sheet.value("D2").unwrap(), Value::Text(String::new()));
    assert_eq!(sheet.value("A2").unwrap(), Value::Text(String::new()));
}

#[test]
fn test_recompute_all_fills_every_cell() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();

    assert_eq!(sheet.value("A2").unwrap(), Value::Text("apples".into()));
    assert_eq!(sheet.value("D2").unwrap(), Value::Number(6.0));
    assert_eq!(sheet.value("D3").unwrap(), Value::Number(3.0));
    assert_eq!(sheet.value("D4").unwrap(), Value::Number(3.0));
    assert_eq!(sheet.value("D5").unwrap(), Value::Number(8.0));
    assert_eq!(sheet.value("D6").unwrap(), Value::Number(20.0));
}

#[test]
fn test_recompute_all_reports_enqueued_dependents() {
    let mut sheet = grocery_sheet();
    let enqueued = sheet.recompute_all().unwrap();
    // B2 and C2 enqueue D2; evaluating D2 (still in the main pass)
    // enqueues D6 before D3 gets its turn.
    assert_eq!(enqueued, ["D2", "D6", "D3", "D4", "D5"]);
}

#[test]
fn test_recompute_all_is_idempotent() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();
    let again = sheet.recompute_all().unwrap();
    assert_eq!(again, ["D2", "D6", "D3", "D4", "D5"]);
    assert_eq!(sheet.value("D6").unwrap(), Value::Number(20.0));
}

#[test]
fn test_update_propagates_through_dependents() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();

    // Raise the price of apples: the row total and the grand total
    // both follow from one evaluate call.
    sheet.update("B2", "=5").unwrap();
    sheet.evaluate("B2").unwrap();
    assert_eq!(sheet.value("D2").unwrap(), Value::Number(15.0));
    assert_eq!(sheet.value("D6").unwrap(), Value::Number(29.0));
}

#[test]
fn test_evaluate_returns_the_cells_value() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();
    assert_eq!(sheet.evaluate("D6").unwrap(), Value::Number(20.0));
}

#[test]
fn test_run_is_ephemeral() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();

    assert_eq!(sheet.run("=D6/4").unwrap(), Value::Number(5.0));
    assert_eq!(
        sheet.run("=AVERAGE(B2:B5)").unwrap(),
        Value::Number(2.625)
    );
    // Nothing was stored or invalidated.
    assert_eq!(sheet.value("D6").unwrap(), Value::Number(20.0));
}

#[test]
fn test_text_functions() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();

    assert_eq!(sheet.run("=LEN(A2)").unwrap(), Value::Number(6.0));
    assert_eq!(
        sheet.run("=CONCATENATE(A2, \" & \", A3)").unwrap(),
        Value::Text("apples & bread".into())
    );
}

#[test]
fn test_aggregates_over_ranges() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();

    assert_eq!(sheet.run("=MAX(B2:B5)").unwrap(), Value::Number(4.0));
    assert_eq!(sheet.run("=MIN(B2:B5)").unwrap(), Value::Number(1.5));
}

#[test]
fn test_type_errors_are_fatal() {
    let mut sheet = grocery_sheet();
    sheet.recompute_all().unwrap();

    assert!(matches!(
        sheet.run("=LEN(B2)"),
        Err(EngineError::Formula(FormulaError::TypeMismatch { .. }))
    ));
    assert!(matches!(
        sheet.run("=1+A2"),
        Err(EngineError::Formula(FormulaError::TypeMismatch { .. }))
    ));
}

#[test]
fn test_reference_to_missing_cell() {
    let sheet = grocery_sheet();
    assert!(matches!(
        sheet.run("=Q9"),
        Err(EngineError::Formula(FormulaError::UnknownCell(a))) if a == "Q9"
    ));
}

#[test]
fn test_inputs_and_outputs() {
    let sheet = grocery_sheet();
    assert_eq!(sheet.inputs("D2").unwrap(), ["B2", "C2"]);
    assert_eq!(sheet.inputs("D6").unwrap(), ["D2", "D3", "D4", "D5"]);
    assert_eq!(sheet.inputs("A2").unwrap(), [""; 0]);
    assert_eq!(sheet.outputs("B2"), ["D2"]);
    assert_eq!(sheet.outputs("D2"), ["D6"]);
    assert_eq!(sheet.outputs("D6"), [""; 0]);
}

#[test]
fn test_kinds_follow_raw_text() {
    let sheet = grocery_sheet();
    assert_eq!(sheet.kind("A2").unwrap(), CellKind::Text);
    assert_eq!(sheet.kind("B2").unwrap(), CellKind::Number);
    assert_eq!(sheet.kind("D6").unwrap(), CellKind::Number);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let mut sheet = Spreadsheet::new();
    sheet.add(Cell::new("Z1", "=Z1"));
    assert!(matches!(
        sheet.evaluate("Z1"),
        Err(EngineError::Formula(FormulaError::CircularReference(a))) if a == "Z1"
    ));
}

#[test]
fn test_two_cell_cycle_is_detected() {
    let mut sheet = Spreadsheet::new();
    sheet.add(Cell::new("X1", "=1"));
    sheet.add(Cell::new("Y1", "=X1"));
    sheet.recompute_all().unwrap();

    // Closing the loop after both programs are cached trips the
    // cycle guard rather than recursing forever.
    sheet.update("X1", "=Y1").unwrap();
    assert!(matches!(
        sheet.evaluate("X1"),
        Err(EngineError::Formula(FormulaError::CircularReference(_)))
    ));
}

#[test]
fn test_forward_reference_before_evaluation_is_null() {
    let mut sheet = Spreadsheet::new();
    sheet.add(Cell::new("A1", "=B1"));
    sheet.add(Cell::new("B1", "=1"));
    // B1 exists but has no cached program yet.
    assert!(matches!(
        sheet.evaluate("A1"),
        Err(EngineError::Formula(FormulaError::UninitializedCell(a))) if a == "B1"
    ));
}
