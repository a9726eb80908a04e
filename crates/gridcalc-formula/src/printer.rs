//! Formula printer
//!
//! Renders a compiled program back to formula text. Output is fully
//! parenthesized: every range, unary, binary, and group node gets its
//! own parentheses regardless of how the source was written, so the
//! printed form is unambiguous even though it rarely matches the
//! original byte for byte.

use crate::ast::{Expr, Program};

/// Render a program as formula text (without the leading `=`).
pub fn print(program: &Program) -> String {
    print_expr(&program.body)
}

fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => format!("{n}"),
        Expr::Text(s) => s.clone(),
        Expr::Cell(address) => address.clone(),
        Expr::Range { start, end } => format!("({start}:{end})"),
        Expr::Unary { op, operand } => format!("({op}{})", print_expr(operand)),
        Expr::Binary { op, left, right } => {
            format!("({} {op} {})", print_expr(left), print_expr(right))
        }
        Expr::Call { name, args } => {
            let args: Vec<String> = args.iter().map(print_expr).collect();
            format!("{name}({})", args.join(", "))
        }
        Expr::Group(inner) => format!("({})", print_expr(inner)),
    }
}
