//! Formula parser
//!
//! A recursive descent parser over the lexed token sequence. Precedence
//! from lowest to highest: additive (`+` `-`), multiplicative/range
//! (`*` `/` `:`), unary (`+` `-`), call/primary.
//!
//! Binary operators in this grammar are right-associative: each binary
//! production hands its right-hand side back to the *top-level*
//! expression rule rather than looping on its own level. That makes
//! `1-2-3` parse as `1-(2-3)` and `2*3+4` as `2*(3+4)`. This is a
//! deliberate compatibility property of the grammar, locked by tests;
//! do not "fix" it to conventional left associativity.

use crate::ast::{BinaryOp, Expr, Program, UnaryOp};
use crate::error::{FormulaError, FormulaResult};
use crate::lexer::{lex, Token, TokenKind};
use gridcalc_core::address::is_cell_address;

/// Lex and parse cell text into a compiled program.
///
/// # Example
/// ```rust
/// use gridcalc_formula::compile;
///
/// let program = compile("=SUM(A1:A10)").unwrap();
/// let literal = compile("plain text").unwrap();
/// ```
pub fn compile(source: &str) -> FormulaResult<Program> {
    parse(lex(source)?)
}

/// Parse a token sequence into a compiled program.
///
/// One root expression is parsed; anything after it (including the Eof
/// token) is left unconsumed.
pub fn parse(tokens: Vec<Token>) -> FormulaResult<Program> {
    let mut parser = Parser::new(tokens);
    Ok(Program {
        body: parser.parse_expression()?,
    })
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn consume(&mut self, expected: TokenKind) -> FormulaResult<Token> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(token.clone())
            }
            Some(token) => Err(FormulaError::UnexpectedToken {
                expected,
                actual: token.kind,
            }),
            None => Err(FormulaError::UnexpectedToken {
                expected,
                actual: TokenKind::Eof,
            }),
        }
    }

    fn parse_expression(&mut self) -> FormulaResult<Expr> {
        self.parse_term()
    }

    /// Additive level. The right-hand side re-enters the full
    /// expression grammar, which is what makes `+` and `-`
    /// right-associative.
    fn parse_term(&mut self) -> FormulaResult<Expr> {
        let node = self.parse_factor()?;

        let op = match self.peek() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Subtract,
            _ => return Ok(node),
        };

        self.pos += 1;
        Ok(Expr::Binary {
            op,
            left: Box::new(node),
            right: Box::new(self.parse_expression()?),
        })
    }

    /// Multiplicative/range level. `*` and `/` also re-enter the full
    /// expression grammar on the right; `:` builds a range whose both
    /// ends must be cell references.
    fn parse_factor(&mut self) -> FormulaResult<Expr> {
        let node = self.parse_unary()?;

        match self.peek() {
            TokenKind::Multiply | TokenKind::Divide => {
                let op = if self.peek() == TokenKind::Multiply {
                    BinaryOp::Multiply
                } else {
                    BinaryOp::Divide
                };
                self.pos += 1;
                Ok(Expr::Binary {
                    op,
                    left: Box::new(node),
                    right: Box::new(self.parse_expression()?),
                })
            }
            TokenKind::Colon => {
                self.pos += 1;
                let Expr::Cell(start) = node else {
                    return Err(FormulaError::RangeEndpoint(node.kind_name()));
                };
                let right = self.parse_unary()?;
                let Expr::Cell(end) = right else {
                    return Err(FormulaError::RangeEndpoint(right.kind_name()));
                };
                Ok(Expr::Range { start, end })
            }
            _ => Ok(node),
        }
    }

    fn parse_unary(&mut self) -> FormulaResult<Expr> {
        let op = match self.peek() {
            TokenKind::Minus => UnaryOp::Negate,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_call(),
        };

        self.pos += 1;
        Ok(Expr::Unary {
            op,
            operand: Box::new(self.parse_call()?),
        })
    }

    /// Call level. This is where the lexer's identifier tokens are
    /// resolved: an identifier followed by `(` is a function call, any
    /// other identifier must have the shape of a cell address.
    fn parse_call(&mut self) -> FormulaResult<Expr> {
        if self.peek() != TokenKind::Identifier {
            return self.parse_primary();
        }

        let token = self.consume(TokenKind::Identifier)?;
        let name = token.literal.unwrap_or_default();

        if self.peek() == TokenKind::LeftParen {
            self.consume(TokenKind::LeftParen)?;
            let mut args = vec![self.parse_expression()?];
            while self.peek() == TokenKind::Comma {
                self.consume(TokenKind::Comma)?;
                args.push(self.parse_expression()?);
            }
            self.consume(TokenKind::RightParen)?;
            return Ok(Expr::Call { name, args });
        }

        if is_cell_address(&name) {
            return Ok(Expr::Cell(name));
        }
        Err(FormulaError::InvalidCellReference(name))
    }

    fn parse_primary(&mut self) -> FormulaResult<Expr> {
        match self.peek() {
            TokenKind::Number => {
                let token = self.consume(TokenKind::Number)?;
                let literal = token.literal.unwrap_or_default();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| FormulaError::MalformedNumber(literal.clone()))?;
                Ok(Expr::Number(value))
            }
            TokenKind::String => {
                let token = self.consume(TokenKind::String)?;
                Ok(Expr::Text(token.literal.unwrap_or_default()))
            }
            TokenKind::LeftParen => {
                self.consume(TokenKind::LeftParen)?;
                let inner = self.parse_expression()?;
                self.consume(TokenKind::RightParen)?;
                Ok(Expr::Group(Box::new(inner)))
            }
            other => Err(FormulaError::UnexpectedPrimary(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(compile("=42").unwrap().body, Expr::Number(42.0));
        assert_eq!(compile("=3.14").unwrap().body, Expr::Number(3.14));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(
            compile("=\"Hello\"").unwrap().body,
            Expr::Text("Hello".into())
        );
    }

    #[test]
    fn test_non_formula_is_string_literal() {
        assert_eq!(compile("apples").unwrap().body, Expr::Text("apples".into()));
        assert_eq!(compile("").unwrap().body, Expr::Text("".into()));
    }

    #[test]
    fn test_precedence_multiplicative_binds_tighter_on_left() {
        // 2+3*4 => 2+(3*4)
        assert_eq!(
            compile("=2+3*4").unwrap().body,
            binary(
                BinaryOp::Add,
                Expr::Number(2.0),
                binary(BinaryOp::Multiply, Expr::Number(3.0), Expr::Number(4.0)),
            )
        );
    }

    #[test]
    fn test_right_associative_subtraction() {
        // 1-2-3 => 1-(2-3), deliberately not (1-2)-3
        assert_eq!(
            compile("=1-2-3").unwrap().body,
            binary(
                BinaryOp::Subtract,
                Expr::Number(1.0),
                binary(BinaryOp::Subtract, Expr::Number(2.0), Expr::Number(3.0)),
            )
        );
    }

    #[test]
    fn test_right_hand_side_reenters_expression_grammar() {
        // 2*3+4 => 2*(3+4): the multiplicative right-hand side is a
        // full expression in this grammar.
        assert_eq!(
            compile("=2*3+4").unwrap().body,
            binary(
                BinaryOp::Multiply,
                Expr::Number(2.0),
                binary(BinaryOp::Add, Expr::Number(3.0), Expr::Number(4.0)),
            )
        );
    }

    #[test]
    fn test_parse_unary() {
        assert_eq!(
            compile("=-5").unwrap().body,
            Expr::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(Expr::Number(5.0)),
            }
        );
        assert_eq!(
            compile("=+A1").unwrap().body,
            Expr::Unary {
                op: UnaryOp::Plus,
                operand: Box::new(Expr::Cell("A1".into())),
            }
        );
    }

    #[test]
    fn test_parse_cell_reference() {
        assert_eq!(compile("=B3").unwrap().body, Expr::Cell("B3".into()));
    }

    #[test]
    fn test_identifier_must_be_cell_shaped() {
        assert!(matches!(
            compile("=SUM"),
            Err(FormulaError::InvalidCellReference(name)) if name == "SUM"
        ));
        // Digits then letters is one identifier of the wrong shape.
        assert!(matches!(
            compile("=A1B"),
            Err(FormulaError::InvalidCellReference(name)) if name == "A1B"
        ));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            compile("=A1:A3").unwrap().body,
            Expr::Range {
                start: "A1".into(),
                end: "A3".into(),
            }
        );
    }

    #[test]
    fn test_range_requires_cell_endpoints() {
        assert!(matches!(
            compile("=1:A3"),
            Err(FormulaError::RangeEndpoint("number literal"))
        ));
        assert!(matches!(
            compile("=A1:3"),
            Err(FormulaError::RangeEndpoint("number literal"))
        ));
    }

    #[test]
    fn test_parse_function_call() {
        let body = compile("=SUM(A1:A3, 4)").unwrap().body;
        let Expr::Call { name, args } = body else {
            panic!("expected a call, got {body:?}");
        };
        assert_eq!(name, "SUM");
        assert_eq!(args.len(), 2);
        assert!(matches!(args[0], Expr::Range { .. }));
        assert_eq!(args[1], Expr::Number(4.0));
    }

    #[test]
    fn test_call_requires_an_argument() {
        assert!(compile("=SUM()").is_err());
    }

    #[test]
    fn test_call_requires_closing_paren() {
        assert!(matches!(
            compile("=SUM(A1"),
            Err(FormulaError::UnexpectedToken {
                expected: TokenKind::RightParen,
                actual: TokenKind::Eof,
            })
        ));
    }

    #[test]
    fn test_parse_group() {
        assert_eq!(
            compile("=(1+2)").unwrap().body,
            Expr::Group(Box::new(binary(
                BinaryOp::Add,
                Expr::Number(1.0),
                Expr::Number(2.0),
            )))
        );
    }

    #[test]
    fn test_unexpected_primary() {
        assert!(matches!(
            compile("=,"),
            Err(FormulaError::UnexpectedPrimary(TokenKind::Comma))
        ));
        assert!(matches!(
            compile("="),
            Err(FormulaError::UnexpectedPrimary(TokenKind::Eof))
        ));
    }
}
