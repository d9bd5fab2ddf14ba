//! Calculator tool for arithmetic expression evaluation.

use std::iter::Peekable;
use std::str::Chars;

use tracing::debug;

use crate::error::ToolError;

/// Reply for anything that is not a well-formed arithmetic expression.
pub const INVALID_EXPRESSION: &str = "Error: Invalid mathematical expression.";

/// Calculator that evaluates arithmetic expressions.
///
/// Input is first lexed against a closed grammar: decimal numbers,
/// `+ - * / % ^`, `**` (same as `^`) and parentheses. Identifiers,
/// function names and any other character are rejected before anything
/// is evaluated. The normalized token stream is then handed to `meval`.
///
/// # Examples
///
/// ```text
/// 5*2+10        -> 20
/// (1 + 2) ** 3  -> 27
/// 7 / 2         -> 3.5
/// 1 / 0         -> Infinity
/// sqrt(16)      -> Error: Invalid mathematical expression.
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator tool.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `expression` and render the result as text.
    ///
    /// Never fails: rejected or malformed input yields [`INVALID_EXPRESSION`].
    pub fn evaluate(&self, expression: &str) -> String {
        match self.try_evaluate(expression) {
            Ok(value) => format_number(value),
            Err(e) => {
                debug!("Rejected expression {:?}: {}", expression, e);
                INVALID_EXPRESSION.to_string()
            }
        }
    }

    /// Evaluate `expression` to a number.
    pub fn try_evaluate(&self, expression: &str) -> Result<f64, ToolError> {
        let normalized = normalize(expression)?;
        debug!("Evaluating expression: {}", normalized);

        meval::eval_str(&normalized).map_err(|e| {
            ToolError::EvalError(format!("Failed to evaluate '{}': {}", expression, e))
        })
    }
}

/// Lex `expression` against the arithmetic grammar and rebuild it as a
/// space-separated token string.
fn normalize(expression: &str) -> Result<String, ToolError> {
    let mut tokens: Vec<String> = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => tokens.push(lex_number(&mut chars)?),
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push("^".to_string());
                } else {
                    tokens.push("*".to_string());
                }
            }
            '+' | '-' | '/' | '%' | '^' | '(' | ')' => {
                chars.next();
                tokens.push(c.to_string());
            }
            other => {
                return Err(ToolError::EvalError(format!(
                    "unexpected character '{}'",
                    other
                )));
            }
        }
    }

    if tokens.is_empty() {
        return Err(ToolError::EvalError("empty expression".to_string()));
    }

    Ok(tokens.join(" "))
}

/// Read one decimal literal (`12`, `3.5`, `.5`, `1e3`, `2.5E-4`).
///
/// The literal is parsed here and re-emitted in plain positional form so
/// the evaluator only ever sees digits and at most one decimal point.
/// An overflowing literal is emitted as `(1/0)`.
fn lex_number(chars: &mut Peekable<Chars<'_>>) -> Result<String, ToolError> {
    let mut literal = String::new();
    let mut seen_dot = false;

    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' => literal.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                literal.push(c);
            }
            _ => break,
        }
        chars.next();
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        let mut lookahead = chars.clone();
        lookahead.next();
        let mut exponent = String::from("e");
        if let Some(&sign) = lookahead.peek().filter(|s| **s == '+' || **s == '-') {
            exponent.push(sign);
            lookahead.next();
        }
        let mut has_digits = false;
        while let Some(&d) = lookahead.peek().filter(|d| d.is_ascii_digit()) {
            exponent.push(d);
            lookahead.next();
            has_digits = true;
        }
        if has_digits {
            literal.push_str(&exponent);
            *chars = lookahead;
        }
    }

    let value: f64 = literal
        .parse()
        .map_err(|_| ToolError::EvalError(format!("invalid number '{}'", literal)))?;

    // Literals past f64 range overflow to infinity, which has no digit form.
    if value.is_infinite() {
        return Ok("(1/0)".to_string());
    }

    Ok(format!("{}", value))
}

/// Render a result the way a JavaScript-style calculator would: integers
/// without a decimal point, non-finite values spelled out.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let spelled = if value > 0.0 { "Infinity" } else { "-Infinity" };
        spelled.to_string()
    } else if value == 0.0 {
        // Covers -0 as well.
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        let calc = Calculator::new();

        assert_eq!(calc.evaluate("2 + 2"), "4");
        assert_eq!(calc.evaluate("10 - 3"), "7");
        assert_eq!(calc.evaluate("4 * 5"), "20");
        assert_eq!(calc.evaluate("15 / 3"), "5");
        assert_eq!(calc.evaluate("7 / 2"), "3.5");
    }

    #[test]
    fn test_order_of_operations() {
        let calc = Calculator::new();

        assert_eq!(calc.evaluate("5*2+10"), "20");
        assert_eq!(calc.evaluate("2 + 3 * 4"), "14");
        assert_eq!(calc.evaluate("(2 + 3) * 4"), "20");
        assert_eq!(calc.evaluate("-(4 - 10)"), "6");
    }

    #[test]
    fn test_exponent_and_remainder() {
        let calc = Calculator::new();

        assert_eq!(calc.evaluate("2^10"), "1024");
        assert_eq!(calc.evaluate("2 ** 3"), "8");
        assert_eq!(calc.evaluate("10 % 4"), "2");
    }

    #[test]
    fn test_number_forms() {
        let calc = Calculator::new();

        assert_eq!(calc.evaluate(".5 + .5"), "1");
        assert_eq!(calc.evaluate("1e3 + 1"), "1001");
        assert_eq!(calc.evaluate("2.5E-1 * 4"), "1");
        assert_eq!(calc.evaluate("0.1 + 0.2"), "0.30000000000000004");
    }

    #[test]
    fn test_non_finite_results() {
        let calc = Calculator::new();

        assert_eq!(calc.evaluate("1 / 0"), "Infinity");
        assert_eq!(calc.evaluate("-1 / 0"), "-Infinity");
        assert_eq!(calc.evaluate("0 / 0"), "NaN");
    }

    #[test]
    fn test_overflowing_literal_is_infinite() {
        let calc = Calculator::new();

        assert_eq!(normalize("1e400").unwrap(), "(1/0)");
        assert_eq!(calc.evaluate("1e400"), "Infinity");
        assert_eq!(calc.evaluate("-1e400"), "-Infinity");
        assert_eq!(calc.evaluate("1e400 - 1e400"), "NaN");
        assert_eq!(calc.evaluate("1 / 1e400"), "0");
    }

    #[test]
    fn test_rejects_non_arithmetic() {
        let calc = Calculator::new();

        for input in [
            "",
            "   ",
            "2 +",
            "sqrt(16)",
            "pi",
            "e",
            "process.exit()",
            "require('fs')",
            "1, 2",
            "2 = 2",
            "1.2.3",
            "5!",
        ] {
            assert_eq!(calc.evaluate(input), INVALID_EXPRESSION, "input: {:?}", input);
        }
    }

    #[test]
    fn test_try_evaluate_error_kind() {
        let calc = Calculator::new();
        assert!(matches!(
            calc.try_evaluate("abs(-5)"),
            Err(ToolError::EvalError(_))
        ));
        assert_eq!(calc.try_evaluate("3 * 3").unwrap(), 9.0);
    }

    #[test]
    fn test_normalize_tokens() {
        assert_eq!(normalize("2**3").unwrap(), "2 ^ 3");
        assert_eq!(normalize(" (1.50+2) ").unwrap(), "( 1.5 + 2 )");
        assert_eq!(normalize("1e2").unwrap(), "100");
    }

    #[test]
    fn test_exponent_marker_without_digits_is_rejected() {
        // "2e" leaves a bare identifier behind.
        assert!(normalize("2e").is_err());
        assert!(normalize("2e+").is_err());
    }
}
