use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use log::trace;

use super::error::RuntimeError;
use super::value::Value;
use crate::ast::*;
use crate::error::Error;
use crate::token::{LexItem, Token};

/// Evaluates a tree to a single value, stopping at the first runtime error.
pub fn evaluate(expr: &Expression) -> Result<Value, RuntimeError> {
    match expr {
        Expression::Literal(value) => Ok(value.clone()),
        Expression::Group(expr) => evaluate(expr),
        Expression::UnaryOp(node) => interpret_unary_op(node),
        Expression::BinaryOp(node) => interpret_binary_op(node),
    }
}

fn interpret_unary_op(UnaryOpNode { op, operand }: &UnaryOpNode) -> Result<Value, RuntimeError> {
    let res = evaluate(operand)?;
    match op.token {
        Token::Bang => Ok(Value::Bool(!res.is_truthy())),
        Token::Minus => match res.get_number() {
            Some(v) => Ok(Value::Number(-v)),
            None => Err(RuntimeError::OperandMustBeNumber(op.clone())),
        },
        _ => unreachable!("parser produced unary operator {}", op.token),
    }
}

fn interpret_binary_op(
    BinaryOpNode { lhs, op, rhs }: &BinaryOpNode,
) -> Result<Value, RuntimeError> {
    let lhs_val = evaluate(lhs)?;
    let rhs_val = evaluate(rhs)?;
    trace!(
        "{} {} {}",
        lhs_val.type_name(),
        op.lexeme,
        rhs_val.type_name()
    );

    match op.token {
        Token::Plus => interpret_add(lhs_val, op, rhs_val),
        Token::EqualEqual => Ok(Value::Bool(lhs_val == rhs_val)),
        Token::BangEqual => Ok(Value::Bool(lhs_val != rhs_val)),
        Token::Greater
        | Token::GreaterEqual
        | Token::Less
        | Token::LessEqual
        | Token::Minus
        | Token::Slash
        | Token::Star => binary_number(&lhs_val, op, &rhs_val),
        _ => unreachable!("parser produced binary operator {}", op.token),
    }
}

fn interpret_add(lhs: Value, op: &LexItem, rhs: Value) -> Result<Value, RuntimeError> {
    match (lhs, rhs) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::Str(l), Value::Str(r)) => Ok(Value::Str(l + &r)),
        _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings(op.clone())),
    }
}

fn binary_number(lhs: &Value, op: &LexItem, rhs: &Value) -> Result<Value, RuntimeError> {
    let (Some(l), Some(r)) = (lhs.get_number(), rhs.get_number()) else {
        return Err(RuntimeError::OperandsMustBeNumbers(op.clone()));
    };

    let v = match op.token {
        Token::Greater => Value::Bool(l > r),
        Token::GreaterEqual => Value::Bool(l >= r),
        Token::Less => Value::Bool(l < r),
        Token::LessEqual => Value::Bool(l <= r),
        Token::Minus => Value::Number(l - r),
        Token::Slash => Value::Number(l / r),
        Token::Star => Value::Number(l * r),
        _ => unreachable!("{} is not a numeric operator", op.token),
    };
    Ok(v)
}

/// Evaluates trees and prints each result to its writer.
pub struct Interpreter {
    print_writer: Rc<RefCell<dyn Write>>,
}

impl Interpreter {
    pub fn new(print_writer: Rc<RefCell<dyn Write>>) -> Self {
        Self { print_writer }
    }

    pub fn interpret(&mut self, expr: &Expression) -> Result<Value, Error> {
        let value = evaluate(expr)?;
        let mut print_writer = self.print_writer.borrow_mut();
        writeln!(print_writer, "{}", value)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostics;
    use crate::parse::{parse, scan};

    fn eval(input: &str) -> Result<Value, RuntimeError> {
        let mut diagnostics = Diagnostics::new();
        let items = scan(input, &mut diagnostics);
        let expr = parse(&items, &mut diagnostics);
        assert!(!diagnostics.had_error(), "{:?}", diagnostics);
        evaluate(&expr.unwrap())
    }

    fn eval_ok(input: &str) -> Value {
        eval(input).unwrap_or_else(|e| panic!("{input}: {e}"))
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_ok("1 + 2"), Value::Number(3.0));
        assert_eq!(eval_ok("1 + 2").to_string(), "3");
        assert_eq!(eval_ok("(1 + 2) * 3 - 4 / 8"), Value::Number(8.5));
        assert_eq!(eval_ok("-(3)"), Value::Number(-3.0));
    }

    #[test]
    fn division_by_zero_is_ieee() {
        assert_eq!(eval_ok("1 / 0"), Value::Number(f64::INFINITY));
        assert!(matches!(eval_ok("0 / 0"), Value::Number(v) if v.is_nan()));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(eval_ok("\"a\" + \"b\""), Value::Str("ab".to_string()));
    }

    #[test]
    fn mixed_add_fails_on_plus_token() {
        let err = eval("1 +\n \"b\"").unwrap_err();
        assert_eq!(err.to_string(), "Operands must be two numbers or two strings.");
        assert_eq!(err.token().token, Token::Plus);
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn negating_non_number_fails() {
        let err = eval("-true").unwrap_err();
        assert_eq!(err.to_string(), "Operand must be a number.");
        assert_eq!(err.token().token, Token::Minus);
    }

    #[test]
    fn comparison_requires_numbers() {
        assert_eq!(eval_ok("1 < 2"), Value::Bool(true));
        assert_eq!(eval_ok("2 <= 2"), Value::Bool(true));
        assert_eq!(eval_ok("1 > 2"), Value::Bool(false));
        assert_eq!(eval_ok("3 >= 4"), Value::Bool(false));
        let err = eval("\"a\" < \"b\"").unwrap_err();
        assert_eq!(err.to_string(), "Operands must be numbers.");
        assert_eq!(eval("nil * 2").unwrap_err().to_string(), "Operands must be numbers.");
    }

    #[test]
    fn truthiness() {
        assert_eq!(eval_ok("!nil"), Value::Bool(true));
        assert_eq!(eval_ok("!0"), Value::Bool(false));
        assert_eq!(eval_ok("!\"\""), Value::Bool(false));
        assert_eq!(eval_ok("!!false"), Value::Bool(false));
    }

    #[test]
    fn equality() {
        assert_eq!(eval_ok("1 == 1"), Value::Bool(true));
        assert_eq!(eval_ok("1 == \"1\""), Value::Bool(false));
        assert_eq!(eval_ok("nil == false"), Value::Bool(false));
        assert_eq!(eval_ok("nil == nil"), Value::Bool(true));
        assert_eq!(eval_ok("\"a\" != \"b\""), Value::Bool(true));
        assert_eq!(eval_ok("true != true"), Value::Bool(false));
    }

    #[test]
    fn first_error_wins() {
        let err = eval("-nil + (1 < true)").unwrap_err();
        assert_eq!(err.to_string(), "Operand must be a number.");
    }

    #[test]
    fn interpret_prints_display_form() {
        let out = Rc::new(RefCell::new(Vec::<u8>::new()));
        let mut itp = Interpreter::new(out.clone());

        let mut diagnostics = Diagnostics::new();
        let items = scan("2 * 3", &mut diagnostics);
        let expr = parse(&items, &mut diagnostics).unwrap();

        assert_eq!(itp.interpret(&expr).unwrap(), Value::Number(6.0));
        assert_eq!(String::from_utf8(out.borrow().clone()).unwrap(), "6\n");
    }
}
