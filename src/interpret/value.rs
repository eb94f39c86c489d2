use derive_more::Display;

use crate::token::Literal;

#[derive(Display, Debug, Clone, PartialEq)]
pub enum Value {
    #[display(fmt = "nil")]
    Nil,

    #[display(fmt = "{}", "format_number(*_0)")]
    Number(f64),

    #[display(fmt = "{}", _0)]
    Str(String),

    #[display(fmt = "{}", _0)]
    Bool(bool),
}

impl Value {
    /// Only `nil` and `false` are falsy; `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn get_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }
}

/// Integral values print without a fraction (`3`). Magnitudes from `1e16`
/// up or below `1e-4` switch to exponent form with a signed, two-digit
/// minimum exponent (`1e+21`, `1.5e-07`).
fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-7"
    let sci = format!("{:e}", v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return v.to_string();
    };

    if v == 0.0 || (-4..16).contains(&exp) {
        return v.to_string();
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.abs())
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(v) => Value::Number(v),
            Literal::Str(s) => Value::Str(s),
        }
    }
}
