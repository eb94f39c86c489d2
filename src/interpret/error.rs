use thiserror::Error;

use crate::token::LexItem;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Operand must be a number.")]
    OperandMustBeNumber(LexItem),

    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers(LexItem),

    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings(LexItem),
}

impl RuntimeError {
    /// The operator that failed.
    pub fn token(&self) -> &LexItem {
        use RuntimeError::*;
        match self {
            OperandMustBeNumber(li)
            | OperandsMustBeNumbers(li)
            | OperandsMustBeNumbersOrStrings(li) => li,
        }
    }

    pub fn line(&self) -> usize {
        self.token().line
    }
}
