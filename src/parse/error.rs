use crate::diagnostic::Diagnostics;
use crate::token::{LexItem, Token};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected character.")]
    UnexpectedCharacter(usize, char),

    #[error("Unterminated string.")]
    UnterminatedString(usize),

    #[error("Unable to parse `{1}` to number.")]
    ParseToNumber(usize, String),

    #[error("Expect expression.")]
    ExpectExpression(LexItem),

    #[error("Expect ')' after expression.")]
    ExpectRightParen(LexItem),
}

impl ParseError {
    pub fn line(&self) -> usize {
        use ParseError::*;
        match self {
            UnexpectedCharacter(line, _) | UnterminatedString(line) | ParseToNumber(line, _) => {
                *line
            }
            ExpectExpression(li) | ExpectRightParen(li) => li.line,
        }
    }

    pub fn location(&self) -> String {
        use ParseError::*;
        match self {
            UnexpectedCharacter(..) | UnterminatedString(_) | ParseToNumber(..) => String::new(),
            ExpectExpression(li) | ExpectRightParen(li) => {
                diagnostic_location(li)
            }
        }
    }

    pub fn report(&self, diagnostics: &mut Diagnostics) {
        diagnostics.report(self.line(), &self.location(), &self.to_string());
    }
}

fn diagnostic_location(li: &LexItem) -> String {
    match li.token {
        Token::Eof => " at end".to_string(),
        _ => format!(" at '{}'", li.lexeme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_depends_on_token() {
        let eof = ParseError::ExpectExpression(LexItem::new(Token::Eof, "", 2));
        assert_eq!(eof.location(), " at end");
        assert_eq!(eof.line(), 2);

        let plus = ParseError::ExpectRightParen(LexItem::new(Token::Plus, "+", 1));
        assert_eq!(plus.location(), " at '+'");

        let lexical = ParseError::UnterminatedString(4);
        assert_eq!(lexical.location(), "");
        assert_eq!(lexical.line(), 4);
    }
}
