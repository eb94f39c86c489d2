use log::trace;

use crate::diagnostic::Diagnostics;
use crate::token::{LexItem, Literal, Token};

use super::error::ParseError;

static KEYWORDS: phf::Map<&'static str, Token> = phf::phf_map! {
    "and" => Token::And,
    "class" => Token::Class,
    "else" => Token::Else,
    "false" => Token::False,
    "for" => Token::For,
    "fun" => Token::Fun,
    "if" => Token::If,
    "nil" => Token::Nil,
    "or" => Token::Or,
    "print" => Token::Print,
    "return" => Token::Return,
    "super" => Token::Super,
    "this" => Token::This,
    "true" => Token::True,
    "var" => Token::Var,
    "while" => Token::While,
};

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Turns source text into tokens, always ending with exactly one `Eof`.
/// Bad input is reported to `diagnostics` and skipped.
pub fn scan(input: &str, diagnostics: &mut Diagnostics) -> Vec<LexItem> {
    let mut lexer = Lexer::new(input, diagnostics);
    while !lexer.is_at_end() {
        lexer.start = lexer.current;
        lexer.scan_token();
    }
    let Lexer { mut items, line, .. } = lexer;
    items.push(LexItem::new(Token::Eof, "", line));
    trace!("scanned {} tokens", items.len());
    items
}

struct Lexer<'a, 'd> {
    input: &'a str,
    diagnostics: &'d mut Diagnostics,
    items: Vec<LexItem>,
    // byte offsets into `input`
    start: usize,
    current: usize,
    line: usize,
}

impl<'a, 'd> Lexer<'a, 'd> {
    fn new(input: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            input,
            diagnostics,
            items: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };
        match c {
            '(' => self.add_token(Token::LRoundParen),
            ')' => self.add_token(Token::RRoundParen),
            '{' => self.add_token(Token::LPointParen),
            '}' => self.add_token(Token::RPointParen),
            ',' => self.add_token(Token::Comma),
            '.' => self.add_token(Token::Dot),
            '-' => self.add_token(Token::Minus),
            '+' => self.add_token(Token::Plus),
            ';' => self.add_token(Token::Semicolon),
            '*' => self.add_token(Token::Star),
            '!' => self.add_one_or_two(Token::BangEqual, Token::Bang),
            '=' => self.add_one_or_two(Token::EqualEqual, Token::Equal),
            '<' => self.add_one_or_two(Token::LessEqual, Token::Less),
            '>' => self.add_one_or_two(Token::GreaterEqual, Token::Greater),
            '/' => {
                if self.next_if('/') {
                    // the newline is left for the main loop to count
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(Token::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_identifier_start(c) => self.lex_keyword_or_identifier(),
            c => self.error(ParseError::UnexpectedCharacter(self.line, c)),
        }
    }

    fn lex_string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(ParseError::UnterminatedString(self.line));
            return;
        }

        // closing '"'
        self.advance();
        let input = self.input;
        let value = &input[self.start + 1..self.current - 1];
        self.add_literal_token(Token::String, Literal::Str(value.to_string()));
    }

    fn lex_number(&mut self) {
        self.skip_digits();

        let has_fraction = self.peek() == Some('.')
            && self.peek_next().is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.advance();
            self.skip_digits();
        }

        let input = self.input;
        let source = &input[self.start..self.current];
        match source.parse::<f64>() {
            Ok(num) => self.add_literal_token(Token::Number, Literal::Number(num)),
            Err(_) => self.error(ParseError::ParseToNumber(self.line, source.to_string())),
        }
    }

    fn lex_keyword_or_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }

        let input = self.input;
        let text = &input[self.start..self.current];
        let token = KEYWORDS.get(text).copied().unwrap_or(Token::Identifier);
        self.add_token(token);
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn add_one_or_two(&mut self, two: Token, one: Token) {
        let token = if self.next_if('=') { two } else { one };
        self.add_token(token);
    }

    fn add_token(&mut self, token: Token) {
        let lexeme = &self.input[self.start..self.current];
        self.items.push(LexItem::new(token, lexeme, self.line));
    }

    fn add_literal_token(&mut self, token: Token, literal: Literal) {
        let lexeme = &self.input[self.start..self.current];
        self.items
            .push(LexItem::new(token, lexeme, self.line).with_literal(literal));
    }

    fn error(&mut self, err: ParseError) {
        err.report(self.diagnostics);
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn next_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.input[self.current..].chars().nth(1)
    }
}
