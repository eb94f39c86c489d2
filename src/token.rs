use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Token {
    LRoundParen,
    RRoundParen,
    LPointParen,
    RPointParen,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Identifier,
    String,
    Number,

    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl Token {
    pub const ALL: [Token; 39] = [
        Token::LRoundParen,
        Token::RRoundParen,
        Token::LPointParen,
        Token::RPointParen,
        Token::Comma,
        Token::Dot,
        Token::Minus,
        Token::Plus,
        Token::Semicolon,
        Token::Slash,
        Token::Star,
        Token::Bang,
        Token::BangEqual,
        Token::Equal,
        Token::EqualEqual,
        Token::Greater,
        Token::GreaterEqual,
        Token::Less,
        Token::LessEqual,
        Token::Identifier,
        Token::String,
        Token::Number,
        Token::And,
        Token::Class,
        Token::Else,
        Token::False,
        Token::Fun,
        Token::For,
        Token::If,
        Token::Nil,
        Token::Or,
        Token::Print,
        Token::Return,
        Token::Super,
        Token::This,
        Token::True,
        Token::Var,
        Token::While,
        Token::Eof,
    ];

    /// The exact source text of a token kind, or `None` for kinds whose
    /// lexeme varies (identifiers, literals) and for `Eof`.
    pub fn fixed_text(self) -> Option<&'static str> {
        use Token::*;
        let text = match self {
            LRoundParen => "(",
            RRoundParen => ")",
            LPointParen => "{",
            RPointParen => "}",
            Comma => ",",
            Dot => ".",
            Minus => "-",
            Plus => "+",
            Semicolon => ";",
            Slash => "/",
            Star => "*",
            Bang => "!",
            BangEqual => "!=",
            Equal => "=",
            EqualEqual => "==",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
            And => "and",
            Class => "class",
            Else => "else",
            False => "false",
            Fun => "fun",
            For => "for",
            If => "if",
            Nil => "nil",
            Or => "or",
            Print => "print",
            Return => "return",
            Super => "super",
            This => "this",
            True => "true",
            Var => "var",
            While => "while",
            Identifier | String | Number | Eof => return None,
        };
        Some(text)
    }

    pub fn is_keyword(self) -> bool {
        use Token::*;
        matches!(
            self,
            And | Class
                | Else
                | False
                | Fun
                | For
                | If
                | Nil
                | Or
                | Print
                | Return
                | Super
                | This
                | True
                | Var
                | While
        )
    }
}

/// Whether `left` written directly before `right` would scan as something
/// other than those two tokens.
pub fn requires_separator(left: Token, right: Token) -> bool {
    let word = |t: Token| t.is_keyword() || t == Token::Identifier;
    let starts_with_equal = matches!(right, Token::Equal | Token::EqualEqual);

    (word(left) && word(right))
        || (matches!(
            left,
            Token::Bang | Token::Equal | Token::Less | Token::Greater
        ) && starts_with_equal)
        || (left == Token::Slash && right == Token::Slash)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexItem {
    pub token: Token,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl LexItem {
    pub fn new(token: Token, lexeme: impl Into<String>, line: usize) -> Self {
        LexItem {
            token,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }
}
