mod context;
mod error;
mod lex;
mod parser;

pub use error::ParseError;
pub use lex::scan;
pub use parser::parse;
