pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod interpret;
pub mod parse;
pub mod token;

use log::debug;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::Error;
pub use interpret::{evaluate, Interpreter, RuntimeError, Value};
pub use parse::{parse, scan};

/// First line printed by the interactive prompt.
pub fn repl_banner() -> String {
    format!("lox-expr, version {}.", env!("CARGO_PKG_VERSION"))
}

/// Runs one piece of source text through scanning, parsing and evaluation.
/// Nothing is evaluated when scanning or parsing reported anything.
pub fn run(input: &str, itp: &mut Interpreter) -> Result<Value, Error> {
    let mut diagnostics = Diagnostics::new();

    let items = parse::scan(input, &mut diagnostics);
    for li in &items {
        debug!("{} - {:?}: {:?}", li.line, li.token, li.lexeme);
    }

    match parse::parse(&items, &mut diagnostics) {
        Some(expr) if !diagnostics.had_error() => {
            debug!("{}", expr);
            itp.interpret(&expr)
        }
        _ => Err(Error::Static(diagnostics)),
    }
}
