mod error;
mod interpreter;
mod value;

pub use error::RuntimeError;
pub use interpreter::{evaluate, Interpreter};
pub use value::Value;
