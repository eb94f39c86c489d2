use std::{cell::RefCell, rc::Rc};

use log::{debug, info};
use lox_expr::{Error, Interpreter};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

const USAGE_EXIT_CODE: i32 = 64;

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        debug!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    debug!("{:?}", args);

    match args.as_slice() {
        [] => repl(),
        [file_path] => read_from_file(file_path),
        _ => {
            eprintln!("Usage: lox-expr [script]");
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn repl() -> DynResult {
    info!("Running in REPL mode");
    println!("{}", lox_expr::repl_banner());

    let mut rl = DefaultEditor::new()?;
    let mut itp = Interpreter::new(Rc::new(RefCell::new(std::io::stdout())));

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                // errors are shown and then forgotten in the REPL
                if let Err(err) = lox_expr::run(line.trim_end(), &mut itp) {
                    report(&err);
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;
    let mut itp = Interpreter::new(Rc::new(RefCell::new(std::io::stdout())));

    if let Err(err) = lox_expr::run(&contents, &mut itp) {
        report(&err);
        std::process::exit(err.exit_code());
    }

    Ok(())
}

fn report(err: &Error) {
    match err {
        Error::Static(diagnostics) => {
            for diagnostic in diagnostics {
                eprintln!("{}", diagnostic);
            }
        }
        Error::Runtime(_) | Error::Write(_) => eprintln!("{}", err),
    }
    debug!("run failed with exit code {}", err.exit_code());
}
