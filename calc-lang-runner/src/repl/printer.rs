use std::io::{Stderr, Stdout, Write};

use calc_lang_interpreter::value::RuntimeValue;
use calc_lang_interpreter::Error;

/// Values go to `out`, errors to the diagnostic stream `err`.
pub struct Printer<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Printer<Stdout, Stderr> {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
            err: std::io::stderr(),
        }
    }
}

impl<O: Write, E: Write> Printer<O, E> {
    pub fn print(&mut self, object: Result<RuntimeValue, Error>) {
        let written = match object {
            Ok(value) => writeln!(self.out, "{}", value),
            Err(err) => writeln!(self.err, "Error: {}", err),
        };
        if let Err(err) = written {
            tracing::warn!(error = %err, "could not write result");
        }
    }
}
