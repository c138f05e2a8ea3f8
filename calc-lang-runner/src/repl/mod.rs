mod evaluator;
mod printer;
mod reader;

use std::io::{Stderr, Stdout};

use calc_lang_interpreter::environment::Environment;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use evaluator::Evaluator;
use printer::Printer;
use reader::{ReadOutput, Reader};

struct Repl {
    reader: Reader,
    evaluator: Evaluator,
    printer: Printer<Stdout, Stderr>,
}

impl Repl {
    fn run(mut self) {
        loop {
            let input = self.reader.read();
            match input {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Error(error) => self.printer.print(Err(error)),
                ReadOutput::Value(program) => {
                    let result = self.evaluator.evaluate(program);
                    self.printer.print(result)
                }
            }
        }
    }
}

pub fn start(environment: Environment) -> Result<(), ReadlineError> {
    let rl = DefaultEditor::new()?;

    println!("\nRepl v0.1");
    Repl {
        reader: Reader::new(rl),
        evaluator: Evaluator::new(environment),
        printer: Printer::new(),
    }
    .run();
    Ok(())
}
