use calc_lang_core::ast::Program;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Error(calc_lang_interpreter::Error),
    Value(Program),
}

pub struct Reader {
    rl: DefaultEditor,
}

impl Reader {
    pub fn new(rl: DefaultEditor) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        let readline = self.rl.readline(PROMPT);

        let line = match readline {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return ReadOutput::Clear; // Clear line
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return ReadOutput::Exit;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                return ReadOutput::Exit;
            }
            Ok(line) => line,
        };

        if is_exit_request(&line) {
            return ReadOutput::Exit;
        }

        if let Err(err) = self.rl.add_history_entry(&line) {
            tracing::warn!(error = %err, "could not record history entry");
        }

        match calc_lang_core::produce_ast(&line) {
            Ok(program) => {
                tracing::debug!(%program, "read program");
                ReadOutput::Value(program)
            }
            Err(error) => ReadOutput::Error(error.into()),
        }
    }
}

/// An empty line or any line mentioning `exit` ends the session.
fn is_exit_request(line: &str) -> bool {
    line.is_empty() || line.contains("exit")
}
