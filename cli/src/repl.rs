use anyhow::Result;
use bind::{Code, Interp};
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Config;

pub fn run_repl(interp: &mut Interp, config: &Config) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(history) = &config.history {
        // A missing history file is normal on first start.
        let _ = rl.load_history(history);
    }

    println!("tclbind {} (type 'exit' to quit)", env!("CARGO_PKG_VERSION"));
    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if line == "exit" || line == "quit" {
                    break;
                }
                match interp.eval_words(line) {
                    Code::Ok => {
                        let result = interp.result();
                        if !result.as_str().is_empty() {
                            println!("{result}");
                        }
                    }
                    Code::Error => println!("error: {}", interp.result()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(history) = &config.history {
        if let Err(err) = rl.save_history(history) {
            warn!("could not save history to {}: {}", history.display(), err);
        }
    }
    Ok(())
}
