use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tclb")]
#[command(about = "tclbind demo host", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single command, e.g. `tclb run calc add 1 2`
    Run {
        /// Command words
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Run every line of a script file as a command
    Source {
        /// Path to the script
        path: PathBuf,
    },
    /// List registered commands
    Commands,
    /// Start the REPL
    Repl,
}
