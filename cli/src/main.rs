use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::{run, setup};
use cli::{config, logger, repl};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    logger::init(&config.log_level)?;

    let mut interp = setup(&config)?;
    match &cli.command {
        Commands::Run { words } => run::run_words(&mut interp, words),
        Commands::Source { path } => run::source_file(&mut interp, path),
        Commands::Commands => {
            for name in interp.command_names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Repl => repl::run_repl(&mut interp, &config),
    }
}
