use clap::Parser;

mod cli;
mod commands;
mod domain;
mod logging;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    match &cli.command {
        None | Some(Commands::Shell) => commands::shell::run(),
        Some(_) => commands::handle_runtime_commands(&cli),
    }
}
