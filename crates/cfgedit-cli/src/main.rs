//! cfgedit CLI
//!
//! Edits config files whose values are stored base64-encoded, keeping the
//! header and each variable's comments intact.

mod allowlist;
mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            println!("{} config file editor", "cfgedit".green().bold());
            println!();
            println!("Run {} for available commands.", "cfgedit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Encode { in_file, out_file } => {
            commands::run_encode(ctx, &in_file, out_file.as_deref())
        }
        Commands::New { file } => commands::run_new(ctx, &file),
        Commands::Remove { file, var_name } => commands::run_remove(ctx, &file, &var_name),
        Commands::Set {
            file,
            var_name,
            value,
        } => commands::run_set(ctx, &file, &var_name, &value),
        Commands::Show {
            file,
            var_name,
            raw,
        } => commands::run_show(ctx, &file, &var_name, raw),
        Commands::ShowAll { file } => commands::run_show_all(&file),
    }
}
