mod cli;
mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let context = || Context::new(cli.config.as_deref(), &cli.validation, cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            files,
            json,
            strict,
        } => context().and_then(|ctx| commands::validate::run(&ctx, &files, json, strict)),
        Commands::Analyze { file, json } => commands::analyze::run(&file, json),
        Commands::Render {
            file,
            set,
            values,
            samples,
            output,
        } => commands::render::run(&file, &set, values.as_deref(), samples, output.as_deref()),
        Commands::Preview { file, set, json } => {
            context().and_then(|ctx| commands::preview::run(&ctx, &file, &set, json))
        }
        Commands::Snippet { kind, list } => commands::snippet::run(kind.as_deref(), list),
        Commands::Watch { file, preview } => {
            context().and_then(|ctx| commands::watch::run(&ctx, &file, preview))
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
