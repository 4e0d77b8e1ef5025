mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = cli::Cli::parse();

    // Run the command and handle fatal errors gracefully. Per-file errors
    // are part of the report and do not reach here.
    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    match cli.command {
        Commands::Run {
            path,
            rules,
            dry_run,
            parallel,
            json,
        } => commands::run::handle(&path, rules.as_ref(), dry_run, parallel, json),
        Commands::Preview { file, rules } => commands::preview::handle(&file, rules.as_ref()),
        Commands::Rules { rules } => commands::rules::handle(rules.as_ref()),
    }
}
