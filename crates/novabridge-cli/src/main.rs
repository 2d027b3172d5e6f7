use clap::Parser;
use tracing::Level;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // stdout carries the summary only; logs go to stderr.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let summary = commands::run(&cli)?;
    println!("{}", commands::render(&summary, &cli.format)?);
    Ok(())
}
