//! gitfame CLI entry point

use std::process::ExitCode;

use clap::Parser;

use gitfame::{attribution, format, logging, Cli, GitBackend};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> gitfame::Result<String> {
    let config = cli.into_config();
    tracing::debug!("configuration: {:?}", config);

    let backend = GitBackend::new(&config.repository)?;
    let ledger = attribution::run(&backend, &config)?;

    format::render(&ledger, config.format, config.order_by)
}
