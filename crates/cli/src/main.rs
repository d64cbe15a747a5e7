//! Stockledger CLI entry point.

use clap::Parser;

use stockledger_cli::cli::Cli;
use stockledger_cli::commands;

fn main() {
    let cli = Cli::parse();

    stockledger_observability::init(cli.log_format, cli.log_level());

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::execute(cli.command(), &cli.file, &mut stdout) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
