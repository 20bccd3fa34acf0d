use anyhow::Context;
use clap::Parser;

use sigmascan::cli::{check, output, run, CheckCommand, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = dispatch(&cli) {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(args).context("scan failed"),
        Commands::Check(CheckCommand::Config(args)) => {
            check::config(args).context("config check failed")
        }
    }
}
