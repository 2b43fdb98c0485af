use anyhow::Result;
use clap::Parser;
use filescope::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
