use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = passgate::cli::Cli::parse();
    cli.run()
}
