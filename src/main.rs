//! CLI entry point for the grid art generator

use artgrid::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> artgrid::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run()
}
