//! CLI entry point for the terrain board generation tool

use boardgen::io::cli::{BoardProcessor, Cli};
use clap::Parser;

fn main() -> boardgen::Result<()> {
    let cli = Cli::parse();
    let processor = BoardProcessor::new(cli);
    processor.process()
}
