//! CLI entry point for the maze viewer

use clap::Parser;
use mazegrid::io::cli::{Cli, MazeViewer};

fn main() -> mazegrid::Result<()> {
    let cli = Cli::parse();
    let viewer = MazeViewer::new(cli);
    viewer.process()
}
