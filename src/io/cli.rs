//! Command-line interface for rendering maze files in the terminal

use crate::io::configuration::{DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH, MAZE_EXTENSION};
use crate::io::error::{MazeError, Result};
use crate::io::parser::load_maze;
use crate::io::render::{write_colored, write_plain};
use crate::spatial::grid::Maze;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazeview")]
#[command(
    author,
    version,
    about = "Render maze files as plain or colored text"
)]
/// Command-line arguments for the maze viewer
// Output-mode selection naturally wants independent boolean flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maze text file or directory to render
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Render a freshly created blank maze instead of reading TARGET
    #[arg(short, long)]
    pub blank: bool,

    /// Width of the blank maze
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Height of the blank maze
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Force colored output even when not writing to a terminal
    #[arg(short, long)]
    pub color: bool,

    /// Force plain output
    #[arg(short, long)]
    pub plain: bool,

    /// Suppress file name headers in directory mode
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Whether renderings should carry color codes
    ///
    /// The flags take precedence; otherwise color is used only when standard
    /// output is a terminal.
    pub fn use_color(&self) -> bool {
        if self.plain {
            false
        } else if self.color {
            true
        } else {
            std::io::stdout().is_terminal()
        }
    }
}

/// Renders maze files to standard output
pub struct MazeViewer {
    cli: Cli,
}

impl MazeViewer {
    /// Create a new viewer with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process the target according to CLI arguments
    ///
    /// A file target renders that file; a directory target renders every
    /// maze file in it in sorted order, with a file name header before each
    /// when more than one is found.
    ///
    /// # Errors
    ///
    /// Returns an error when no target is given without `--blank`, and
    /// propagates creation, loading, parsing, and rendering failures.
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.cli.blank {
            let width = self.cli.width.unwrap_or(DEFAULT_MAZE_WIDTH);
            let height = self.cli.height.unwrap_or(DEFAULT_MAZE_HEIGHT);
            let maze = Maze::new(width, height)?;
            return self.render(&maze, &mut out);
        }

        let Some(target) = self.cli.target.as_deref() else {
            return Err(MazeError::NoTarget);
        };

        let files = Self::collect_files(target)?;

        for (index, file) in files.iter().enumerate() {
            if files.len() > 1 && !self.cli.quiet {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}:", file.display())?;
            }

            let maze = load_maze(file)?;
            self.render(&maze, &mut out)?;
        }

        Ok(())
    }

    fn render(&self, maze: &Maze, out: &mut impl Write) -> Result<()> {
        if self.cli.use_color() {
            write_colored(maze, out)
        } else {
            write_plain(maze, out)
        }
    }

    fn collect_files(target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            return Ok(vec![target.to_path_buf()]);
        }

        if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MazeError::FileSystem {
                path: target.to_path_buf(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| MazeError::FileSystem {
                        path: target.to_path_buf(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();

                if path.extension().and_then(|s| s.to_str()) == Some(MAZE_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            return Ok(files);
        }

        Err(MazeError::FileSystem {
            path: target.to_path_buf(),
            operation: "locate target",
            source: std::io::ErrorKind::NotFound.into(),
        })
    }
}
