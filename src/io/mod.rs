//! Input/output operations for the textual maze format

/// Command-line interface for rendering maze files
pub mod cli;
/// Format limits and rendering palette constants
pub mod configuration;
/// Error types for maze operations
pub mod error;
/// Maze construction from line-delimited text
pub mod parser;
/// Plain and colored text rendering
pub mod render;
