//! Input/output: errors, constants, map files, PNG snapshots and the CLI

/// Command-line interface for inspecting tile maps
pub mod cli;
/// Grid constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG snapshot export of tile codes
pub mod image;
/// Plain-text tile map loading and saving
pub mod map_file;
