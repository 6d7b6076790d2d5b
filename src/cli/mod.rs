//! Command-line interface for album-art-finder.
//!
//! This module provides CLI commands for searching artwork and checking
//! configuration without launching the GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
