//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptforge binary.

mod commands;
mod generate;
mod layout;
mod sections;

pub use commands::{Cli, Commands, ExportFormat, OutputFormat};
pub use generate::{GenerateOptions, generate_screenplay};
pub use layout::show_layout;
pub use sections::show_sections;
