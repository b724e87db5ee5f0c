//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ScriptForge - Feature-length screenplay generation from a creative brief
#[derive(Parser, Debug)]
#[command(name = "scriptforge")]
#[command(about = "Generate a five-section screenplay from a creative brief", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a screenplay from a brief TOML file
    Generate {
        /// Path to the brief TOML file
        #[arg(long)]
        brief: PathBuf,

        /// Directory the exports are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Both)]
        format: ExportFormat,

        /// Re-attempt failed sections once before exporting
        #[arg(long)]
        retry_failed: bool,

        /// Configuration file layered over the defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Classify the lines of a screenplay text file
    Layout {
        /// Path to the text file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Print the section catalog
    Sections,
}

/// Export file formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text
    Txt,
    /// Word document
    Docx,
    /// Plain text and Word document
    Both,
}

impl ExportFormat {
    /// Whether a plain-text file is written.
    pub fn includes_text(self) -> bool {
        matches!(self, Self::Txt | Self::Both)
    }

    /// Whether a Word document is written.
    pub fn includes_docx(self) -> bool {
        matches!(self, Self::Docx | Self::Both)
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
