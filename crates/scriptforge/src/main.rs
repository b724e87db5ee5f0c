//! ScriptForge CLI binary.
//!
//! This binary provides command-line access to ScriptForge's functionality:
//! - Generate a screenplay from a brief TOML file
//! - Classify a screenplay text file into layout blocks
//! - List the section catalog

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateOptions, generate_screenplay, show_layout, show_sections};

    // Load .env before anything reads credentials
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins unless --verbose is given
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            brief,
            out_dir,
            format,
            retry_failed,
            config,
        } => {
            let options = GenerateOptions {
                brief,
                out_dir,
                format,
                retry_failed,
                config,
            };
            generate_screenplay(&options).await?;
        }

        Commands::Layout { file, format } => {
            show_layout(&file, format)?;
        }

        Commands::Sections => {
            show_sections();
        }
    }

    Ok(())
}
