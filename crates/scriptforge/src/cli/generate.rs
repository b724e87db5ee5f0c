//! Screenplay generation command handler.

use super::ExportFormat;
use scriptforge::{
    Brief, CredentialTable, DocxRenderer, GeminiClient, RetryPolicy, ScreenplayErrorKind,
    ScreenplayError, ScreenplayOrchestrator, ScreenplayRun, ScriptforgeConfig, ScriptforgeResult,
    SectionCatalog, SectionEvent, SectionGenerator, SectionStatus, assemble_document,
    write_document, write_plain_text,
};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Options for the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Brief TOML file
    pub brief: PathBuf,
    /// Export directory
    pub out_dir: PathBuf,
    /// Which exports to write
    pub format: ExportFormat,
    /// Re-attempt errored sections once
    pub retry_failed: bool,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
}

/// Generate a screenplay and write the requested exports.
///
/// Configuration and credentials are validated before the brief is read, so a
/// misconfigured install fails without making any calls.
#[instrument(skip(options), fields(brief = %options.brief.display()))]
pub async fn generate_screenplay(options: &GenerateOptions) -> ScriptforgeResult<()> {
    let config = ScriptforgeConfig::load_with(options.config.as_deref())?;
    let catalog = SectionCatalog::screenplay();
    let credentials = CredentialTable::from_config(&config.credentials, catalog.len())?;
    let client = GeminiClient::from_config(&config.service)?;
    let retry = RetryPolicy::from_config(&config.retry);

    let brief = Brief::from_file(&options.brief)?;
    info!(title = %brief.title(), genre = %brief.genre(), "Loaded brief");

    let (sender, mut receiver) = mpsc::unbounded_channel::<SectionEvent>();
    let progress = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            match &event.error {
                Some(error) => warn!(ordinal = event.ordinal, status = %event.status, %error, "Section update"),
                None => info!(ordinal = event.ordinal, status = %event.status, "Section update"),
            }
        }
    });

    let orchestrator =
        ScreenplayOrchestrator::with_catalog(SectionGenerator::new(client, credentials, retry), catalog)?
            .with_events(sender);

    let mut run = orchestrator.run(&brief).await?;

    if options.retry_failed {
        for ordinal in run.failed_ordinals() {
            let status = orchestrator.retry_section(&mut run, ordinal).await?;
            info!(ordinal, %status, "Retry finished");
        }
    }

    drop(orchestrator);
    if let Err(e) = progress.await {
        warn!(error = %e, "Progress logger stopped unexpectedly");
    }

    print_summary(&run);
    write_exports(&run, options)
}

fn print_summary(run: &ScreenplayRun) {
    println!("Screenplay: {}", run.brief().title());
    println!("{:-<80}", "");
    for section in run.sections() {
        let marker = match section.status() {
            SectionStatus::Completed => "ok",
            SectionStatus::Error => "FAILED",
            _ => "incomplete",
        };
        println!(
            "{}. {} (pages {}): {}",
            section.ordinal(),
            section.title(),
            section.page_range(),
            marker
        );
        if let Some(error) = section.error() {
            println!("   {}", error);
        }
    }
    println!("{:-<80}", "");

    let failed = run.failed_ordinals();
    if failed.is_empty() {
        println!("All {} sections completed", run.sections().len());
    } else {
        println!(
            "{} of {} sections failed",
            failed.len(),
            run.sections().len()
        );
    }
}

fn write_exports(run: &ScreenplayRun, options: &GenerateOptions) -> ScriptforgeResult<()> {
    std::fs::create_dir_all(&options.out_dir).map_err(|e| {
        ScreenplayError::new(ScreenplayErrorKind::ExportWrite(format!(
            "{}: {}",
            options.out_dir.display(),
            e
        )))
    })?;

    if options.format.includes_text() {
        let path = write_plain_text(run, &options.out_dir)?;
        println!("Wrote {}", path.display());
    }

    if options.format.includes_docx() {
        let document = assemble_document(run.brief(), run.sections());
        let path = write_document(&DocxRenderer::new(), &document, &options.out_dir)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
