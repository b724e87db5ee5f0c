//! Sequential generation of every catalog section.

use crate::{ScreenplayRun, SectionGenerator};
use scriptforge_core::{Brief, SectionCatalog, SectionState, SectionStatus};
use scriptforge_error::{ConfigError, ScreenplayError, ScreenplayErrorKind, ScriptforgeResult};
use scriptforge_interface::{GenerationDriver, SectionEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{Span, debug, field, info, instrument, warn};

/// Drives a screenplay run section by section.
///
/// Sections are generated strictly in ordinal order, one at a time. Each section
/// sees the previous section's text only if that section completed. A failed
/// section is recorded and the run moves on.
///
/// Every state transition is reported as a [`SectionEvent`] when an event channel
/// is attached.
pub struct ScreenplayOrchestrator<D: GenerationDriver> {
    generator: SectionGenerator<D>,
    catalog: SectionCatalog,
    events: Option<UnboundedSender<SectionEvent>>,
}

impl<D: GenerationDriver> ScreenplayOrchestrator<D> {
    /// Creates an orchestrator over the standard five-section catalog.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the generator's credential table does not
    /// cover the catalog exactly.
    pub fn new(generator: SectionGenerator<D>) -> ScriptforgeResult<Self> {
        Self::with_catalog(generator, SectionCatalog::screenplay())
    }

    /// Creates an orchestrator over a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the generator's credential table does not
    /// cover the catalog exactly.
    pub fn with_catalog(generator: SectionGenerator<D>, catalog: SectionCatalog) -> ScriptforgeResult<Self> {
        if generator.credentials().len() != catalog.len() {
            return Err(ConfigError::new(format!(
                "Credential table has {} entries but the catalog has {} sections",
                generator.credentials().len(),
                catalog.len()
            ))
            .into());
        }

        Ok(Self {
            generator,
            catalog,
            events: None,
        })
    }

    /// Report every section transition on `sender`.
    pub fn with_events(mut self, sender: UnboundedSender<SectionEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// The catalog this orchestrator walks.
    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    /// The section generator.
    pub fn generator(&self) -> &SectionGenerator<D> {
        &self.generator
    }

    /// Generate every section of a fresh run.
    ///
    /// Section failures are recorded on the returned run, not returned as errors.
    #[instrument(skip_all, fields(title = %brief.title(), run_id = field::Empty))]
    pub async fn run(&self, brief: &Brief) -> ScriptforgeResult<ScreenplayRun> {
        let mut run = ScreenplayRun::new(brief.clone(), &self.catalog);
        Span::current().record("run_id", field::display(run.id()));
        info!(sections = self.catalog.len(), "Starting screenplay run");

        for spec in self.catalog.sections() {
            let ordinal = *spec.ordinal();
            let previous = match ordinal {
                1 => String::new(),
                _ => run.handoff(ordinal - 1),
            };

            self.transition(&mut run, ordinal, SectionState::begin)?;
            self.attempt(&mut run, ordinal, previous).await?;
        }

        let failed = run.failed_ordinals();
        if failed.is_empty() {
            info!("Screenplay run completed");
        } else {
            warn!(?failed, "Screenplay run finished with failed sections");
        }

        Ok(run)
    }

    /// Re-attempt one errored section with the context it originally received.
    ///
    /// Returns the section's status after the attempt.
    ///
    /// # Errors
    ///
    /// Returns a screenplay error if the ordinal is unknown or the section is not in
    /// the `error` status.
    #[instrument(skip(self, run), fields(run_id = %run.id()))]
    pub async fn retry_section(&self, run: &mut ScreenplayRun, ordinal: u8) -> ScriptforgeResult<SectionStatus> {
        let previous = run.context(ordinal).to_string();
        self.transition(run, ordinal, SectionState::restart)?;
        info!(ordinal, "Retrying section");

        self.attempt(run, ordinal, previous).await?;
        run.section(ordinal)
            .map(|s| *s.status())
            .ok_or_else(|| ScreenplayError::new(ScreenplayErrorKind::UnknownOrdinal(ordinal)).into())
    }

    /// Generate a section already in `generating` and move it to a terminal status.
    async fn attempt(&self, run: &mut ScreenplayRun, ordinal: u8, previous: String) -> ScriptforgeResult<()> {
        let spec = self
            .catalog
            .get(ordinal)
            .ok_or_else(|| ScreenplayError::new(ScreenplayErrorKind::UnknownOrdinal(ordinal)))?;

        info!(ordinal, title = %spec.title(), pages = %spec.page_range(), "Generating section");
        let result = self
            .generator
            .generate(run.brief(), spec, &previous, self.catalog.len())
            .await;
        run.record_context(ordinal, previous);

        match result {
            Ok(content) => {
                info!(ordinal, chars = content.chars().count(), "Section completed");
                self.transition(run, ordinal, |s| s.complete(content))
            }
            Err(e) => {
                warn!(ordinal, error = %e, "Section failed");
                self.transition(run, ordinal, |s| s.fail(e.to_string()))
            }
        }
    }

    fn transition<F>(&self, run: &mut ScreenplayRun, ordinal: u8, apply: F) -> ScriptforgeResult<()>
    where
        F: FnOnce(&mut SectionState) -> ScriptforgeResult<()>,
    {
        let state = run.section_mut(ordinal)?;
        apply(state)?;
        self.emit(state);
        Ok(())
    }

    fn emit(&self, state: &SectionState) {
        let Some(sender) = &self.events else {
            return;
        };
        if sender.send(SectionEvent::from(state)).is_err() {
            debug!(ordinal = state.ordinal(), "Event receiver dropped");
        }
    }
}
