//! The creative brief that drives a screenplay run.

use derive_builder::Builder;
use scriptforge_error::{ScreenplayError, ScreenplayErrorKind, ScriptforgeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// User-supplied creative parameters.
///
/// A brief is supplied once before generation starts and never mutated while a run
/// is in progress. Every field is free text and may be empty.
///
/// # Examples
///
/// ```
/// use scriptforge_core::Brief;
///
/// let brief = Brief::builder()
///     .title("Nova")
///     .genre("sci-fi")
///     .setting("Mars")
///     .build()
///     .unwrap();
///
/// assert_eq!(brief.title(), "Nova");
/// assert!(brief.plot().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct Brief {
    /// Working title of the screenplay
    title: String,
    /// Genre (e.g. "sci-fi", "noir")
    genre: String,
    /// Plot summary
    plot: String,
    /// Main characters, free-form
    #[serde(alias = "mainCharacters")]
    main_characters: String,
    /// Overall tone (e.g. "dramatic")
    tone: String,
    /// Setting of the story
    setting: String,
}

/// Brief files may wrap their fields in a `[brief]` table.
#[derive(Deserialize)]
struct BriefFile {
    brief: Brief,
}

impl Brief {
    /// Creates a new brief builder.
    pub fn builder() -> BriefBuilder {
        BriefBuilder::default()
    }

    /// Parse a brief from TOML.
    ///
    /// Accepts either top-level keys or a `[brief]` table. `main_characters` may also
    /// be spelled `mainCharacters`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptforge_core::Brief;
    ///
    /// let brief = Brief::from_toml_str(r#"
    ///     [brief]
    ///     title = "Nova"
    ///     mainCharacters = "Ava"
    /// "#).unwrap();
    /// assert_eq!(brief.main_characters(), "Ava");
    /// ```
    pub fn from_toml_str(content: &str) -> ScriptforgeResult<Self> {
        let value: toml::Table = toml::from_str(content).map_err(|e| {
            ScreenplayError::new(ScreenplayErrorKind::BriefParse(e.to_string()))
        })?;

        let parsed = if value.contains_key("brief") {
            toml::from_str::<BriefFile>(content).map(|file| file.brief)
        } else {
            toml::from_str::<Brief>(content)
        };

        parsed.map_err(|e| ScreenplayError::new(ScreenplayErrorKind::BriefParse(e.to_string())).into())
    }

    /// File name for an export with the given extension.
    ///
    /// Uses the trimmed title, falling back to `Movie_Script` when it is blank.
    /// Path separators are replaced so the name stays inside the target directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptforge_core::Brief;
    ///
    /// let brief = Brief::builder().title("Nova").build().unwrap();
    /// assert_eq!(brief.export_filename("txt"), "Nova.txt");
    /// assert_eq!(Brief::default().export_filename("docx"), "Movie_Script.docx");
    /// ```
    pub fn export_filename(&self, extension: &str) -> String {
        let title = self.title.trim();
        let stem = if title.is_empty() {
            "Movie_Script".to_string()
        } else {
            title.replace(['/', '\\'], "_")
        };
        format!("{}.{}", stem, extension)
    }

    /// Read and parse a brief from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ScriptforgeResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading brief");

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScreenplayError::new(ScreenplayErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Self::from_toml_str(&content)
    }
}
