//! Classified screenplay layout blocks.

use serde::{Deserialize, Serialize};

/// Structural role of one line of screenplay text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BlockKind {
    /// `INT.`/`EXT.` headings and transitions (`FADE IN:`, `CUT TO:`)
    SceneHeading,
    /// Speaker name above dialogue
    CharacterCue,
    /// `(quietly)`-style delivery note
    Parenthetical,
    /// Spoken lines
    Dialogue,
    /// Scene description
    Action,
    /// Empty line
    Blank,
}

/// Semantic left indent, shallowest first.
///
/// Renderers map these to concrete measurements.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum IndentLevel {
    /// Full width
    #[default]
    None,
    /// Dialogue column
    Dialogue,
    /// Delivery notes, one step short of the speaker column
    Parenthetical,
    /// Speaker names
    Speaker,
}

/// Rendering-agnostic style for a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleHints {
    /// Bold weight
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Render in capitals regardless of source case
    pub all_caps: bool,
    /// Left indent
    pub indent: IndentLevel,
    /// Mirror the left indent on the right side
    pub indent_right: bool,
}

impl StyleHints {
    /// The style every block of `kind` carries.
    pub fn for_kind(kind: BlockKind) -> Self {
        match kind {
            BlockKind::SceneHeading => Self {
                bold: true,
                all_caps: true,
                ..Self::default()
            },
            BlockKind::CharacterCue => Self {
                bold: true,
                indent: IndentLevel::Speaker,
                ..Self::default()
            },
            BlockKind::Parenthetical => Self {
                italic: true,
                indent: IndentLevel::Parenthetical,
                ..Self::default()
            },
            BlockKind::Dialogue => Self {
                indent: IndentLevel::Dialogue,
                indent_right: true,
                ..Self::default()
            },
            BlockKind::Action | BlockKind::Blank => Self::default(),
        }
    }
}

/// One classified line of a section.
///
/// # Examples
///
/// ```
/// use scriptforge_core::{BlockKind, IndentLevel, LayoutBlock};
///
/// let cue = LayoutBlock::new(BlockKind::CharacterCue, "JOHN");
/// assert!(cue.style().bold);
/// assert_eq!(cue.style().indent, IndentLevel::Speaker);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct LayoutBlock {
    /// Structural role
    kind: BlockKind,
    /// Trimmed line text
    text: String,
    /// Style derived from the kind
    style: StyleHints,
}

impl LayoutBlock {
    /// Creates a block with the style for its kind.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            style: StyleHints::for_kind(kind),
        }
    }
}
