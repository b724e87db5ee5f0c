//! Line-by-line screenplay layout classification.

use scriptforge_core::{BlockKind, LayoutBlock};

/// Line prefixes that mark a scene heading or transition.
pub const SCENE_PREFIXES: [&str; 5] = ["EXT.", "INT.", "FADE IN:", "FADE OUT.", "CUT TO:"];

/// Character cues are strictly shorter than this many characters.
pub const CUE_MAX_CHARS: usize = 50;

/// Classify one line.
///
/// `has_prior` is true when the section already produced at least one block of any
/// kind. Rules apply to the trimmed line, first match wins:
///
/// 1. empty → blank
/// 2. scene prefix → scene heading
/// 3. short, upper-case letters and spaces only → character cue
/// 4. wrapped in parentheses → parenthetical
/// 5. anything after the first block → dialogue
/// 6. otherwise → action
///
/// # Examples
///
/// ```
/// use scriptforge_core::BlockKind;
/// use scriptforge_document::classify_line;
///
/// assert_eq!(*classify_line("  INT. ROOM - DAY ", false).kind(), BlockKind::SceneHeading);
/// assert_eq!(*classify_line("JOHN", true).kind(), BlockKind::CharacterCue);
/// assert_eq!(*classify_line("A door opens.", false).kind(), BlockKind::Action);
/// assert_eq!(*classify_line("A door opens.", true).kind(), BlockKind::Dialogue);
/// ```
pub fn classify_line(line: &str, has_prior: bool) -> LayoutBlock {
    let text = line.trim();

    let kind = if text.is_empty() {
        BlockKind::Blank
    } else if SCENE_PREFIXES.iter().any(|prefix| text.starts_with(prefix)) {
        BlockKind::SceneHeading
    } else if is_character_cue(text) {
        BlockKind::CharacterCue
    } else if text.starts_with('(') && text.ends_with(')') {
        BlockKind::Parenthetical
    } else if has_prior {
        BlockKind::Dialogue
    } else {
        BlockKind::Action
    };

    LayoutBlock::new(kind, text)
}

/// Classify a section's raw text, one block per `\n`-separated line.
///
/// ```
/// use scriptforge_core::BlockKind;
/// use scriptforge_document::classify_section;
///
/// let kinds: Vec<BlockKind> = classify_section("INT. ROOM - DAY\nJOHN\n(quietly)\nHello there.\n")
///     .iter()
///     .map(|b| *b.kind())
///     .collect();
///
/// assert_eq!(kinds, [
///     BlockKind::SceneHeading,
///     BlockKind::CharacterCue,
///     BlockKind::Parenthetical,
///     BlockKind::Dialogue,
///     BlockKind::Blank,
/// ]);
/// ```
pub fn classify_section(text: &str) -> Vec<LayoutBlock> {
    let mut blocks = Vec::new();
    for line in text.split('\n') {
        let block = classify_line(line, !blocks.is_empty());
        blocks.push(block);
    }
    blocks
}

fn is_character_cue(text: &str) -> bool {
    text == text.to_uppercase()
        && text.chars().count() < CUE_MAX_CHARS
        && !text.contains('.')
        && !text.starts_with('(')
        && text
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
}
