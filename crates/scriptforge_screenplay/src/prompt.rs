//! Prompt rendering for a single section.

use scriptforge_core::{Brief, SectionSpec};

/// Characters of the previous section carried into the next prompt.
pub const CONTEXT_EXCERPT_CHARS: usize = 1000;

const DEFAULT_FOCUS: &str = "Story development and character progression";

/// Narrative focus for a 1-based ordinal.
///
/// ```
/// use scriptforge_screenplay::section_focus;
///
/// assert!(section_focus(1).contains("inciting incident"));
/// assert_eq!(section_focus(9), "Story development and character progression");
/// ```
pub fn section_focus(ordinal: u8) -> &'static str {
    match ordinal {
        1 => "Character introductions, world-building, and inciting incident",
        2 => "Plot development, character relationships, and rising tension",
        3 => "Major plot twist, character development, and escalating conflicts",
        4 => "Climax, major confrontations, and turning points",
        5 => "Resolution, character arcs completion, and satisfying conclusion",
        _ => DEFAULT_FOCUS,
    }
}

/// The leading slice of `previous` quoted in the next prompt.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn context_excerpt(previous: &str) -> &str {
    match previous.char_indices().nth(CONTEXT_EXCERPT_CHARS) {
        Some((cut, _)) => &previous[..cut],
        None => previous,
    }
}

/// Render the prompt for one section.
///
/// Pure function of its inputs. A continuity block is included only when
/// `previous` is non-empty.
///
/// # Examples
///
/// ```
/// use scriptforge_core::{Brief, SectionCatalog};
/// use scriptforge_screenplay::build_section_prompt;
///
/// let brief = Brief::builder().title("Nova").setting("Mars").build().unwrap();
/// let catalog = SectionCatalog::screenplay();
/// let prompt = build_section_prompt(&brief, &catalog.sections()[1], "FADE IN:", 5);
///
/// assert!(prompt.contains("- Title: Nova"));
/// assert!(prompt.contains("This is section 2 of 5 total sections"));
/// assert!(prompt.contains("PREVIOUS SECTION CONTEXT:\nFADE IN:..."));
/// ```
pub fn build_section_prompt(
    brief: &Brief,
    spec: &SectionSpec,
    previous: &str,
    total_sections: usize,
) -> String {
    let range = spec.page_range();
    let context = if previous.is_empty() {
        String::new()
    } else {
        format!("\n\nPREVIOUS SECTION CONTEXT:\n{}...", context_excerpt(previous))
    };

    format!(
        "You are a professional screenplay writer. Write a {range} page section of a movie script.

MOVIE DETAILS:
- Title: {title}
- Genre: {genre}
- Setting: {setting}
- Main Characters: {characters}
- Tone: {tone}
- Plot: {plot}

SECTION REQUIREMENTS:
- Section: {section} (Pages {range})
- This is section {ordinal} of {total_sections} total sections
- Write approximately {pages} pages of screenplay content
- Use proper screenplay formatting (FADE IN, character names in caps, scene headings, etc.)
- Maintain continuity with previous sections
- Focus on: {focus}

{context}

FORMATTING GUIDELINES:
- Use standard screenplay format
- Scene headings: EXT./INT. LOCATION - TIME
- Character names in ALL CAPS when speaking
- Action lines in present tense
- Proper spacing and indentation
- Include scene transitions (FADE IN, FADE OUT, CUT TO:)

Write the complete section now:",
        title = brief.title(),
        genre = brief.genre(),
        setting = brief.setting(),
        characters = brief.main_characters(),
        tone = brief.tone(),
        plot = brief.plot(),
        section = spec.title(),
        ordinal = spec.ordinal(),
        pages = range.page_count(),
        focus = section_focus(*spec.ordinal()),
    )
}
