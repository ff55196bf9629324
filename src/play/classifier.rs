/*!
 * Line classification for annotated play transcripts.
 *
 * Every transcript line is one of three shapes, tested in a fixed order:
 * - Dialogue: `<a name="1.2.34">[Aside] Text of the line</a><br>`
 * - Speaker cue: `<a name="speech12"><b>HAMLET</b></a>`
 * - Stage direction: `<i>Enter GHOST</i>`
 *
 * Anything else is not part of the timeline and yields `LineKind::NoMatch`.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: Dialogue anchor with act, scene, optional bracketed instruction
static DIALOGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^<a name="?(?P<act>\d)\.(?P<scene>\d)\.\d+"?>(\[(?P<instruction>.*)\])?(?P<dialogue>.*)</a><br>"#,
    )
    .expect("Invalid dialogue regex")
});

// @const: Speaker cue anchor
static CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^<a name="?speech\d+"?><b>(?P<name>.*)</b></a>"#).expect("Invalid cue regex")
});

// @const: Emphasized stage direction span, anywhere on the line
static STAGE_DIRECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<i>(?P<direction>.*)</i>").expect("Invalid stage direction regex")
});

/// A classified transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A line of spoken text inside an act/scene
    Dialogue {
        act: String,
        scene: String,
        text: String,
        /// Bracketed instruction preceding the text, if any and non-empty
        instruction: Option<String>,
    },

    /// Start of a new speech by the named character
    Cue { speaker: String },

    /// Free-standing stage direction
    StageDirection { text: String },

    /// Not a recognized shape
    NoMatch,
}

/// Classify a single raw line.
///
/// Shapes are tried as dialogue, then cue, then stage direction, so a line
/// carrying both a dialogue anchor and an `<i>` span counts as dialogue.
pub fn classify(line: &str) -> LineKind {
    if let Some(caps) = DIALOGUE_REGEX.captures(line) {
        return LineKind::Dialogue {
            act: caps["act"].to_string(),
            scene: caps["scene"].to_string(),
            text: caps["dialogue"].to_string(),
            instruction: caps
                .name("instruction")
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        };
    }

    if let Some(caps) = CUE_REGEX.captures(line) {
        return LineKind::Cue {
            speaker: caps["name"].to_string(),
        };
    }

    if let Some(caps) = STAGE_DIRECTION_REGEX.captures(line) {
        return LineKind::StageDirection {
            text: caps["direction"].to_string(),
        };
    }

    LineKind::NoMatch
}

/// Extract only the speaker name of a cue line.
///
/// Used by the speaker pre-pass, which must not be influenced by the other
/// two shapes.
pub fn cue_speaker(line: &str) -> Option<&str> {
    CUE_REGEX
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}
