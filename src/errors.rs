/*!
 * Error types for the playnet application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised by the play analysis pipeline.
///
/// Unrecognized transcript lines are never errors. Every variant here means
/// the run cannot produce a trustworthy graph and must stop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayError {
    /// A dialogue line appeared before any speaker cue opened a block
    #[error("Dialogue on line {line_number} has no speaker: no speaker cue precedes it")]
    DialogueWithoutSpeaker {
        /// 1-based line number in the transcript
        line_number: usize,
    },

    /// The timeline lost track of which block belongs to which cue
    #[error("Internal consistency violation: {blocks} dialogue blocks for {cues} speaker cues")]
    BlockCountMismatch {
        /// Number of dialogue blocks built
        blocks: usize,
        /// Number of speaker cues matched
        cues: usize,
    },

    /// A speaker was counted among the other characters of its own block
    #[error("Internal consistency violation: {speaker} listed as present alongside itself")]
    SelfInteraction {
        /// The offending speaker
        speaker: String,
    },

    /// Scene ranges were requested without any act/scene boundary
    #[error("No act/scene boundaries found: the transcript contains no dialogue lines")]
    NoScenes,

    /// Normalization was requested on a graph without any positive edge
    #[error("Cannot normalize interaction graph: maximum edge weight is {max_edge}")]
    DegenerateNormalization {
        /// The maximum edge weight observed
        max_edge: f64,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the play analysis pipeline
    #[error("Play analysis error: {0}")]
    Play(#[from] PlayError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::File(format!("JSON serialization failed: {}", error))
    }
}
