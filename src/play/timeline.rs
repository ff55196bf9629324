/*!
 * Timeline construction from classified transcript lines.
 *
 * The builder is a small state machine. It remembers the current act/scene
 * pair and which dialogue block is open, and turns the line stream into:
 * - dialogue blocks, one per speaker cue
 * - act/scene boundaries, one per change of (act, scene)
 * - stage directions, each tied to the block it follows
 */

use log::trace;
use serde::Serialize;

use super::classifier::{classify, LineKind};
use crate::errors::PlayError;

/// A run of dialogue lines spoken by one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueBlock {
    pub speaker: String,
    pub lines: Vec<String>,
}

impl DialogueBlock {
    pub fn new(speaker: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            lines: Vec::new(),
        }
    }

    /// Number of dialogue lines in the block.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Where a new (act, scene) pair starts in the block list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActSceneBoundary {
    /// Act token, compared as text
    pub act: String,
    /// Scene token, compared as text
    pub scene: String,
    /// Index of the first dialogue block of this act/scene
    pub start_block: usize,
}

/// A non-dialogue instruction and the block it follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDirection {
    /// Index of the preceding dialogue block, `None` before the first cue
    pub follows_block: Option<usize>,
    pub text: String,
}

/// Output of the timeline builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub blocks: Vec<DialogueBlock>,
    pub boundaries: Vec<ActSceneBoundary>,
    pub stage_directions: Vec<StageDirection>,
}

impl Timeline {
    /// Sequence of speakers, one entry per block.
    pub fn speaker_chain(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.speaker.as_str())
    }
}

/// Line-by-line timeline builder.
///
/// Feed lines with [`TimelineBuilder::push_line`] and call
/// [`TimelineBuilder::finish`], or use [`TimelineBuilder::build`] for a whole
/// transcript.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    timeline: Timeline,
    // (act, scene) of the last dialogue line; None is the pre-parse sentinel
    current: Option<(String, String)>,
    cues_seen: usize,
    line_number: usize,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the timeline of a whole transcript.
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Result<Timeline, PlayError> {
        let mut builder = Self::new();
        for line in lines {
            builder.push_line(line.as_ref())?;
        }
        builder.finish()
    }

    /// Classify one line and apply it to the timeline.
    pub fn push_line(&mut self, line: &str) -> Result<(), PlayError> {
        self.line_number += 1;
        self.apply(classify(line))
    }

    /// Apply an already classified line.
    pub fn apply(&mut self, kind: LineKind) -> Result<(), PlayError> {
        match kind {
            LineKind::Dialogue { act, scene, text, instruction } => {
                self.on_dialogue(act, scene, text, instruction)
            }
            LineKind::Cue { speaker } => {
                self.cues_seen += 1;
                self.timeline.blocks.push(DialogueBlock::new(speaker));
                Ok(())
            }
            LineKind::StageDirection { text } => {
                let follows_block = self.open_block();
                self.timeline.stage_directions.push(StageDirection { follows_block, text });
                Ok(())
            }
            LineKind::NoMatch => Ok(()),
        }
    }

    fn on_dialogue(
        &mut self,
        act: String,
        scene: String,
        text: String,
        instruction: Option<String>,
    ) -> Result<(), PlayError> {
        let open = self.open_block().ok_or(PlayError::DialogueWithoutSpeaker {
            line_number: self.line_number,
        })?;

        // Bracketed instructions share the index of the open block
        if let Some(text) = instruction {
            self.timeline.stage_directions.push(StageDirection {
                follows_block: Some(open),
                text,
            });
        }

        let changed = match &self.current {
            Some((cur_act, cur_scene)) => *cur_act != act || *cur_scene != scene,
            None => true,
        };
        if changed {
            trace!("Act {} scene {} starts at block {}", act, scene, open);
            self.timeline.boundaries.push(ActSceneBoundary {
                act: act.clone(),
                scene: scene.clone(),
                start_block: open,
            });
            self.current = Some((act, scene));
        }

        self.timeline.blocks[open].lines.push(text);
        Ok(())
    }

    fn open_block(&self) -> Option<usize> {
        self.timeline.blocks.len().checked_sub(1)
    }

    /// Finish parsing and check the block/cue invariant.
    pub fn finish(self) -> Result<Timeline, PlayError> {
        let blocks = self.timeline.blocks.len();
        if blocks != self.cues_seen {
            return Err(PlayError::BlockCountMismatch {
                blocks,
                cues: self.cues_seen,
            });
        }
        Ok(self.timeline)
    }
}
