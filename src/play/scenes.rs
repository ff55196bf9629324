/*!
 * Scene ranges and per-scene presence.
 *
 * Act/scene boundaries become half-open ranges over the dialogue block list.
 * Each range then yields the set of characters who speak in it.
 */

use std::collections::BTreeSet;
use std::ops::Range;

use serde::Serialize;

use super::timeline::{ActSceneBoundary, DialogueBlock};
use crate::errors::PlayError;

/// Half-open interval `[start, end)` of dialogue block indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SceneRange {
    pub start: usize,
    pub end: usize,
}

impl SceneRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// The range as a slice index.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Speakers with at least one block inside a scene.
pub type PresenceSet = BTreeSet<String>;

/// Turn boundaries into contiguous ranges covering `[first start, total_blocks)`.
///
/// Each range ends where the next boundary starts; the last one runs to
/// `total_blocks`.
pub fn resolve_scene_ranges(
    boundaries: &[ActSceneBoundary],
    total_blocks: usize,
) -> Result<Vec<SceneRange>, PlayError> {
    if boundaries.is_empty() {
        return Err(PlayError::NoScenes);
    }

    let mut ranges: Vec<SceneRange> = boundaries
        .windows(2)
        .map(|pair| SceneRange::new(pair[0].start_block, pair[1].start_block))
        .collect();

    // is_empty checked above
    let last = &boundaries[boundaries.len() - 1];
    ranges.push(SceneRange::new(last.start_block, total_blocks));

    Ok(ranges)
}

/// Collect the distinct speakers of each range.
pub fn scene_presence(blocks: &[DialogueBlock], ranges: &[SceneRange]) -> Vec<PresenceSet> {
    ranges
        .iter()
        .map(|range| {
            blocks[range.as_range()]
                .iter()
                .map(|block| block.speaker.clone())
                .collect()
        })
        .collect()
}
