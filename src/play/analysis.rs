/*!
 * End-to-end play analysis.
 *
 * Runs the full pipeline over one transcript:
 * speaker pre-pass, timeline, scene ranges, presence, interaction graph and
 * normalization. Every intermediate product is kept in [`PlayAnalysis`] so
 * callers can emit either the bare graph or a full report.
 */

use std::collections::BTreeMap;

use log::{debug, info};
use serde::Serialize;

use super::graph::{build_interaction_graph, InteractionGraph};
use super::registry::SpeakerRegistry;
use super::scenes::{resolve_scene_ranges, scene_presence, PresenceSet, SceneRange};
use super::timeline::{StageDirection, Timeline, TimelineBuilder};
use crate::app_config::{EmptyGraphPolicy, GraphConfig};
use crate::errors::PlayError;

/// Per-speaker counts over the whole play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayStats {
    /// Number of speeches (dialogue blocks) per speaker
    pub speeches: BTreeMap<String, usize>,

    /// Number of dialogue lines per speaker
    pub lines: BTreeMap<String, usize>,
}

impl PlayStats {
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let mut stats = Self::default();
        for block in &timeline.blocks {
            *stats.speeches.entry(block.speaker.clone()).or_insert(0) += 1;
            *stats.lines.entry(block.speaker.clone()).or_insert(0) += block.line_count();
        }
        stats
    }
}

/// Everything the pipeline produced for one transcript.
#[derive(Debug, Clone)]
pub struct PlayAnalysis {
    pub speakers: SpeakerRegistry,
    pub timeline: Timeline,
    pub ranges: Vec<SceneRange>,
    pub presence: Vec<PresenceSet>,
    pub stats: PlayStats,
    /// Largest raw edge weight before normalization
    pub max_edge: f64,
    /// False when normalization was skipped on an edgeless graph
    pub normalized: bool,
    pub graph: InteractionGraph,
}

/// One timeline entry in the report.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechEntry {
    pub index: usize,
    pub speaker: String,
    pub lines: usize,
}

/// One act/scene in the report.
#[derive(Debug, Clone, Serialize)]
pub struct SceneEntry {
    pub act: String,
    pub scene: String,
    pub start: usize,
    pub end: usize,
    pub present: Vec<String>,
}

/// Serializable view of a [`PlayAnalysis`].
#[derive(Debug, Clone, Serialize)]
pub struct PlayReport {
    pub speakers: Vec<String>,
    pub timeline: Vec<SpeechEntry>,
    pub scenes: Vec<SceneEntry>,
    pub stage_directions: Vec<StageDirection>,
    pub stats: PlayStats,
    pub graph: InteractionGraph,
}

impl PlayAnalysis {
    /// Project the analysis into its report form.
    pub fn report(&self) -> PlayReport {
        let timeline = self
            .timeline
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| SpeechEntry {
                index,
                speaker: block.speaker.clone(),
                lines: block.line_count(),
            })
            .collect();

        let scenes = self
            .timeline
            .boundaries
            .iter()
            .zip(&self.ranges)
            .zip(&self.presence)
            .map(|((boundary, range), present)| SceneEntry {
                act: boundary.act.clone(),
                scene: boundary.scene.clone(),
                start: range.start,
                end: range.end,
                present: present.iter().cloned().collect(),
            })
            .collect();

        PlayReport {
            speakers: self.speakers.names().to_vec(),
            timeline,
            scenes,
            stage_directions: self.timeline.stage_directions.clone(),
            stats: self.stats.clone(),
            graph: self.graph.clone(),
        }
    }
}

/// Runs the analysis pipeline with a given graph configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayAnalyzer {
    config: GraphConfig,
}

impl PlayAnalyzer {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Analyze a transcript given as raw lines.
    pub fn process<S: AsRef<str>>(&self, lines: &[S]) -> Result<PlayAnalysis, PlayError> {
        let speakers = SpeakerRegistry::collect(lines);
        debug!("Speaking characters ({}): {:?}", speakers.len(), speakers.names());

        let timeline = TimelineBuilder::build(lines)?;
        let stats = PlayStats::from_timeline(&timeline);
        debug!("Speeches per character: {:?}", stats.speeches);
        debug!("Dialogue lines per character: {:?}", stats.lines);
        debug!("Stage directions: {}", timeline.stage_directions.len());
        for direction in &timeline.stage_directions {
            debug!("  {:?} : {}", direction.follows_block, direction.text);
        }

        let ranges = resolve_scene_ranges(&timeline.boundaries, timeline.blocks.len())?;
        debug!(
            "Scene ranges: {:?}",
            ranges.iter().map(SceneRange::as_range).collect::<Vec<_>>()
        );

        let presence = scene_presence(&timeline.blocks, &ranges);
        let (mut graph, max_edge) =
            build_interaction_graph(speakers.iter(), &presence, &timeline.blocks, &ranges)?;

        let normalized = match graph.normalize(max_edge, self.config.normalization_ceiling) {
            Ok(()) => true,
            Err(PlayError::DegenerateNormalization { .. })
                if self.config.empty_graph == EmptyGraphPolicy::Skip =>
            {
                info!("No two characters share a scene, leaving graph unnormalized");
                false
            }
            Err(e) => return Err(e),
        };

        info!(
            "Analyzed {} speeches by {} characters across {} scenes",
            timeline.blocks.len(),
            speakers.len(),
            ranges.len()
        );

        Ok(PlayAnalysis {
            speakers,
            timeline,
            ranges,
            presence,
            stats,
            max_edge,
            normalized,
            graph,
        })
    }
}
