/*!
 * Play transcript analysis.
 *
 * This module turns an annotated play transcript into a timeline and a
 * character interaction graph. It is split into several submodules:
 *
 * - `classifier`: Recognizes dialogue, speaker cue and stage direction lines
 * - `registry`: Collects the characters who speak
 * - `timeline`: Builds dialogue blocks, act/scene boundaries and stage directions
 * - `scenes`: Resolves scene ranges and per-scene presence
 * - `graph`: Accumulates and normalizes the interaction graph
 * - `analysis`: Runs the whole pipeline and builds reports
 */

// Re-export main types for easier usage
pub use self::analysis::{PlayAnalysis, PlayAnalyzer, PlayReport, PlayStats};
pub use self::classifier::{classify, LineKind};
pub use self::graph::{build_interaction_graph, InteractionGraph, DEFAULT_NORMALIZATION_CEILING};
pub use self::registry::SpeakerRegistry;
pub use self::scenes::{resolve_scene_ranges, scene_presence, PresenceSet, SceneRange};
pub use self::timeline::{ActSceneBoundary, DialogueBlock, StageDirection, Timeline, TimelineBuilder};

// Submodules
pub mod analysis;
pub mod classifier;
pub mod graph;
pub mod registry;
pub mod scenes;
pub mod timeline;
