/*!
 * Character interaction graph.
 *
 * Edge `speaker -> other` accumulates the number of dialogue lines `speaker`
 * spoke in scenes where `other` also speaks. It measures how much a character
 * talked while another was on stage, not who addressed whom.
 */

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::scenes::{PresenceSet, SceneRange};
use super::timeline::DialogueBlock;
use crate::errors::PlayError;

/// Largest edge weight after normalization.
pub const DEFAULT_NORMALIZATION_CEILING: f64 = 10.0;

/// Directed weighted graph: speaker -> (other speaker -> weight).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionGraph {
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl InteractionGraph {
    /// Graph with a node for every speaker and no edges.
    pub fn with_speakers<'a, I>(speakers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let adjacency = speakers
            .into_iter()
            .map(|name| (name.to_string(), BTreeMap::new()))
            .collect();
        Self { adjacency }
    }

    /// Add `amount` to the edge `from -> to` and return the new weight.
    ///
    /// Self-edges are rejected: a character is never present alongside itself.
    pub fn add_weight(&mut self, from: &str, to: &str, amount: f64) -> Result<f64, PlayError> {
        if from == to {
            return Err(PlayError::SelfInteraction {
                speaker: from.to_string(),
            });
        }
        let weight = self
            .adjacency
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_insert(0.0);
        *weight += amount;
        Ok(*weight)
    }

    /// Weight of `from -> to`, if the edge exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }

    /// Outgoing edges of a speaker.
    pub fn neighbors(&self, speaker: &str) -> Option<&BTreeMap<String, f64>> {
        self.adjacency.get(speaker)
    }

    pub fn speakers(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// All edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(from, edges)| {
            edges
                .iter()
                .map(move |(to, weight)| (from.as_str(), to.as_str(), *weight))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Largest edge weight, or `None` when the graph has no edges.
    pub fn max_weight(&self) -> Option<f64> {
        self.edges().map(|(_, _, w)| w).reduce(f64::max)
    }

    pub fn as_map(&self) -> &BTreeMap<String, BTreeMap<String, f64>> {
        &self.adjacency
    }

    /// Rescale every edge so that `max_edge` maps to `ceiling`.
    ///
    /// Fails when `max_edge` is not positive, which happens when no two
    /// characters ever share a scene.
    pub fn normalize(&mut self, max_edge: f64, ceiling: f64) -> Result<(), PlayError> {
        if max_edge.is_nan() || max_edge <= 0.0 {
            return Err(PlayError::DegenerateNormalization { max_edge });
        }
        for weight in self.adjacency.values_mut().flat_map(BTreeMap::values_mut) {
            *weight = *weight * ceiling / max_edge;
        }
        Ok(())
    }
}

/// Accumulate the interaction graph over every scene.
///
/// Returns the graph and the largest edge weight seen, `0.0` if no edge was
/// created.
pub fn build_interaction_graph<'a, I>(
    speakers: I,
    presence: &[PresenceSet],
    blocks: &[DialogueBlock],
    ranges: &[SceneRange],
) -> Result<(InteractionGraph, f64), PlayError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = InteractionGraph::with_speakers(speakers);
    let mut max_edge = 0.0_f64;

    for (range, present) in ranges.iter().zip(presence) {
        for block in &blocks[range.as_range()] {
            let length = block.line_count() as f64;
            let others = present.iter().filter(|name| **name != block.speaker);
            for other in others {
                let weight = graph.add_weight(&block.speaker, other, length)?;
                max_edge = max_edge.max(weight);
            }
        }
    }

    debug!(
        "Interaction graph: {} nodes, {} edges, max weight {}",
        graph.adjacency.len(),
        graph.edge_count(),
        max_edge
    );

    Ok((graph, max_edge))
}
