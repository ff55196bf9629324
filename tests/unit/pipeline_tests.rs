/*!
 * Tests for the play analysis pipeline as a whole
 */

use playnet::play::{
    build_interaction_graph, resolve_scene_ranges, scene_presence, LineKind, PlayAnalyzer,
    SceneRange, SpeakerRegistry, TimelineBuilder, classify, DEFAULT_NORMALIZATION_CEILING,
};
use playnet::PlayError;
use crate::common;

fn sample_lines() -> Vec<String> {
    common::SAMPLE_PLAY.lines().map(str::to_string).collect()
}

/// Every speaker cue must open exactly one dialogue block
#[test]
fn test_timeline_withSamplePlay_shouldHaveOneBlockPerCue() {
    let lines = sample_lines();
    let cues = lines
        .iter()
        .filter(|line| matches!(classify(line), LineKind::Cue { .. }))
        .count();

    let timeline = TimelineBuilder::build(&lines).unwrap();

    assert_eq!(cues, 5);
    assert_eq!(timeline.blocks.len(), cues);
    let chain: Vec<&str> = timeline.speaker_chain().collect();
    assert_eq!(chain, vec!["MARCUS", "LUCIA", "MARCUS", "LUCIA", "FLAVIUS"]);
}

/// Scene ranges must tile the block list in boundary order
#[test]
fn test_sceneRanges_withSamplePlay_shouldCoverAllBlocksOnce() {
    let timeline = TimelineBuilder::build(&sample_lines()).unwrap();

    let ranges = resolve_scene_ranges(&timeline.boundaries, timeline.blocks.len()).unwrap();

    assert_eq!(ranges, vec![SceneRange::new(0, 3), SceneRange::new(3, 5)]);
    assert_eq!(ranges.first().map(|r| r.start), Some(0));
    assert_eq!(ranges.last().map(|r| r.end), Some(timeline.blocks.len()));
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

/// Stage directions keep both their text and their position
#[test]
fn test_stageDirections_withSamplePlay_shouldBeAnchoredToBlocks() {
    let timeline = TimelineBuilder::build(&sample_lines()).unwrap();

    let directions: Vec<(Option<usize>, &str)> = timeline
        .stage_directions
        .iter()
        .map(|d| (d.follows_block, d.text.as_str()))
        .collect();

    assert_eq!(
        directions,
        vec![
            (None, "Enter MARCUS and LUCIA"),
            (Some(1), "Aside"),
            (Some(2), "Exeunt"),
            (Some(3), "Enter FLAVIUS"),
        ]
    );
    // The bracketed line still counts as dialogue
    assert_eq!(timeline.blocks[1].line_count(), 3);
    assert_eq!(timeline.blocks[1].lines[0], " He knows.");
}

/// Building the graph stage by stage matches the analyzer
#[test]
fn test_stages_withSamplePlay_shouldMatchAnalyzer() {
    let lines = sample_lines();
    let speakers = SpeakerRegistry::collect(&lines);
    let timeline = TimelineBuilder::build(&lines).unwrap();
    let ranges = resolve_scene_ranges(&timeline.boundaries, timeline.blocks.len()).unwrap();
    let presence = scene_presence(&timeline.blocks, &ranges);

    let (mut graph, max_edge) =
        build_interaction_graph(speakers.iter(), &presence, &timeline.blocks, &ranges).unwrap();
    assert_eq!(max_edge, 3.0);
    assert_eq!(graph.weight("MARCUS", "LUCIA"), Some(3.0));
    assert_eq!(graph.weight("FLAVIUS", "LUCIA"), Some(2.0));

    graph.normalize(max_edge, DEFAULT_NORMALIZATION_CEILING).unwrap();
    let analysis = PlayAnalyzer::default().process(&lines).unwrap();
    assert_eq!(analysis.graph, graph);
}

/// Normalized graphs peak at exactly the ceiling and never link a speaker to itself
#[test]
fn test_analyzer_withSamplePlay_shouldNormalizeAndAvoidSelfEdges() {
    common::init_logging();
    let analysis = PlayAnalyzer::default().process(&sample_lines()).unwrap();
    let graph = &analysis.graph;

    let max = graph.max_weight().unwrap();
    assert!((max - 10.0).abs() < 1e-9);
    for (from, to, _) in graph.edges() {
        assert_ne!(from, to);
    }

    assert_eq!(graph.weight("MARCUS", "LUCIA"), Some(10.0));
    assert_eq!(graph.weight("LUCIA", "MARCUS"), Some(10.0));
    assert!((graph.weight("LUCIA", "FLAVIUS").unwrap() - 10.0 / 3.0).abs() < 1e-9);
    assert!((graph.weight("FLAVIUS", "LUCIA").unwrap() - 20.0 / 3.0).abs() < 1e-9);
    assert_eq!(graph.weight("MARCUS", "FLAVIUS"), None);
}

/// Renormalizing with the graph's own maximum changes nothing
#[test]
fn test_normalize_onNormalizedGraph_shouldBeIdempotent() {
    let analysis = PlayAnalyzer::default().process(&sample_lines()).unwrap();
    let mut graph = analysis.graph.clone();

    let max = graph.max_weight().unwrap();
    graph.normalize(max, DEFAULT_NORMALIZATION_CEILING).unwrap();

    for (from, to, weight) in analysis.graph.edges() {
        assert!((graph.weight(from, to).unwrap() - weight).abs() < 1e-9);
    }
}

/// Speakers who never share a scene still appear as nodes
#[test]
fn test_analyzer_shouldKeepEveryRegisteredSpeakerAsNode() {
    let mut lines = sample_lines();
    lines.push("<a name=\"speech6\"><b>CHORUS</b></a>".to_string());
    lines.push("<a name=\"2.1.1\">Thus ends our tale.</a><br>".to_string());

    let analysis = PlayAnalyzer::default().process(&lines).unwrap();

    assert_eq!(analysis.ranges.len(), 3);
    assert!(analysis.graph.neighbors("CHORUS").unwrap().is_empty());
    assert_eq!(analysis.graph.speakers().count(), 4);
}

/// Dialogue before any speaker is a fatal input error
#[test]
fn test_analyzer_withDialogueBeforeCue_shouldFail() {
    let mut lines = common::two_speaker_lines();
    lines.insert(0, "<a name=1.1.0>Prologue.</a><br>".to_string());

    let err = PlayAnalyzer::default().process(&lines).unwrap_err();
    assert_eq!(err, PlayError::DialogueWithoutSpeaker { line_number: 1 });
}
