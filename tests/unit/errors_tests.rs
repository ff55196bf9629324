/*!
 * Tests for error types and conversions
 */

use playnet::errors::{AppError, PlayError};

#[test]
fn test_playError_dialogueWithoutSpeaker_shouldNameLine() {
    let error = PlayError::DialogueWithoutSpeaker { line_number: 42 };
    let display = format!("{}", error);
    assert!(display.contains("42"));
    assert!(display.contains("no speaker"));
}

#[test]
fn test_playError_blockCountMismatch_shouldDisplayBothCounts() {
    let error = PlayError::BlockCountMismatch { blocks: 3, cues: 4 };
    let display = format!("{}", error);
    assert!(display.contains("Internal consistency violation"));
    assert!(display.contains("3 dialogue blocks"));
    assert!(display.contains("4 speaker cues"));
}

#[test]
fn test_playError_selfInteraction_shouldNameSpeaker() {
    let error = PlayError::SelfInteraction { speaker: "OPHELIA".to_string() };
    assert!(format!("{}", error).contains("OPHELIA"));
}

#[test]
fn test_playError_degenerateNormalization_shouldShowMaxEdge() {
    let error = PlayError::DegenerateNormalization { max_edge: 0.0 };
    let display = format!("{}", error);
    assert!(display.contains("Cannot normalize"));
    assert!(display.contains('0'));
}

#[test]
fn test_appError_fromPlayError_shouldWrapCorrectly() {
    let app_error: AppError = PlayError::NoScenes.into();
    match app_error {
        AppError::Play(PlayError::NoScenes) => {}
        other => panic!("Expected AppError::Play, got {:?}", other),
    }
    let display = format!("{}", AppError::from(PlayError::NoScenes));
    assert!(display.contains("Play analysis error"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "hamlet.html missing");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(ref msg) if msg.contains("hamlet.html")));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "something odd"));
}

#[test]
fn test_appError_fromSerdeJson_shouldBecomeFileError() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app_error: AppError = json_error.into();
    assert!(format!("{}", app_error).contains("JSON"));
}
