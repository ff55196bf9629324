/*!
 * Integration tests for folder processing
 */

use std::fs;
use anyhow::Result;
use playnet::app_config::Config;
use playnet::app_controller::{Controller, FolderSummary};
use crate::common;

/// Every transcript in the tree is analyzed, bad ones are counted but don't stop the run
#[test]
fn test_run_folder_withMixedTranscripts_shouldProcessAllAndCountFailures() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("tragedies");
    fs::create_dir_all(&nested)?;

    common::create_sample_play(temp_dir.path(), "first.html")?;
    common::create_sample_play(&nested, "second.htm")?;
    common::create_test_file(temp_dir.path(), "broken.html", "<a name=1.1.1>Nobody speaks this.</a><br>\n")?;
    common::create_test_file(temp_dir.path(), "readme.txt", "not a play")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run_folder(temp_dir.path().to_path_buf(), false)?;

    assert_eq!(summary, FolderSummary { processed: 2, skipped: 0, failed: 1 });
    assert!(temp_dir.path().join("first_out.json").exists());
    assert!(nested.join("second_out.json").exists());
    assert!(!temp_dir.path().join("broken_out.json").exists());
    Ok(())
}

/// A second pass skips transcripts that already have output
#[test]
fn test_run_folder_twice_shouldSkipExistingOutputs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_play(temp_dir.path(), "play.html")?;
    let controller = Controller::with_config(Config::default())?;

    controller.run_folder(temp_dir.path().to_path_buf(), false)?;
    let summary = controller.run_folder(temp_dir.path().to_path_buf(), false)?;
    assert_eq!(summary, FolderSummary { processed: 0, skipped: 1, failed: 0 });

    let summary = controller.run_folder(temp_dir.path().to_path_buf(), true)?;
    assert_eq!(summary.processed, 1);
    Ok(())
}

/// A directory without transcripts is an error
#[test]
fn test_run_folder_withNoTranscripts_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "notes.txt", "nothing here")?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.run_folder(temp_dir.path().to_path_buf(), false).is_err());
    assert!(controller.run_folder(temp_dir.path().join("missing"), false).is_err());
    Ok(())
}
