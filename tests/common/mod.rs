/*!
 * Common test utilities for the playnet test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Install a test logger so pipeline debug output shows up with --nocapture
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Two speakers sharing one scene
pub fn two_speaker_lines() -> Vec<String> {
    [
        "<a name=speech1><b>ALICE</b></a>",
        "<a name=1.1.1>Hello there.</a><br>",
        "<a name=speech2><b>BOB</b></a>",
        "<a name=1.1.2>Hi Alice.</a><br>",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A short two-scene play with stage directions and unrecognized markup
pub const SAMPLE_PLAY: &str = r#"<html>
<head><title>The Test of Ages</title></head>
<body>
<h3>ACT I, SCENE I. A hall.</h3>
<p><i>Enter MARCUS and LUCIA</i></p>
<a name="speech1"><b>MARCUS</b></a>
<blockquote>
<a name="1.1.1">Good morrow, cousin.</a><br>
<a name="1.1.2">What news abroad?</a><br>
</blockquote>
<a name="speech2"><b>LUCIA</b></a>
<blockquote>
<a name="1.1.3">[Aside] He knows.</a><br>
<a name="1.1.4">None, my lord, that I could tell.</a><br>
<a name="1.1.5">The market keeps its silence.</a><br>
</blockquote>
<a name="speech3"><b>MARCUS</b></a>
<blockquote>
<a name="1.1.6">Then let us go.</a><br>
</blockquote>
<p><i>Exeunt</i></p>
<h3>SCENE II. A garden.</h3>
<a name="speech4"><b>LUCIA</b></a>
<blockquote>
<a name="1.2.1">Alone at last.</a><br>
</blockquote>
<p><i>Enter FLAVIUS</i></p>
<a name="speech5"><b>FLAVIUS</b></a>
<blockquote>
<a name="1.2.2">Not quite, lady.</a><br>
<a name="1.2.3">I have followed you.</a><br>
</blockquote>
</body>
</html>
"#;

/// Writes the sample play into the given directory
pub fn create_sample_play(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_PLAY)
}
