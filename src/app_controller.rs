use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::play::{PlayAnalysis, PlayAnalyzer};

// @module: Application controller for play transcript analysis

/// Outcome of processing a single transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Analysis written to the given path
    Written(PathBuf),
    /// Output already existed and overwrite was not forced
    Skipped(PathBuf),
}

/// Counts gathered while processing a folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for play analysis
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Pipeline configured from the graph settings
    analyzer: PlayAnalyzer,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let analyzer = PlayAnalyzer::new(config.graph.clone());
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze a transcript file without writing anything
    pub fn analyze_file<P: AsRef<Path>>(&self, input_file: P) -> Result<PlayAnalysis> {
        let input_file = input_file.as_ref();
        let lines = FileManager::read_lines(input_file)?;
        if lines.is_empty() {
            warn!("Transcript is empty: {:?}", input_file);
        }
        debug!("Read {} lines from {:?}", lines.len(), input_file);

        let analysis = self
            .analyzer
            .process(&lines)
            .with_context(|| format!("Failed to analyze transcript: {:?}", input_file))?;
        Ok(analysis)
    }

    /// Get the output path for a transcript in the given directory
    pub fn output_path_for(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(input_file, output_dir, &self.config.output.suffix)
    }

    /// Run the main workflow with input transcript and output directory
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<RunOutcome> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let extension = input_file.extension().map(|e| e.to_string_lossy().to_string()).unwrap_or_default();
        if !self.config.is_transcript_extension(&extension) {
            warn!("{:?} does not have a transcript extension, analyzing anyway", input_file);
        }

        let output_path = self.output_path_for(&input_file, &output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", input_file);
            return Ok(RunOutcome::Skipped(output_path));
        }

        let analysis = self.analyze_file(&input_file)?;

        FileManager::ensure_dir(&output_dir)?;
        if self.config.output.report {
            FileManager::write_json(&output_path, &analysis.report(), self.config.output.pretty)?;
        } else {
            FileManager::write_json(&output_path, &analysis.graph, self.config.output.pretty)?;
        }

        info!("Success: {} ({})", output_path.display(), Self::format_duration(start_time.elapsed()));
        Ok(RunOutcome::Written(output_path))
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }

    /// Run the workflow in folder mode, processing every transcript in a directory
    ///
    /// Outputs are written next to each transcript. A transcript that fails is
    /// logged and counted, the remaining ones are still processed.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let suffix = &self.config.output.suffix;
        let transcripts: Vec<PathBuf> = FileManager::find_files(&input_dir, &self.config.input.extensions)?
            .into_iter()
            // Never treat our own output as input
            .filter(|path| !path.to_string_lossy().ends_with(suffix.as_str()))
            .collect();

        if transcripts.is_empty() {
            return Err(anyhow::anyhow!(
                "No transcript files ({}) found in directory: {:?}",
                self.config.input.extensions.join(", "),
                input_dir
            ));
        }

        let folder_pb = ProgressBar::new(transcripts.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} plays ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("#>-"));

        let mut summary = FolderSummary::default();

        for transcript in &transcripts {
            let file_name = transcript.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Analyzing: {}", file_name));

            let output_dir = transcript.parent().map(Path::to_path_buf).unwrap_or_else(|| input_dir.clone());

            match self.run(transcript.clone(), output_dir, force_overwrite) {
                Ok(RunOutcome::Written(_)) => summary.processed += 1,
                Ok(RunOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed in {}: {} processed, {} skipped, {} errors",
            Self::format_duration(start_time.elapsed()),
            summary.processed,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }
}
