// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use playnet::app_config::{self, Config, EmptyGraphPolicy};
use playnet::app_controller::{Controller, RunOutcome};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for EmptyGraphPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliEmptyGraph {
    Error,
    Skip,
}

impl From<CliEmptyGraph> for EmptyGraphPolicy {
    fn from(cli_policy: CliEmptyGraph) -> Self {
        match cli_policy {
            CliEmptyGraph::Error => EmptyGraphPolicy::Error,
            CliEmptyGraph::Skip => EmptyGraphPolicy::Skip,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze play transcripts into interaction graphs (default command)
    Analyze(AnalyzeArgs),

    /// Generate shell completions for playnet
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct AnalyzeArgs {
    /// Input transcript file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory for the output file (single file mode, defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write the full report (timeline, scenes, stage directions, stats, graph)
    #[arg(short, long)]
    report: bool,

    /// Behavior when no two characters share a scene
    #[arg(long, value_enum)]
    empty_graph: Option<CliEmptyGraph>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// playnet - character interaction graphs from annotated play transcripts
///
/// Reads a play transcript marked up with act/scene/line anchors, speaker
/// cues and stage directions, and writes a weighted graph of which characters
/// talk while which others are on stage.
#[derive(Parser, Debug)]
#[command(name = "playnet")]
#[command(version)]
#[command(about = "Character interaction graphs from annotated play transcripts")]
#[command(long_about = "playnet parses annotated play transcripts and builds a character interaction graph.

EXAMPLES:
    playnet hamlet.html                    # Write hamlet_out.json next to the play
    playnet -f hamlet.html                 # Overwrite an existing output
    playnet -r hamlet.html                 # Write the full report instead of the graph
    playnet -o out/ hamlet.html            # Write the output into out/
    playnet --log-level debug plays/       # Process a whole directory with debug logging
    playnet completions bash > playnet.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input transcript file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory for the output file (single file mode, defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write the full report (timeline, scenes, stage directions, stats, graph)
    #[arg(short, long)]
    report: bool,

    /// Behavior when no two characters share a scene
    #[arg(long, value_enum)]
    empty_graph: Option<CliEmptyGraph>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // max_level is adjusted after the config is loaded
        metadata.level() <= self.level.min(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here; the effective level is set through log::set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "playnet", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Analyze(args)) => run_analyze(args),
        None => {
            // Default behavior - use top-level args
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_analyze(AnalyzeArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                output_dir: cli.output_dir,
                report: cli.report,
                empty_graph: cli.empty_graph,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

/// Load the configuration file, creating a default one when missing
fn load_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(LevelFilter::from(&level));
    }

    let mut config = load_config(&options.config_path)?;

    // Override config with CLI options if provided
    if options.report {
        config.output.report = true;
    }
    if let Some(policy) = &options.empty_graph {
        config.graph.empty_graph = policy.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(LevelFilter::from(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
        });
        match controller.run(options.input_path.clone(), output_dir, options.force_overwrite)? {
            RunOutcome::Written(path) => info!("Interaction graph written to {}", path.display()),
            RunOutcome::Skipped(path) => info!("Kept existing {}", path.display()),
        }
    } else if options.input_path.is_dir() {
        if options.output_dir.is_some() {
            warn!("--output-dir is ignored in folder mode, outputs are written next to each play");
        }
        let summary = controller.run_folder(options.input_path.clone(), options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} transcript(s) failed to process", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
