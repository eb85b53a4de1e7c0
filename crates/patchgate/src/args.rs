//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;
use patchgate_engine::EngineConfig;

/// Patchgate - decide whether an update ships as a patch or a full download
#[derive(Parser, Debug, Clone)]
#[command(name = "patchgate")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the old version of the artifact
    pub old: PathBuf,

    /// Path to the new version of the artifact
    pub new: PathBuf,

    /// Directory to persist the generated patch into
    #[arg(short = 'o', long, env = "PATCHGATE_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Include the rendered patch text in the JSON result
    #[arg(long)]
    pub inline: bool,

    /// Reject when patch bytes exceed this multiple of the source size
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Unchanged lines kept around each hunk
    #[arg(long)]
    pub context: Option<usize>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,

    /// Show verbose output (debug information)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Engine configuration with CLI overrides applied on top of defaults.
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(threshold) = self.threshold {
            config.size_ratio_threshold = threshold;
        }
        if let Some(context) = self.context {
            config.context_lines = context;
        }
        config.include_patch_content = self.inline;
        config
    }
}
