//! The patch decision engine.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::differ::EditScript;
use crate::error::EngineError;
use crate::formatter::render_unified;
use crate::hash::Fingerprint;
use crate::lines::split_lines;
use crate::outcome::{PatchOutcome, SizeStats};
use crate::threshold::{classify, Classification};

/// Orchestrates differencing, formatting, classification, fingerprinting
/// and optional persistence for one old/new pair.
///
/// The engine is a pure, synchronous computation over its inputs: no shared
/// state between invocations and no caches, so independent evaluations may
/// run concurrently without coordination. The only shared external resource
/// is the optional persistence directory; generated file names embed the
/// target fingerprint so concurrent writers land on distinct names unless
/// they are writing identical content.
pub struct PatchEngine {
    config: EngineConfig,
}

impl PatchEngine {
    /// Build an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Build an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide between a patch and a full download for one old/new pair.
    ///
    /// When `persist_to` is given and the patch is accepted, the rendered
    /// document is written into that directory (created as needed) via a
    /// temp file and an atomic rename, so a concurrent reader never
    /// observes a partially written patch. Rejection short-circuits before
    /// fingerprinting or persistence. I/O failures abort the evaluation
    /// with an [`EngineError`]; no retries happen here.
    pub fn evaluate(
        &self,
        old_text: &str,
        new_text: &str,
        persist_to: Option<&Path>,
    ) -> Result<PatchOutcome, EngineError> {
        let old_lines = split_lines(old_text);
        let new_lines = split_lines(new_text);

        let script = EditScript::compute(&old_lines, &new_lines);
        let document = render_unified(&script, &self.config);

        let stats = SizeStats::measure(
            old_text.len(),
            new_text.len(),
            document.len(),
            script.operation_count(),
        );
        debug!(
            old_size = stats.old_size,
            new_size = stats.new_size,
            patch_size = stats.patch_size,
            operations = stats.operations_count,
            "rendered patch document"
        );

        if let Classification::Rejected {
            reason,
            recommendation,
        } = classify(stats.patch_size, stats.old_size, self.config.size_ratio_threshold)
        {
            info!(%reason, ratio = ?stats.size_ratio, "patch not worth shipping");
            return Ok(PatchOutcome::Rejected {
                reason,
                recommendation,
                stats,
            });
        }

        let source_fingerprint = Fingerprint::of_text(old_text);
        let target_fingerprint = Fingerprint::of_text(new_text);

        let patch_file_path = match persist_to {
            Some(dir) => Some(persist_patch(dir, &target_fingerprint, &document)?),
            None => None,
        };

        Ok(PatchOutcome::Accepted {
            patch_content: self.config.include_patch_content.then(|| document),
            patch_file_path,
            source_fingerprint,
            target_fingerprint,
            stats,
        })
    }
}

/// Write the patch document into `dir`, creating it as needed.
///
/// The file name embeds the leading hex of the target fingerprint, so the
/// name is stable for a given target content. The write goes through a
/// temp file in the same directory followed by a rename; concurrent
/// writers to the same name overwrite whole files, never interleave.
fn persist_patch(
    dir: &Path,
    target_fingerprint: &Fingerprint,
    document: &str,
) -> Result<PathBuf, EngineError> {
    fs::create_dir_all(dir).map_err(|source| EngineError::PersistFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let file_name = format!("patch_{}.diff", &target_fingerprint.hex_digest()[..12]);
    let dest = dir.join(file_name);

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| EngineError::PersistFailure {
        path: dest.clone(),
        source,
    })?;
    tmp.write_all(document.as_bytes())
        .map_err(|source| EngineError::PersistFailure {
            path: dest.clone(),
            source,
        })?;
    tmp.persist(&dest).map_err(|e| EngineError::PersistFailure {
        path: dest.clone(),
        source: e.error,
    })?;

    info!(path = %dest.display(), bytes = document.len(), "patch persisted");
    Ok(dest)
}
