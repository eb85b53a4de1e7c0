//! Result types returned to the caller.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::hash::Fingerprint;
use crate::threshold;

/// Byte-size accounting for one evaluation.
///
/// Computed once and read-only thereafter. `size_ratio` is `None` exactly
/// when the source is empty, where the ratio is undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeStats {
    /// Byte length of the decoded source text.
    pub old_size: usize,
    /// Byte length of the decoded target text.
    pub new_size: usize,
    /// Byte length of the rendered patch document.
    pub patch_size: usize,
    /// `patch_size / old_size`, undefined for an empty source.
    pub size_ratio: Option<f64>,
    /// Number of deltas in the edit script.
    pub operations_count: usize,
}

impl SizeStats {
    /// Assemble stats from the measured byte lengths and delta count.
    pub fn measure(
        old_size: usize,
        new_size: usize,
        patch_size: usize,
        operations_count: usize,
    ) -> Self {
        Self {
            old_size,
            new_size,
            patch_size,
            size_ratio: threshold::size_ratio(patch_size, old_size),
            operations_count,
        }
    }
}

/// Why a patch was not worth shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The patch is larger than the configured multiple of the source.
    PatchTooLarge,
    /// The source is empty, so the size ratio is undefined.
    EmptySource,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::PatchTooLarge => f.write_str("patch_too_large"),
            RejectReason::EmptySource => f.write_str("empty_source"),
        }
    }
}

/// What the caller should do instead of applying a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Transfer the full target text.
    FullDownload,
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendedAction::FullDownload => f.write_str("full_download"),
        }
    }
}

/// The engine's verdict for one old/new pair.
///
/// Exactly one variant is returned. `Rejected` is a normal classification
/// outcome, not an error, and deliberately carries no fingerprints: they
/// are only computed on the accepted path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PatchOutcome {
    /// The patch is worth shipping.
    Accepted {
        /// Rendered patch text, present when the caller asked for inline
        /// content.
        patch_content: Option<String>,
        /// Where the patch was persisted, when a destination was supplied.
        patch_file_path: Option<PathBuf>,
        /// Fingerprint of the source text.
        source_fingerprint: Fingerprint,
        /// Fingerprint of the target text.
        target_fingerprint: Fingerprint,
        /// Size accounting.
        stats: SizeStats,
    },
    /// Shipping the patch is not worth it.
    Rejected {
        /// Machine-readable reason code.
        reason: RejectReason,
        /// Fallback the caller should take.
        recommendation: RecommendedAction,
        /// Size accounting.
        stats: SizeStats,
    },
}

impl PatchOutcome {
    /// Whether this is the accepted variant.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PatchOutcome::Accepted { .. })
    }

    /// Size accounting, present on both variants.
    pub fn stats(&self) -> &SizeStats {
        match self {
            PatchOutcome::Accepted { stats, .. } | PatchOutcome::Rejected { stats, .. } => stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(RejectReason::PatchTooLarge).unwrap(),
            "patch_too_large"
        );
        assert_eq!(
            serde_json::to_value(RejectReason::EmptySource).unwrap(),
            "empty_source"
        );
        assert_eq!(
            serde_json::to_value(RecommendedAction::FullDownload).unwrap(),
            "full_download"
        );
    }

    #[test]
    fn test_size_ratio_undefined_for_empty_source() {
        let stats = SizeStats::measure(0, 5, 20, 1);
        assert_eq!(stats.size_ratio, None);
    }

    #[test]
    fn test_size_ratio_defined_otherwise() {
        let stats = SizeStats::measure(100, 120, 50, 2);
        assert_eq!(stats.size_ratio, Some(0.5));
    }
}
