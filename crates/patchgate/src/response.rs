//! Wire format for the CLI result.
//!
//! The engine owns the data; this boundary owns the serialized shape. All
//! keys are camelCase to match what update clients consume.

use serde::Serialize;

use patchgate_engine::{PatchOutcome, RecommendedAction, RejectReason, SizeStats};

/// `stats` block of the wire record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBody {
    pub old_size: usize,
    pub new_size: usize,
    pub patch_size: usize,
    /// `null` when the source is empty (the ratio is undefined there).
    pub size_ratio: Option<f64>,
    pub operations_count: usize,
}

impl From<SizeStats> for StatsBody {
    fn from(stats: SizeStats) -> Self {
        Self {
            old_size: stats.old_size,
            new_size: stats.new_size,
            patch_size: stats.patch_size,
            size_ratio: stats.size_ratio,
            operations_count: stats.operations_count,
        }
    }
}

/// Top-level wire record.
///
/// Exactly one of the three shapes is populated: accepted (hashes + patch
/// location), rejected (reason + recommendation), or error. Absent fields
/// are omitted rather than serialized as null, except `sizeRatio` inside
/// `stats`, whose null carries meaning.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendedAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsBody>,
}

impl From<PatchOutcome> for PatchResponse {
    fn from(outcome: PatchOutcome) -> Self {
        match outcome {
            PatchOutcome::Accepted {
                patch_content,
                patch_file_path,
                source_fingerprint,
                target_fingerprint,
                stats,
            } => Self {
                success: true,
                patch_file_path: patch_file_path.map(|p| p.display().to_string()),
                patch_content,
                source_hash: Some(source_fingerprint.as_str().to_string()),
                target_hash: Some(target_fingerprint.as_str().to_string()),
                reason: None,
                recommendation: None,
                error: None,
                stats: Some(stats.into()),
            },
            PatchOutcome::Rejected {
                reason,
                recommendation,
                stats,
            } => Self {
                success: false,
                patch_file_path: None,
                patch_content: None,
                source_hash: None,
                target_hash: None,
                reason: Some(reason),
                recommendation: Some(recommendation),
                error: None,
                stats: Some(stats.into()),
            },
        }
    }
}

impl PatchResponse {
    /// Record for an aborted evaluation (I/O failure, not a rejection).
    pub fn from_error(message: String) -> Self {
        Self {
            success: false,
            patch_file_path: None,
            patch_content: None,
            source_hash: None,
            target_hash: None,
            reason: None,
            recommendation: None,
            error: Some(message),
            stats: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchgate_engine::{EngineConfig, PatchEngine};

    const OLD: &str = "function add(a, b) {\n  return a + b;\n}\n";
    const NEW: &str = "function add(a, b) {\n  return a - b;\n}\n";

    #[test]
    fn test_accepted_wire_shape() {
        let engine = PatchEngine::new(EngineConfig {
            include_patch_content: true,
            ..EngineConfig::default()
        });
        let outcome = engine.evaluate(OLD, NEW, None).unwrap();
        let value = serde_json::to_value(PatchResponse::from(outcome)).unwrap();

        assert_eq!(value["success"], true);
        assert!(value["sourceHash"]
            .as_str()
            .unwrap()
            .starts_with("sha256:"));
        assert!(value["targetHash"]
            .as_str()
            .unwrap()
            .starts_with("sha256:"));
        assert!(value["patchContent"].as_str().unwrap().contains("@@"));
        assert_eq!(
            value["stats"]["oldSize"].as_u64().unwrap() as usize,
            OLD.len()
        );
        assert_eq!(value["stats"]["operationsCount"], 1);
        assert!(value.get("reason").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_rejected_wire_shape() {
        let outcome = PatchEngine::with_defaults()
            .evaluate("", "hello", None)
            .unwrap();
        let value = serde_json::to_value(PatchResponse::from(outcome)).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["reason"], "empty_source");
        assert_eq!(value["recommendation"], "full_download");
        assert_eq!(value["stats"]["sizeRatio"], serde_json::Value::Null);
        assert!(value.get("sourceHash").is_none());
        assert!(value.get("targetHash").is_none());
    }

    #[test]
    fn test_error_wire_shape() {
        let value =
            serde_json::to_value(PatchResponse::from_error("boom".to_string())).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert!(value.get("stats").is_none());
        assert!(value.get("reason").is_none());
    }
}
