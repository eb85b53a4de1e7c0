//! Engine configuration with serde defaults.

use serde::{Deserialize, Serialize};

/// Tunable knobs for one engine instance.
///
/// Every field has a default so partial configuration files and
/// flag-by-flag CLI overrides both work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject the patch when `patch_size / old_size` exceeds this value
    /// (strictly; a ratio exactly at the threshold is accepted).
    pub size_ratio_threshold: f64,

    /// Unchanged lines kept around each hunk in the rendered patch.
    pub context_lines: usize,

    /// Label for the source side in the patch header.
    pub old_label: String,

    /// Label for the target side in the patch header.
    pub new_label: String,

    /// Include the rendered patch text inline in the accepted outcome.
    pub include_patch_content: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size_ratio_threshold: 5.0,
            context_lines: 3,
            old_label: "old".to_string(),
            new_label: "new".to_string(),
            include_patch_content: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.size_ratio_threshold, 5.0);
        assert_eq!(config.context_lines, 3);
        assert_eq!(config.old_label, "old");
        assert_eq!(config.new_label, "new");
        assert!(!config.include_patch_content);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"size_ratio_threshold": 2.5}"#).unwrap();
        assert_eq!(config.size_ratio_threshold, 2.5);
        assert_eq!(config.context_lines, 3);
    }
}
