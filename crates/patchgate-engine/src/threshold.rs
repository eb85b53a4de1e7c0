//! Pure accept/reject classification of patch size against source size.

use crate::outcome::{RecommendedAction, RejectReason};

/// Verdict of the size comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The patch is small enough to ship.
    Accepted,
    /// The caller should fall back instead.
    Rejected {
        /// Machine-readable reason code.
        reason: RejectReason,
        /// Fallback the caller should take.
        recommendation: RecommendedAction,
    },
}

/// `patch_size / old_size`, or `None` when the source is empty.
pub fn size_ratio(patch_size: usize, old_size: usize) -> Option<f64> {
    if old_size == 0 {
        None
    } else {
        Some(patch_size as f64 / old_size as f64)
    }
}

/// Classify a patch by its size relative to the source.
///
/// The empty source is rejected with a dedicated reason code rather than
/// comparing an undefined ratio: the rendered document always contains
/// header bytes, so a ratio against zero source bytes would reject every
/// empty-source input through the generic code anyway, and a non-finite
/// ratio must never reach the wire format. Rejection on size uses a strict
/// comparison: a ratio exactly at the threshold is accepted.
pub fn classify(patch_size: usize, old_size: usize, threshold: f64) -> Classification {
    let Some(ratio) = size_ratio(patch_size, old_size) else {
        return Classification::Rejected {
            reason: RejectReason::EmptySource,
            recommendation: RecommendedAction::FullDownload,
        };
    };
    if ratio > threshold {
        Classification::Rejected {
            reason: RejectReason::PatchTooLarge,
            recommendation: RecommendedAction::FullDownload,
        }
    } else {
        Classification::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_at_threshold_is_accepted() {
        // 500 / 100 = 5.0 exactly: strict comparison keeps it
        assert_eq!(classify(500, 100, 5.0), Classification::Accepted);
    }

    #[test]
    fn test_ratio_above_threshold_is_rejected() {
        assert_eq!(
            classify(501, 100, 5.0),
            Classification::Rejected {
                reason: RejectReason::PatchTooLarge,
                recommendation: RecommendedAction::FullDownload,
            }
        );
    }

    #[test]
    fn test_empty_source_is_rejected_with_dedicated_reason() {
        assert_eq!(
            classify(20, 0, 5.0),
            Classification::Rejected {
                reason: RejectReason::EmptySource,
                recommendation: RecommendedAction::FullDownload,
            }
        );
    }

    #[test]
    fn test_empty_source_never_divides_by_zero() {
        assert_eq!(size_ratio(0, 0), None);
        assert_eq!(size_ratio(11, 0), None);
    }

    #[test]
    fn test_threshold_is_configurable() {
        assert_eq!(classify(300, 100, 2.0), Classification::Rejected {
            reason: RejectReason::PatchTooLarge,
            recommendation: RecommendedAction::FullDownload,
        });
        assert_eq!(classify(300, 100, 5.0), Classification::Accepted);
    }
}
