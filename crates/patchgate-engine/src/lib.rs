//! Patch decision engine: decide whether an update ships as a compact
//! line-based patch or as a full re-download.
//!
//! Given two versions of a text artifact, the engine computes a unified-diff
//! patch, compares its byte size against the source, and returns either an
//! accepted patch (with content fingerprints for both sides) or a structured
//! rejection telling the caller to fall back to a full download.
//!
//! # Architecture
//!
//! This is an **infrastructure** crate:
//! - Depends on: external crates only (similar, sha2, serde, ...)
//! - Used by: patchgate (CLI front-end)
//!
//! Front-ends hold no decision logic; they read inputs, call
//! [`PatchEngine::evaluate`] once, and serialize the [`PatchOutcome`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use patchgate_engine::{EngineConfig, PatchEngine, PatchOutcome};
//!
//! let engine = PatchEngine::new(EngineConfig::default());
//! let outcome = engine.evaluate(&old_text, &new_text, Some(out_dir))?;
//!
//! match outcome {
//!     PatchOutcome::Accepted { patch_file_path, stats, .. } => {
//!         // Ship the patch
//!     }
//!     PatchOutcome::Rejected { recommendation, .. } => {
//!         // Fall back per `recommendation`
//!     }
//! }
//! ```

mod applier;
mod config;
mod differ;
mod engine;
mod error;
mod formatter;
mod hash;
mod lines;
mod outcome;
mod threshold;

pub use applier::apply_edit_script;
pub use config::EngineConfig;
pub use differ::EditScript;
pub use engine::PatchEngine;
pub use error::EngineError;
pub use formatter::render_unified;
pub use hash::Fingerprint;
pub use lines::split_lines;
pub use outcome::{PatchOutcome, RecommendedAction, RejectReason, SizeStats};
pub use threshold::{classify, Classification};
