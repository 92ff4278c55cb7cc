//! FAQ corpus loading.
//!
//! The corpus is a JSON array of entries seeded from `seed/faq.json` (or the
//! `FAQ_FILE` env var) and loaded once at startup; load failures are fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// One FAQ entry as stored in the seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub section: String,
    /// Link to the canonical source document; empty when none exists.
    #[serde(default)]
    pub url: String,
}

/// Errors loading the FAQ corpus.
#[derive(Debug, thiserror::Error)]
pub enum FaqError {
    #[error("failed to read FAQ file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse FAQ file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load the FAQ corpus from a JSON file.
///
/// # Errors
///
/// Returns [`FaqError`] when the file cannot be read or is not a JSON array
/// of FAQ entries.
pub fn load_faq(path: &Path) -> Result<Vec<FaqEntry>, FaqError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| FaqError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FaqError::Parse { path: display, source })
}
