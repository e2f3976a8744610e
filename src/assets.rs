//! Startup asset loading.
//!
//! The page embeds a portrait and offers a resume download. Both files are
//! read fully into memory once, before the first render, and the handles are
//! released immediately. A missing or unreadable file is fatal: the identity
//! block cannot render without them, and a broken page is worse than a clear
//! startup error.

use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;
use tracing::info;

/// Filename the browser receives for the resume download. Locale-independent:
/// both locales serve the same PDF.
pub const RESUME_FILENAME: &str = "resume.pdf";

/// MIME type for the resume download.
pub const RESUME_MIME: &str = "application/pdf";

const PROFILE_PIC_FILE: &str = "profile-pic.png";

/// Fatal startup error: a required asset is missing or unreadable.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("asset not found: {path}")]
    Missing { path: PathBuf },

    #[error("failed to read asset {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory copies of the page's two binary assets.
#[derive(Debug, Clone)]
pub struct AssetStore {
    /// Portrait as a `data:` URI, ready to drop into an `<img src>`.
    pub portrait_data_uri: String,
    /// Raw resume bytes, served verbatim on download.
    pub resume_pdf: Vec<u8>,
}

impl AssetStore {
    /// Read both assets from `dir` into memory.
    ///
    /// # Arguments
    /// * `dir` - The assets directory (contains `profile-pic.png` and
    ///   `resume.pdf`)
    ///
    /// # Returns
    /// * `Ok(AssetStore)` with both files fully loaded
    /// * `Err(AssetLoadError)` naming the first missing/unreadable file
    pub fn load(dir: &Path) -> Result<AssetStore, AssetLoadError> {
        let portrait = read_asset(&dir.join(PROFILE_PIC_FILE))?;
        let resume_pdf = read_asset(&dir.join(RESUME_FILENAME))?;

        info!(
            "Loaded assets: portrait {} bytes, resume {} bytes",
            portrait.len(),
            resume_pdf.len()
        );

        Ok(AssetStore {
            portrait_data_uri: format!("data:image/png;base64,{}", BASE64.encode(&portrait)),
            resume_pdf,
        })
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>, AssetLoadError> {
    if !path.exists() {
        return Err(AssetLoadError::Missing {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|source| AssetLoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
