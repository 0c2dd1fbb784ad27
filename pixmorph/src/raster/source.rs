use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{MorphError, MorphResult};

/// Where an input image comes from.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// An image file on disk.
    Path(PathBuf),
    /// Encoded image bytes already in memory.
    Bytes {
        /// Name used in logs and error messages.
        label: String,
        /// Encoded file contents (PNG, JPEG, ...).
        bytes: Arc<[u8]>,
    },
}

impl ImageSource {
    /// Source backed by a file path.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Source backed by in-memory encoded bytes.
    pub fn bytes(label: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes {
            label: label.into(),
            bytes: bytes.into(),
        }
    }

    /// Human-readable name of the source.
    pub fn label(&self) -> String {
        match self {
            Self::Path(p) => p.display().to_string(),
            Self::Bytes { label, .. } => label.clone(),
        }
    }

    pub(crate) async fn read(&self) -> MorphResult<Arc<[u8]>> {
        match self {
            Self::Path(p) => read_file(p)
                .map(Arc::from)
                .map_err(|e| MorphError::decode(format!("{e:#}"))),
            Self::Bytes { bytes, .. } => Ok(Arc::clone(bytes)),
        }
    }
}

fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read file '{}'", path.display()))
}
