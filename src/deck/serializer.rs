//! Writing finished presentations to disk.

use crate::common::Result;
use crate::ooxml::pptx::{MutablePresentation, PresentationWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes a presentation once all slides have been added.
///
/// There are exactly two outcomes: the path that was written, or an error.
/// A failed write is not retried and a partial file is left as is.
pub struct DeckSerializer;

impl DeckSerializer {
    /// Build the complete .pptx package in memory.
    pub fn to_bytes(pres: &MutablePresentation) -> Result<Vec<u8>> {
        Ok(PresentationWriter::to_bytes(pres)?)
    }

    /// Write the package to `path`.
    pub fn write<P: AsRef<Path>>(pres: &MutablePresentation, path: P) -> Result<PathBuf> {
        let path = path.as_ref().to_path_buf();
        let bytes = Self::to_bytes(pres)?;
        std::fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), slides = pres.slide_count(), "wrote presentation");
        Ok(path)
    }

    /// Write the package to `path` without blocking the async runtime.
    ///
    /// The presentation is moved in, so no slide can be added after
    /// serialization starts. ZIP assembly runs on the blocking pool.
    pub async fn write_async(pres: MutablePresentation, path: impl Into<PathBuf>) -> Result<PathBuf> {
        let path = path.into();
        let slides = pres.slide_count();
        let bytes = tokio::task::spawn_blocking(move || Self::to_bytes(&pres)).await??;
        tokio::fs::write(&path, &bytes).await?;
        info!(path = %path.display(), bytes = bytes.len(), slides, "wrote presentation");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_write_sync() {
        let dir = tempfile::tempdir().unwrap();
        let mut pres = MutablePresentation::new();
        pres.add_slide().set_title("Only");
        let path = DeckSerializer::write(&pres, dir.path().join("one.pptx")).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn test_write_async() {
        let dir = tempfile::tempdir().unwrap();
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        let target = dir.path().join("async.pptx");
        let written = DeckSerializer::write_async(pres, target.clone()).await.unwrap();
        assert_eq!(written, target);
        assert!(target.exists());
    }

    #[tokio::test]
    async fn test_write_async_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("deck.pptx");
        let err = DeckSerializer::write_async(MutablePresentation::new(), target)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
