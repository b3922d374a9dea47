//! Delivery of the exported artifact.

use crate::errors::{DeckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const HTML_MIME_TYPE: &str = "text/html";

/// Something that can hand a finished document to the user.
///
/// In a browser this is a blob download. Natively it is a file on disk.
pub trait ArtifactSink {
    fn deliver(&mut self, filename: &str, mime_type: &str, contents: &str) -> Result<()>;
}

/// Writes artifacts into a directory.
///
/// Contents go to a hidden temp file first and are renamed into place, so a
/// failed write never leaves a partial artifact under the final name.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl ArtifactSink for FileSink {
    fn deliver(&mut self, filename: &str, _mime_type: &str, contents: &str) -> Result<()> {
        let final_path = self.path_for(filename);
        let temp_path = self.dir.join(format!(".{}.partial", filename));

        if let Err(e) = fs::write(&temp_path, contents) {
            let _ = fs::remove_file(&temp_path);
            return Err(DeckError::Delivery(format!(
                "could not write {}: {}",
                temp_path.display(),
                e
            )));
        }
        if let Err(e) = fs::rename(&temp_path, &final_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(DeckError::Delivery(format!(
                "could not move artifact to {}: {}",
                final_path.display(),
                e
            )));
        }
        log::info!("Wrote {} ({} bytes)", final_path.display(), contents.len());
        Ok(())
    }
}

/// A delivered artifact held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: String,
    pub contents: String,
}

/// Keeps delivered artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub artifacts: Vec<Artifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn last(&self) -> Option<&Artifact> {
        self.artifacts.last()
    }

    pub fn into_last(mut self) -> Option<Artifact> {
        self.artifacts.pop()
    }
}

impl ArtifactSink for MemorySink {
    fn deliver(&mut self, filename: &str, mime_type: &str, contents: &str) -> Result<()> {
        self.artifacts.push(Artifact {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn file_sink_writes_final_file_only() {
        let dir = tempdir().expect("create temp dir");
        let mut sink = FileSink::new(dir.path());
        sink.deliver("deck.html", HTML_MIME_TYPE, "<p>hi</p>").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("deck.html")).unwrap(),
            "<p>hi</p>"
        );
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["deck.html"]);
    }

    #[test]
    fn file_sink_reports_missing_directory() {
        let dir = tempdir().expect("create temp dir");
        let missing = dir.path().join("missing");
        let mut sink = FileSink::new(&missing);
        let err = sink.deliver("deck.html", HTML_MIME_TYPE, "x").unwrap_err();
        assert!(matches!(err, DeckError::Delivery(_)));
        assert!(!missing.join("deck.html").exists());
    }

    #[test]
    fn memory_sink_keeps_artifacts() {
        let mut sink = MemorySink::new();
        sink.deliver("a.html", HTML_MIME_TYPE, "one").unwrap();
        sink.deliver("b.html", HTML_MIME_TYPE, "two").unwrap();
        assert_eq!(sink.artifacts.len(), 2);
        assert_eq!(sink.last().unwrap().contents, "two");
    }
}
