use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::api::error;

/// Persists accepted uploads under a flat directory, naming each file from
/// the wall-clock second it was handled.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Second-resolution local timestamp with a fixed `.stl` suffix. Two
    /// uploads handled within the same second produce the same name and the
    /// later write overwrites the earlier.
    fn storage_name(at: NaiveDateTime) -> String {
        format!("{}.stl", at.format("%Y%m%d-%H%M%S"))
    }

    async fn write_named(&self, name: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.dir.join(name), bytes).await
    }

    /// Write `bytes` under a freshly generated name, creating or overwriting
    /// as needed. The upload directory must already exist.
    pub async fn store(&self, bytes: &[u8]) -> Result<String, error::Error> {
        let name = Self::storage_name(Local::now().naive_local());
        self.write_named(&name, bytes).await?;
        Ok(name)
    }
}
