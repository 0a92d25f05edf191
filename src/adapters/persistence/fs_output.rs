//! Implements OutputPort. Writes each generated text to a new timestamped file.
//! Analysis goes to `{analysis_dir}/common_differ_{ts}.txt`,
//! the composite article to `{output_dir}/newstrail_article_{ts}.txt`.

use crate::domain::{DomainError, OutputKind};
use crate::ports::OutputPort;
use crate::shared::time::timestamp;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File-system output store.
pub struct FsOutputStore {
    analysis_dir: PathBuf,
    output_dir: PathBuf,
}

impl FsOutputStore {
    pub fn new(analysis_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            analysis_dir: analysis_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    fn dir_for(&self, kind: OutputKind) -> &Path {
        match kind {
            OutputKind::Analysis => &self.analysis_dir,
            OutputKind::Composite => &self.output_dir,
        }
    }

    /// Target path for `kind` at the given timestamp.
    pub fn path_for(&self, kind: OutputKind, ts: &str) -> PathBuf {
        self.dir_for(kind)
            .join(format!("{}_{}.txt", kind.file_prefix(), ts))
    }
}

#[async_trait::async_trait]
impl OutputPort for FsOutputStore {
    async fn save(&self, kind: OutputKind, content: &str) -> Result<PathBuf, DomainError> {
        let dir = self.dir_for(kind);
        fs::create_dir_all(dir)
            .await
            .map_err(|e| DomainError::Io(format!("create {}: {}", dir.display(), e)))?;

        let path = self.path_for(kind, &timestamp());
        fs::write(&path, content)
            .await
            .map_err(|e| DomainError::Io(format!("write {}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            kind = %kind,
            bytes = content.len(),
            "output saved"
        );
        Ok(path)
    }
}
