//! Implements ArticleSourcePort. One article per `*.txt` file in a folder.
//! Source identifier = file name without extension. Files are visited in name order.

use crate::domain::{Article, ArticleLoad, DomainError, SkippedFile};
use crate::ports::ArticleSourcePort;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Extension (without dot) of files treated as articles.
pub const ARTICLE_EXTENSION: &str = "txt";

/// File-system article source.
pub struct FsArticleSource {
    folder: PathBuf,
}

impl FsArticleSource {
    pub fn new(folder: impl AsRef<Path>) -> Self {
        Self {
            folder: folder.as_ref().to_path_buf(),
        }
    }

    fn is_article(path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(ARTICLE_EXTENSION)
    }

    /// Collect matching file paths, sorted by name.
    async fn article_paths(&self) -> Result<Option<Vec<PathBuf>>, DomainError> {
        let mut entries = match fs::read_dir(&self.folder).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DomainError::Io(e.to_string())),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !Self::is_article(&path) {
                continue;
            }
            // metadata follows symlinks, so a link to a folder is not an article
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => paths.push(path),
                Ok(_) => debug!(path = %path.display(), "not a regular file, ignoring"),
                Err(e) => warn!(path = %path.display(), error = %e, "cannot stat entry"),
            }
        }
        paths.sort();
        Ok(Some(paths))
    }

    async fn read_article(path: &Path) -> Result<Article, String> {
        let bytes = fs::read(path).await.map_err(|e| e.to_string())?;
        let text = String::from_utf8(bytes).map_err(|e| format!("not valid UTF-8: {}", e))?;
        let source = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Article { source, text })
    }
}

#[async_trait::async_trait]
impl ArticleSourcePort for FsArticleSource {
    fn label(&self) -> String {
        self.folder.display().to_string()
    }

    async fn ensure_available(&self) -> Result<(), DomainError> {
        match fs::metadata(&self.folder).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(DomainError::ResourceNotFound(
                self.folder.display().to_string(),
            )),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DomainError::ResourceNotFound(
                self.folder.display().to_string(),
            )),
            Err(e) => Err(DomainError::Io(format!(
                "cannot access {}: {}",
                self.folder.display(),
                e
            ))),
        }
    }

    async fn load_articles(&self) -> Result<ArticleLoad, DomainError> {
        let Some(paths) = self.article_paths().await? else {
            warn!(folder = %self.folder.display(), "articles folder not found");
            return Ok(ArticleLoad::default());
        };

        let mut load = ArticleLoad::default();
        for path in paths {
            match Self::read_article(&path).await {
                Ok(article) => {
                    debug!(source = %article.source, len = article.text.len(), "article loaded");
                    load.articles.push(article);
                }
                Err(reason) => {
                    warn!(path = %path.display(), error = %reason, "skipping unreadable article");
                    load.skipped.push(SkippedFile { path, reason });
                }
            }
        }

        info!(
            folder = %self.folder.display(),
            articles = load.article_count(),
            skipped = load.skipped.len(),
            "article scan complete"
        );
        Ok(load)
    }
}
