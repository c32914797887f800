use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{DocumentStore, StorageError};

/// Collision suffixes tried before giving up.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// [`DocumentStore`] backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let safe = !path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = numbered(path, attempt);
            let full = self.resolve(&candidate)?;
            // create_new refuses existing files.
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&full)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    tracing::debug!(path = %candidate, size = bytes.len(), "Stored document");
                    return Ok(candidate);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(StorageError::Io(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free name for '{path}'"),
        )))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let target = self.resolve(path)?;
        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `dir/report.pdf` with `n = 2` becomes `dir/report_2.pdf`; `n = 0` is the
/// path unchanged.
fn numbered(path: &str, n: u32) -> String {
    if n == 0 {
        return path.to_string();
    }
    let (dir, file) = match path.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, path),
    };
    let file = match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{n}.{ext}"),
        _ => format!("{file}_{n}"),
    };
    match dir {
        Some(dir) => format!("{dir}/{file}"),
        None => file,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn numbered_names() {
        assert_eq!(numbered("perdocs/1/plan.pdf", 0), "perdocs/1/plan.pdf");
        assert_eq!(numbered("perdocs/1/plan.pdf", 2), "perdocs/1/plan_2.pdf");
        assert_eq!(numbered("README", 1), "README_1");
        assert_eq!(numbered(".env", 1), ".env_1");
    }

    #[tokio::test]
    async fn put_writes_under_root_and_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        let first = store.put("perdocs/7/plan.pdf", b"one").await.unwrap();
        let second = store.put("perdocs/7/plan.pdf", b"two").await.unwrap();

        assert_eq!(first, "perdocs/7/plan.pdf");
        assert_eq!(second, "perdocs/7/plan_1.pdf");
        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"one");
        assert_eq!(std::fs::read(dir.path().join(&second)).unwrap(), b"two");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        let path = store.put("perdocs/1/a.txt", b"x").await.unwrap();
        store.delete(&path).await.unwrap();
        assert!(!dir.path().join(&path).exists());
        store.delete(&path).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_paths_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        assert_matches!(
            store.put("../escape.txt", b"x").await,
            Err(StorageError::InvalidPath(_))
        );
        assert_matches!(
            store.delete("/etc/passwd").await,
            Err(StorageError::InvalidPath(_))
        );
        assert_matches!(store.put("", b"x").await, Err(StorageError::InvalidPath(_)));
    }
}
