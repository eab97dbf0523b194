use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::errors::{NotedropError, NotedropResult};
use crate::host::traits::{SettingsStore, Vault};
use crate::host::types::NoteRef;

/// Vault backed by a plain directory. Note paths are relative to the root.
pub struct DirVault {
    root: PathBuf,
}

impl DirVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> NotedropResult<PathBuf> {
        let rel = Path::new(path);
        let escapes = rel.is_absolute()
            || rel.components().any(|c| matches!(c, Component::ParentDir));
        if escapes {
            return Err(NotedropError::Vault(format!(
                "path '{path}' escapes the vault root"
            )));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl Vault for DirVault {
    async fn read(&self, note: &NoteRef) -> NotedropResult<String> {
        let path = self.resolve(&note.path)?;
        Ok(tokio::fs::read_to_string(&path).await?)
    }

    async fn modify(&self, note: &NoteRef, contents: &str) -> NotedropResult<()> {
        let path = self.resolve(&note.path)?;
        tokio::fs::write(&path, contents).await?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "note rewritten");
        Ok(())
    }

    async fn note_by_path(&self, path: &str) -> Option<NoteRef> {
        let resolved = self.resolve(path).ok()?;
        match tokio::fs::metadata(&resolved).await {
            Ok(meta) if meta.is_file() => Some(NoteRef::new(path)),
            _ => None,
        }
    }
}

/// Settings blob stored as pretty-printed JSON at a fixed path
/// (the `data.json` convention).
pub struct JsonDataStore {
    path: PathBuf,
}

impl JsonDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsStore for JsonDataStore {
    async fn load_data(&self) -> NotedropResult<Option<serde_json::Value>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_data(&self, data: &serde_json::Value) -> NotedropResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, content).await?;
        tracing::debug!(path = %self.path.display(), "settings blob saved");
        Ok(())
    }
}
