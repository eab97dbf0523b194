use async_trait::async_trait;

use crate::errors::NotedropResult;
use crate::host::types::NoteRef;

/// File store owned by the host. Only whole-content read and replace exist;
/// there is no append primitive.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Full contents of the note.
    async fn read(&self, note: &NoteRef) -> NotedropResult<String>;

    /// Replace the note's contents wholesale.
    async fn modify(&self, note: &NoteRef, contents: &str) -> NotedropResult<()>;

    /// Resolve a stored path back to a note. `None` when the path no longer
    /// names an existing note.
    async fn note_by_path(&self, path: &str) -> Option<NoteRef>;
}

/// Persistence primitive the host offers for the plugin's settings blob.
/// The blob is opaque to the host.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// `None` on first run, before anything was ever saved.
    async fn load_data(&self) -> NotedropResult<Option<serde_json::Value>>;

    async fn save_data(&self, data: &serde_json::Value) -> NotedropResult<()>;
}

/// Short transient status message shown to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Snapshot of the editor state handed to command callbacks.
pub trait Editor: Send + Sync {
    fn selection(&self) -> String;

    /// The line the cursor is on.
    fn current_line(&self) -> String;
}
