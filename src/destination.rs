use std::sync::Arc;

use crate::errors::NotedropResult;
use crate::host::traits::{Notifier, SettingsStore, Vault};
use crate::host::types::NoteRef;
use crate::settings::PluginSettings;

/// Tracks the single appending destination and performs appends against it.
///
/// The manager only ever holds the destination's path; the note itself stays
/// owned and versioned by the host vault.
pub struct DestinationManager {
    vault: Arc<dyn Vault>,
    store: Arc<dyn SettingsStore>,
    notifier: Arc<dyn Notifier>,
    settings: PluginSettings,
}

impl DestinationManager {
    pub fn new(
        vault: Arc<dyn Vault>,
        store: Arc<dyn SettingsStore>,
        notifier: Arc<dyn Notifier>,
        settings: PluginSettings,
    ) -> Self {
        Self {
            vault,
            store,
            notifier,
            settings,
        }
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    /// Pin `note` as the appending destination, replacing any previous one.
    /// Settings are persisted before the confirmation notice goes out.
    pub async fn set_destination(&mut self, note: &NoteRef) -> NotedropResult<()> {
        self.settings.appending_destination = Some(note.path.clone());
        self.settings.save(self.store.as_ref()).await?;
        tracing::info!(path = %note.path, "appending destination set");
        self.notifier
            .notify(&format!("Set {} as appending destination.", note.path));
        Ok(())
    }

    /// Append `text` to the destination note.
    ///
    /// The caller guarantees `text` is non-empty. The join is a literal
    /// `"\n"`: a destination already ending in a newline gains a blank line.
    /// The whole note is read and rewritten; anything another writer did
    /// between the read and the write is lost (last writer wins).
    pub async fn append(&mut self, text: &str) -> NotedropResult<()> {
        let Some(path) = self.settings.appending_destination.clone() else {
            self.notifier.notify("No appending destination set.");
            return Ok(());
        };

        let Some(note) = self.vault.note_by_path(&path).await else {
            tracing::warn!(path = %path, "appending destination no longer resolves");
            self.notifier.notify("Error: Could not find the file.");
            return Ok(());
        };

        let contents = self.vault.read(&note).await?;
        let updated = format!("{contents}\n{text}");
        self.vault.modify(&note, &updated).await?;
        tracing::info!(path = %note.path, appended = text.len(), "text appended");
        self.notifier.notify("Text appended to file.");
        Ok(())
    }
}
