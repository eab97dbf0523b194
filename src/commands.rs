use std::sync::Arc;

use tokio::sync::Mutex;

use crate::destination::DestinationManager;
use crate::errors::NotedropResult;
use crate::host::traits::{Editor, Notifier, SettingsStore, Vault};
use crate::host::types::NoteRef;
use crate::settings::PluginSettings;

/// Command id/name pair as registered with the host command palette.
pub struct CommandDef {
    pub id: &'static str,
    pub name: &'static str,
}

pub const APPEND_SELECTION: CommandDef = CommandDef {
    id: "append-selection-to-the-destination-file",
    name: "Append selection to the destination file",
};

pub const APPEND_CURRENT_LINE: CommandDef = CommandDef {
    id: "append-current-line-to-the-destination-file",
    name: "Append current line to the destination file",
};

/// Title and icon for the contextual file-menu entry.
pub const SET_DESTINATION_MENU_TITLE: &str = "Set As Appending Destination";
pub const SET_DESTINATION_MENU_ICON: &str = "document";

/// Plugin entry point: loads settings once, owns the manager, and exposes the
/// three callbacks the host wires to its menu and command registrations.
pub struct NotedropPlugin {
    manager: Mutex<DestinationManager>,
    notifier: Arc<dyn Notifier>,
}

impl NotedropPlugin {
    /// Load settings and wire the manager. Unreadable stored settings fall
    /// back to defaults so the commands stay usable.
    pub async fn load(
        vault: Arc<dyn Vault>,
        store: Arc<dyn SettingsStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let settings = match PluginSettings::load(store.as_ref()).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "failed to load settings, starting from defaults");
                PluginSettings::default()
            }
        };
        let manager = DestinationManager::new(vault, store, notifier.clone(), settings);
        Self {
            manager: Mutex::new(manager),
            notifier,
        }
    }

    /// Click handler for the file-menu entry. The note was picked from the
    /// host's file menu and is trusted to exist at call time.
    pub async fn set_as_destination(&self, note: &NoteRef) -> NotedropResult<()> {
        self.manager.lock().await.set_destination(note).await
    }

    /// Callback for [`APPEND_SELECTION`].
    pub async fn append_selection(&self, editor: &dyn Editor) -> NotedropResult<()> {
        let selection = editor.selection();
        if selection.is_empty() {
            self.notifier.notify("No text selected.");
            return Ok(());
        }
        self.manager.lock().await.append(&selection).await
    }

    /// Callback for [`APPEND_CURRENT_LINE`].
    pub async fn append_current_line(&self, editor: &dyn Editor) -> NotedropResult<()> {
        let line = editor.current_line();
        if line.is_empty() {
            self.notifier.notify("No line to append.");
            return Ok(());
        }
        self.manager.lock().await.append(&line).await
    }

    /// Current destination path, if one is set.
    pub async fn destination(&self) -> Option<String> {
        self.manager
            .lock()
            .await
            .settings()
            .appending_destination
            .clone()
    }
}
