use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::NotedropResult;
use crate::host::traits::SettingsStore;

/// Plugin settings, persisted through the host's [`SettingsStore`].
///
/// Wire shape: `{ "appendingDestination": string | null }`. Keys this version
/// does not know about land in `extra` and are written back verbatim, so a
/// blob produced by a newer build survives a round trip through this one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Vault path of the current appending destination. At most one is
    /// tracked; setting a new one overwrites the previous without warning.
    #[serde(rename = "appendingDestination", default)]
    pub appending_destination: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PluginSettings {
    /// Stored values merged over defaults: an absent blob or absent key falls
    /// back to the default, present keys always win.
    pub async fn load(store: &dyn SettingsStore) -> NotedropResult<Self> {
        let settings = match store.load_data().await? {
            Some(data) => serde_json::from_value(data)?,
            None => Self::default(),
        };
        tracing::debug!(destination = ?settings.appending_destination, "settings loaded");
        Ok(settings)
    }

    pub async fn save(&self, store: &dyn SettingsStore) -> NotedropResult<()> {
        let data = serde_json::to_value(self)?;
        store.save_data(&data).await
    }
}
