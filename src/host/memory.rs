//! In-memory host implementations, used by the test suites in place of a
//! real note application.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{NotedropError, NotedropResult};
use crate::host::traits::{Editor, Notifier, SettingsStore, Vault};
use crate::host::types::NoteRef;

/// Vault holding notes in a map. Counts writes so tests can assert how many
/// times a note was rewritten.
#[derive(Default)]
pub struct MemVault {
    notes: Mutex<HashMap<String, String>>,
    writes: Mutex<u32>,
}

impl MemVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(self, path: &str, contents: &str) -> Self {
        self.notes
            .lock()
            .unwrap()
            .insert(path.to_string(), contents.to_string());
        self
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.notes.lock().unwrap().get(path).cloned()
    }

    pub fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl Vault for MemVault {
    async fn read(&self, note: &NoteRef) -> NotedropResult<String> {
        self.contents(&note.path)
            .ok_or_else(|| NotedropError::Vault(format!("no note at '{}'", note.path)))
    }

    async fn modify(&self, note: &NoteRef, contents: &str) -> NotedropResult<()> {
        self.notes
            .lock()
            .unwrap()
            .insert(note.path.clone(), contents.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    async fn note_by_path(&self, path: &str) -> Option<NoteRef> {
        self.notes
            .lock()
            .unwrap()
            .contains_key(path)
            .then(|| NoteRef::new(path))
    }
}

/// Settings store keeping the blob in memory.
#[derive(Default)]
pub struct MemStore {
    data: Mutex<Option<serde_json::Value>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            data: Mutex::new(Some(data)),
        }
    }

    pub fn data(&self) -> Option<serde_json::Value> {
        self.data.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettingsStore for MemStore {
    async fn load_data(&self) -> NotedropResult<Option<serde_json::Value>> {
        Ok(self.data())
    }

    async fn save_data(&self, data: &serde_json::Value) -> NotedropResult<()> {
        *self.data.lock().unwrap() = Some(data.clone());
        Ok(())
    }
}

/// Notifier that records every notice it was asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Editor with a fixed selection and current line.
pub struct StaticEditor {
    pub selection: String,
    pub current_line: String,
}

impl StaticEditor {
    pub fn new(selection: &str, current_line: &str) -> Self {
        Self {
            selection: selection.to_string(),
            current_line: current_line.to_string(),
        }
    }
}

impl Editor for StaticEditor {
    fn selection(&self) -> String {
        self.selection.clone()
    }

    fn current_line(&self) -> String {
        self.current_line.clone()
    }
}
