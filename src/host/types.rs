use serde::{Deserialize, Serialize};

/// Stable reference to a note inside the host vault.
///
/// The path is vault-relative with forward slashes and is the only thing the
/// plugin ever persists about a note; the note's bytes stay owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRef {
    pub path: String,
}

impl NoteRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
