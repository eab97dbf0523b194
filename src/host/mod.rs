pub mod fs;
pub mod memory;
pub mod traits;
pub mod types;

pub use fs::{DirVault, JsonDataStore};
pub use traits::{Editor, Notifier, SettingsStore, Vault};
pub use types::NoteRef;
