pub mod commands;
pub mod destination;
pub mod errors;
pub mod host;
pub mod settings;

pub use commands::NotedropPlugin;
pub use destination::DestinationManager;
pub use errors::{NotedropError, NotedropResult};
pub use host::types::NoteRef;
pub use settings::PluginSettings;
