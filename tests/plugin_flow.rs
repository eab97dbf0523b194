use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use notedrop::commands::NotedropPlugin;
use notedrop::host::fs::{DirVault, JsonDataStore};
use notedrop::host::memory::{RecordingNotifier, StaticEditor};
use notedrop::host::types::NoteRef;

async fn open_plugin(vault_root: &Path) -> (NotedropPlugin, Arc<RecordingNotifier>) {
    let vault = Arc::new(DirVault::new(vault_root));
    let store = Arc::new(JsonDataStore::new(
        vault_root.join(".notedrop").join("data.json"),
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let plugin = NotedropPlugin::load(vault, store, notifier.clone()).await;
    (plugin, notifier)
}

#[tokio::test]
async fn destination_survives_restart_and_appends_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("inbox.md"), "Hello").unwrap();

    {
        let (plugin, notifier) = open_plugin(dir.path()).await;
        assert_eq!(plugin.destination().await, None);

        plugin
            .set_as_destination(&NoteRef::new("inbox.md"))
            .await
            .unwrap();
        plugin
            .append_selection(&StaticEditor::new("World", ""))
            .await
            .unwrap();

        assert_eq!(
            notifier.messages(),
            vec![
                "Set inbox.md as appending destination.",
                "Text appended to file.",
            ]
        );
    }

    let contents = std::fs::read_to_string(dir.path().join("inbox.md")).unwrap();
    assert_eq!(contents, "Hello\nWorld");

    // Fresh plugin instance over the same vault, as after a host restart.
    let (plugin, _) = open_plugin(dir.path()).await;
    assert_eq!(plugin.destination().await.as_deref(), Some("inbox.md"));

    plugin
        .append_current_line(&StaticEditor::new("", "Again"))
        .await
        .unwrap();

    let contents = std::fs::read_to_string(dir.path().join("inbox.md")).unwrap();
    assert_eq!(contents, "Hello\nWorld\nAgain");
}

#[tokio::test]
async fn deleting_the_destination_surfaces_a_notice_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("inbox.md"), "Hello").unwrap();

    let (plugin, _) = open_plugin(dir.path()).await;
    plugin
        .set_as_destination(&NoteRef::new("inbox.md"))
        .await
        .unwrap();

    std::fs::remove_file(dir.path().join("inbox.md")).unwrap();

    let (plugin, notifier) = open_plugin(dir.path()).await;
    plugin
        .append_selection(&StaticEditor::new("orphan", ""))
        .await
        .unwrap();

    assert_eq!(notifier.messages(), vec!["Error: Could not find the file."]);
    assert!(!dir.path().join("inbox.md").exists());
}

#[tokio::test]
async fn never_configured_vault_appends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("inbox.md"), "Hello").unwrap();

    let (plugin, notifier) = open_plugin(dir.path()).await;
    plugin
        .append_selection(&StaticEditor::new("abc", ""))
        .await
        .unwrap();

    assert_eq!(notifier.messages(), vec!["No appending destination set."]);
    let contents = std::fs::read_to_string(dir.path().join("inbox.md")).unwrap();
    assert_eq!(contents, "Hello");
    // Nothing was ever saved either.
    assert!(!dir.path().join(".notedrop").join("data.json").exists());
}
