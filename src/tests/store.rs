use super::{ExpansionStore, JsonStore, MemoryStore};
use crate::tree::NodeKey;
use std::fs;
use std::path::Path;

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::default();
    let doc = Path::new("a.md");
    assert_eq!(store.load(doc).unwrap(), None);

    store.save(doc, &[NodeKey::new(1, 0)]).unwrap();
    assert_eq!(store.load(doc).unwrap(), Some(vec![NodeKey::new(1, 0)]));
}

#[test]
fn test_json_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("state.json");
    let doc = Path::new("notes/a.md");

    let mut store = JsonStore::open(&file);
    store
        .save(doc, &[NodeKey::new(1, 0), NodeKey::new(2, 3)])
        .unwrap();

    let contents = fs::read_to_string(&file).unwrap();
    assert!(contents.contains("\"item-2-3\""), "keys are stored as strings: {contents}");

    let reopened = JsonStore::open(&file);
    assert_eq!(
        reopened.load(doc).unwrap(),
        Some(vec![NodeKey::new(1, 0), NodeKey::new(2, 3)])
    );
    assert_eq!(reopened.load(Path::new("other.md")).unwrap(), None);
}

#[test]
fn test_corrupt_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("state.json");
    fs::write(&file, "{ not json").unwrap();

    let store = JsonStore::open(&file);
    assert_eq!(store.load(Path::new("a.md")).unwrap(), None);
    assert_eq!(store.file(), file.as_path());
}
