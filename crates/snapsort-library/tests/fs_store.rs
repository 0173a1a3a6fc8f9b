use std::fs;
use std::path::{Path, PathBuf};

use snapsort_library::{FsPhotoStore, PhotoStore, StorageError, FAVORITES_FILE};

fn still(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("pixels of {name}")).unwrap();
    path
}

#[test]
fn accept_copies_into_library_named_by_timestamp() {
    let inbox = tempfile::tempdir().unwrap();
    let library = tempfile::tempdir().unwrap();
    let source = still(inbox.path(), "capture.png");

    let mut store = FsPhotoStore::new(library.path().join("photos"));
    let entry = store.accept(&source).unwrap();

    assert_eq!(
        entry.storage_uri,
        library.path().join("photos").join(format!("{}.jpg", entry.id))
    );
    assert_eq!(entry.id, entry.created_at.timestamp_millis().to_string());
    assert!(!entry.is_favorite);
    assert!(source.exists(), "the original stays where it was captured");
    assert_eq!(
        fs::read_to_string(&entry.storage_uri).unwrap(),
        "pixels of capture.png"
    );
}

#[test]
fn rapid_accepts_get_unique_ids_and_list_newest_first() {
    let inbox = tempfile::tempdir().unwrap();
    let library = tempfile::tempdir().unwrap();
    let mut store = FsPhotoStore::new(library.path());

    let ids: Vec<String> = (0..5)
        .map(|i| {
            let source = still(inbox.path(), &format!("{i}.jpg"));
            store.accept(&source).unwrap().id
        })
        .collect();

    let listed: Vec<String> = store.list().unwrap().into_iter().map(|e| e.id).collect();
    let mut expected = ids.clone();
    expected.reverse();
    assert_eq!(listed, expected);
}

#[test]
fn accept_rejects_missing_source() {
    let library = tempfile::tempdir().unwrap();
    let mut store = FsPhotoStore::new(library.path());
    let result = store.accept(&library.path().join("ghost.jpg"));
    assert!(matches!(result, Err(StorageError::InvalidSource { .. })));
}

#[test]
fn list_skips_non_images_and_falls_back_to_mtime() {
    let library = tempfile::tempdir().unwrap();
    still(library.path(), "1000.jpg");
    still(library.path(), "2000.jpeg");
    still(library.path(), "holiday.png");
    still(library.path(), "readme.txt");

    let mut store = FsPhotoStore::new(library.path());
    let entries = store.list().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();

    // The non-numeric stem takes its mtime, which is far newer than 1970.
    assert_eq!(ids, vec!["holiday", "2000", "1000"]);
    assert_eq!(entries[2].created_at.timestamp_millis(), 1000);
}

#[test]
fn list_reports_one_entry_per_id() {
    let library = tempfile::tempdir().unwrap();
    still(library.path(), "123.png");
    still(library.path(), "123.jpg");
    still(library.path(), "456.jpeg");

    let mut store = FsPhotoStore::new(library.path());
    let entries = store.list().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();

    assert_eq!(ids, vec!["456", "123"]);
    assert_eq!(entries[1].storage_uri, library.path().join("123.jpg"));
}

#[test]
fn reject_is_idempotent_and_clears_favorite() {
    let library = tempfile::tempdir().unwrap();
    still(library.path(), "1000.jpg");
    still(library.path(), "2000.jpg");

    let mut store = FsPhotoStore::new(library.path());
    assert!(store.toggle_favorite("1000").unwrap());
    store.reject("1000").unwrap();
    store.reject("1000").unwrap();

    let remaining: Vec<String> = store.list().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec!["2000".to_owned()]);

    let index = fs::read_to_string(library.path().join(FAVORITES_FILE)).unwrap();
    assert!(!index.contains("1000"));
}

#[test]
fn favorites_survive_a_new_store_instance() {
    let library = tempfile::tempdir().unwrap();
    still(library.path(), "1000.jpg");
    still(library.path(), "2000.jpg");

    {
        let mut store = FsPhotoStore::new(library.path());
        assert!(store.toggle_favorite("2000").unwrap());
    }

    let mut store = FsPhotoStore::new(library.path());
    let entry = store.get("2000").unwrap();
    assert!(entry.is_favorite);
    assert!(!store.get("1000").unwrap().is_favorite);
    assert!(!store.toggle_favorite("2000").unwrap());
}

#[test]
fn unknown_ids_are_not_found() {
    let library = tempfile::tempdir().unwrap();
    let mut store = FsPhotoStore::new(library.path());
    assert!(matches!(
        store.toggle_favorite("42"),
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(store.get("42"), Err(StorageError::NotFound { .. })));
}
