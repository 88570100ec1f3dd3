use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;
use waypoints_core::{
    DrawCommand, FileStorage, MarkerStorage, ProjectedCoord, StoreConfig, Viewport, WaypointStore,
};

fn multiset(points: impl Iterator<Item = ProjectedCoord>) -> HashMap<ProjectedCoord, usize> {
    let mut counts = HashMap::new();
    for p in points {
        *counts.entry(p).or_insert(0) += 1;
    }
    counts
}

#[test]
fn persist_then_reopen_restores_every_marker() {
    let dir = tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("prefs"));

    let added = [
        ProjectedCoord::new(134_217_728, 89_478_485),
        ProjectedCoord::new(-12, 40),
        ProjectedCoord::new(-12, 40),
        ProjectedCoord::new(i32::MAX, i32::MIN),
    ];

    let mut store = WaypointStore::with_config(&config);
    assert_eq!(store.len(), 0);
    for p in added {
        store.add(p);
    }
    store.persist();

    let reopened = WaypointStore::with_config(&config);
    assert_eq!(multiset(reopened.live_markers()), multiset(added.into_iter()));
}

#[test]
fn dead_markers_stay_dead_and_are_not_saved() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path(), "markers.txt");
    let mut store = WaypointStore::open(storage.clone());

    store.add(ProjectedCoord::new(0, 0));
    store.add(ProjectedCoord::new(1000, 1000));
    assert!(store.delete_nearest(ProjectedCoord::new(1, 1), 0));

    store.add(ProjectedCoord::new(0, 0));
    store.delete_visible(ProjectedCoord::new(5000, 5000), 0, Viewport::new(10, 10));

    let mut drawn: Vec<DrawCommand> = Vec::new();
    store.draw(&mut drawn, ProjectedCoord::new(0, 0), 0, Viewport::new(100, 100));
    assert_eq!(drawn.len(), 2);
    assert_eq!(store.len(), 3);

    store.persist();
    let reopened = WaypointStore::open(storage);
    assert_eq!(reopened.len(), 2);
    assert_eq!(
        reopened.live_markers().collect::<Vec<_>>(),
        vec![ProjectedCoord::new(1000, 1000), ProjectedCoord::new(0, 0)]
    );
}

#[test]
fn corrupt_file_yields_empty_store() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("markers.txt"), "3\nabc\n5\n").unwrap();

    let store = WaypointStore::open(FileStorage::new(dir.path(), "markers.txt"));
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn truncated_file_yields_empty_store() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("markers.txt"), "2\n1\n2\n3\n").unwrap();

    let store = WaypointStore::open(FileStorage::new(dir.path(), "markers.txt"));
    assert_eq!(store.len(), 0);
}

#[test]
fn empty_store_persists_a_lone_zero() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("prefs"), "markers.txt");

    let store = WaypointStore::open(storage.clone());
    store.persist();

    assert_eq!(fs::read_to_string(storage.path()).unwrap(), "0\n");
    let reopened = WaypointStore::open(storage);
    assert_eq!(reopened.len(), 0);
}

#[test]
fn delete_all_then_persist_clears_the_file() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path(), "markers.txt");
    storage.save("2\n1\n1\n2\n2\n").unwrap();

    let mut store = WaypointStore::open(storage.clone());
    assert_eq!(store.live_count(), 2);
    store.delete_all();
    store.persist();

    assert_eq!(storage.load().unwrap().as_deref(), Some("0\n"));
}

#[test]
fn persist_failure_keeps_markers_in_memory() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("prefs");
    fs::write(&blocker, "in the way").unwrap();

    let mut store = WaypointStore::open(FileStorage::new(&blocker, "markers.txt"));
    store.add(ProjectedCoord::new(3, 4));
    store.persist();
    assert!(store.try_persist().is_err());
    assert_eq!(store.live_count(), 1);
}

#[test]
fn unreadable_file_yields_empty_store() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("markers.txt")).unwrap();

    let mut store = WaypointStore::open(FileStorage::new(dir.path(), "markers.txt"));
    assert_eq!(store.len(), 0);
    assert!(store.try_restore().is_err());
    assert_eq!(store.len(), 0);
}

#[test]
fn non_utf8_file_yields_empty_store() {
    let dir = tempdir().unwrap();
    let bytes = [b'1', b'\n', 0xff, 0xfe, b'\n', b'2', b'\n'];
    fs::write(dir.path().join("markers.txt"), bytes).unwrap();

    let store = WaypointStore::open(FileStorage::new(dir.path(), "markers.txt"));
    assert_eq!(store.len(), 0);
}

#[test]
fn restore_from_corrupt_file_discards_existing_markers() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path(), "markers.txt");
    storage.save("2\n1\n1\n2\n2\n").unwrap();

    let mut store = WaypointStore::open(storage.clone());
    store.add(ProjectedCoord::new(3, 3));
    assert_eq!(store.live_count(), 3);

    fs::write(storage.path(), "2\n1\n1\n2\n").unwrap();
    store.restore();

    assert_eq!(store.len(), 0);
    assert!(!store.has_live());
}
