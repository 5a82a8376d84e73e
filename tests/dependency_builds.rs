//! Multi-build dependency cache scenarios.

use std::collections::BTreeSet;
use std::fs;
use std::time::SystemTime;

use docbridge::deps::{AccessTracker, DependencyCache};

fn doc_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn three_build_hash_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let foo = dir.path().join("foo.xml");
    fs::write(&foo, "<hash-state-1/>").unwrap();

    let mut cache = DependencyCache::new();

    // Build 1: no baseline, nothing stale; doc_foo reads foo.xml.
    assert!(cache.compute_stale_set(SystemTime::now()).is_empty());
    cache.record_access("doc_foo", &foo).unwrap();

    // Build 2: content changed (h1 != h2).
    fs::write(&foo, "<hash-state-2/>").unwrap();
    assert_eq!(
        cache.compute_stale_set(SystemTime::now()),
        doc_set(&["doc_foo"])
    );

    // Build 3: unchanged thereafter.
    assert!(cache.compute_stale_set(SystemTime::now()).is_empty());
}

#[test]
fn mtime_advance_without_content_change_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("a.xml");
    fs::write(&artifact, "<stable/>").unwrap();

    let mut cache = DependencyCache::new();
    cache.record_access("doc_a", &artifact).unwrap();
    cache.compute_stale_set(SystemTime::now());

    // Re-extraction produced byte-identical output; mtime moved, bytes
    // did not.
    fs::write(&artifact, "<stable/>").unwrap();
    assert!(cache.compute_stale_set(SystemTime::now()).is_empty());
}

#[test]
fn shared_artifact_marks_all_dependents() {
    let dir = tempfile::tempdir().unwrap();
    let shared = dir.path().join("group.xml");
    let only_b = dir.path().join("b.xml");
    fs::write(&shared, "1").unwrap();
    fs::write(&only_b, "1").unwrap();

    let mut cache = DependencyCache::new();
    cache.record_access("doc_a", &shared).unwrap();
    cache.record_access("doc_b", &shared).unwrap();
    cache.record_access("doc_b", &only_b).unwrap();
    cache.compute_stale_set(SystemTime::now());

    fs::write(&shared, "2").unwrap();
    assert_eq!(
        cache.compute_stale_set(SystemTime::now()),
        doc_set(&["doc_a", "doc_b"])
    );
}

#[test]
fn purged_document_never_reported_again() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("a.xml");
    fs::write(&artifact, "1").unwrap();

    let mut cache = DependencyCache::new();
    cache.record_access("doc_gone", &artifact).unwrap();
    cache.record_access("doc_kept", &artifact).unwrap();
    cache.compute_stale_set(SystemTime::now());

    cache.purge("doc_gone");

    fs::write(&artifact, "2").unwrap();
    assert_eq!(
        cache.compute_stale_set(SystemTime::now()),
        doc_set(&["doc_kept"])
    );
}

#[test]
fn trackers_merge_at_barrier() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.xml");
    let b = dir.path().join("b.xml");
    fs::write(&a, "1").unwrap();
    fs::write(&b, "1").unwrap();

    // Two documents render independently, each with its own tracker.
    let mut tracker_one = AccessTracker::new("doc_one");
    tracker_one.record(&a);
    let mut tracker_two = AccessTracker::new("doc_two");
    tracker_two.record(&a);
    tracker_two.record(&b);

    // Barrier: merge both into the shared cache.
    let mut cache = DependencyCache::new();
    cache.absorb(&tracker_one).unwrap();
    cache.absorb(&tracker_two).unwrap();
    cache.compute_stale_set(SystemTime::now());

    fs::write(&a, "2").unwrap();
    assert_eq!(
        cache.compute_stale_set(SystemTime::now()),
        doc_set(&["doc_one", "doc_two"])
    );
}

#[test]
fn state_survives_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("a.xml");
    let store = dir.path().join("docbridge-deps.json");
    fs::write(&artifact, "1").unwrap();

    // First build session.
    let mut cache = DependencyCache::load_from(&store).unwrap();
    cache.compute_stale_set(SystemTime::now());
    cache.record_access("doc_a", &artifact).unwrap();
    cache.save_to(&store).unwrap();

    // Second build session, new process.
    let mut cache = DependencyCache::load_from(&store).unwrap();
    fs::write(&artifact, "2").unwrap();
    assert_eq!(
        cache.compute_stale_set(SystemTime::now()),
        doc_set(&["doc_a"])
    );
}

#[test]
fn stale_computation_always_advances_baseline() {
    let mut cache = DependencyCache::new();
    assert_eq!(cache.last_build(), None);

    cache.compute_stale_set(SystemTime::now());
    let first = cache.last_build().unwrap();

    cache.compute_stale_set(SystemTime::now() + std::time::Duration::from_secs(5));
    let second = cache.last_build().unwrap();
    assert!(second >= first + 5);
}
