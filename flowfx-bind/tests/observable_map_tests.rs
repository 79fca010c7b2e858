// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use flowfx_bind::{MapChange, ObservableMap};
use flowfx_test_utils::assert_no_element_emitted;
use futures::StreamExt;
use std::collections::HashMap;

#[tokio::test]
async fn test_insert_emits_insertions() -> anyhow::Result<()> {
    // Arrange
    let map = ObservableMap::new();
    let mut insertions = map.insertions();

    // Act
    map.insert("alpha", 1);
    map.insert("beta", 2);

    // Assert
    assert_eq!(insertions.next().await, Some(("alpha", 1)));
    assert_eq!(insertions.next().await, Some(("beta", 2)));
    assert_eq!(map.get(&"alpha"), Some(1));
    assert_eq!(map.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_replacing_a_value_reports_removal_then_insertion() -> anyhow::Result<()> {
    // Arrange
    let map = ObservableMap::new();
    map.insert("alpha", 1);
    let mut changes = map.changes();

    // Act
    let replaced = map.insert("alpha", 2);

    // Assert
    assert_eq!(replaced, Some(1));
    assert_eq!(
        changes.next().await,
        Some(MapChange::Removed {
            key: "alpha",
            value: 1
        })
    );
    assert_eq!(
        changes.next().await,
        Some(MapChange::Inserted {
            key: "alpha",
            value: 2
        })
    );
    assert_eq!(map.get(&"alpha"), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_remove_emits_removals() -> anyhow::Result<()> {
    // Arrange
    let map = ObservableMap::from_map(HashMap::from([("alpha", 1), ("beta", 2)]));
    let mut removals = map.removals();

    // Act
    assert_eq!(map.remove(&"alpha"), Some(1));
    assert_eq!(map.remove(&"missing"), None);

    // Assert
    assert_eq!(removals.next().await, Some(("alpha", 1)));
    assert_no_element_emitted(&mut removals, 100).await;
    assert!(!map.contains_key(&"alpha"));
    assert_eq!(map.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_initial_contents_emit_no_changes() -> anyhow::Result<()> {
    // Arrange
    let map = ObservableMap::from_map(HashMap::from([("alpha", 1)]));

    // Act
    let mut changes = map.changes();

    // Assert
    assert_no_element_emitted(&mut changes, 100).await;
    assert_eq!(map.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_on_changed_emits_snapshots_after_each_mutation() -> anyhow::Result<()> {
    // Arrange
    let map = ObservableMap::new();
    let mut snapshots = map.on_changed();

    // Act
    map.insert("alpha", 1);
    map.insert("beta", 2);
    map.remove(&"alpha");

    // Assert
    assert_eq!(snapshots.next().await, Some(HashMap::from([("alpha", 1)])));
    assert_eq!(
        snapshots.next().await,
        Some(HashMap::from([("alpha", 1), ("beta", 2)]))
    );
    assert_eq!(snapshots.next().await, Some(HashMap::from([("beta", 2)])));
    Ok(())
}

#[tokio::test]
async fn test_replacement_events_carry_the_final_snapshot() -> anyhow::Result<()> {
    // Arrange
    let map = ObservableMap::new();
    map.insert("alpha", 1);
    let mut snapshots = map.on_changed();

    // Act: one mutation, two events, one resulting state.
    map.insert("alpha", 2);

    // Assert
    let expected = HashMap::from([("alpha", 2)]);
    assert_eq!(snapshots.next().await, Some(expected.clone()));
    assert_eq!(snapshots.next().await, Some(expected));
    Ok(())
}
