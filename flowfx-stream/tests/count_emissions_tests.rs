// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use flowfx_core::{IntoStreamItems, StreamItem};
use flowfx_stream::{CountEmissionsExt, CountObserver};
use flowfx_test_utils::{assert_stream_ended, next_value, test_channel};
use futures::{stream, StreamExt};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_counts_each_forwarded_value_in_order() -> anyhow::Result<()> {
    // Arrange
    let counts = Arc::new(Mutex::new(Vec::new()));
    let sink = counts.clone();
    let (tx, source) = test_channel::<&str>();
    let mut counted = source.do_on_next_count(move |n| sink.lock().unwrap().push(n));

    // Act & Assert: values pass through unchanged, counts are 1-based.
    tx.send("Alpha")?;
    assert_eq!(next_value(&mut counted, 500).await, "Alpha");
    tx.send("Beta")?;
    assert_eq!(next_value(&mut counted, 500).await, "Beta");
    tx.send("Gamma")?;
    assert_eq!(next_value(&mut counted, 500).await, "Gamma");

    assert_eq!(*counts.lock().unwrap(), vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_complete_count_reports_final_total() -> anyhow::Result<()> {
    // Arrange
    let total = Arc::new(Mutex::new(None));
    let sink = total.clone();
    let mut counted = stream::iter(["Alpha", "Beta", "Gamma"])
        .into_items()
        .do_on_complete_count(move |n| *sink.lock().unwrap() = Some(n));

    // Act
    let values: Vec<_> = (&mut counted)
        .filter_map(|item| async { item.ok() })
        .collect()
        .await;

    // Assert
    assert_eq!(values, vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(*total.lock().unwrap(), Some(3));
    Ok(())
}

#[tokio::test]
async fn test_full_observer_sees_running_and_final_counts() -> anyhow::Result<()> {
    // Arrange
    let log = Arc::new(Mutex::new(Vec::new()));
    let next_log = log.clone();
    let complete_log = log.clone();
    let observer = CountObserver::new()
        .on_next(move |n| {
            next_log.lock().unwrap().push(format!("next {n}"));
            Ok(())
        })
        .on_complete(move |n| {
            complete_log.lock().unwrap().push(format!("complete {n}"));
            Ok(())
        });
    let (tx, source) = test_channel::<i32>();
    let mut counted = source.count_emissions(observer);

    // Act
    tx.send(10)?;
    tx.send(20)?;
    assert_eq!(next_value(&mut counted, 500).await, 10);
    assert_eq!(next_value(&mut counted, 500).await, 20);
    drop(tx);
    assert_stream_ended(&mut counted, 500).await;

    // Assert
    assert_eq!(
        *log.lock().unwrap(),
        vec!["next 1", "next 2", "complete 2"]
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_stream_completes_with_zero_count() -> anyhow::Result<()> {
    // Arrange
    let total = Arc::new(Mutex::new(None));
    let sink = total.clone();
    let (tx, source) = test_channel::<i32>();
    let mut counted = source.do_on_complete_count(move |n| *sink.lock().unwrap() = Some(n));

    // Act
    drop(tx);
    assert_stream_ended(&mut counted, 500).await;

    // Assert
    assert_eq!(*total.lock().unwrap(), Some(0));
    Ok(())
}

#[tokio::test]
async fn test_each_decorated_stream_counts_independently() -> anyhow::Result<()> {
    // Arrange: two pipelines sharing one callback sink.
    let counts = Arc::new(Mutex::new(Vec::new()));
    let first_sink = counts.clone();
    let second_sink = counts.clone();
    let mut first = stream::iter([1, 2, 3])
        .into_items()
        .do_on_next_count(move |n| first_sink.lock().unwrap().push(("first", n)));
    let mut second = stream::iter([4, 5])
        .into_items()
        .do_on_next_count(move |n| second_sink.lock().unwrap().push(("second", n)));

    // Act
    while first.next().await.is_some() {}
    while second.next().await.is_some() {}

    // Assert: the second pipeline restarts from 1.
    assert_eq!(
        *counts.lock().unwrap(),
        vec![("first", 1), ("first", 2), ("first", 3), ("second", 1), ("second", 2)]
    );
    Ok(())
}

#[tokio::test]
async fn test_errors_pass_through_untouched_values() -> anyhow::Result<()> {
    // Arrange: division pipeline where the third input raises.
    let processed = Arc::new(Mutex::new(Vec::new()));
    let seen = processed.clone();
    let counted = stream::iter([1, 2, 0, 3])
        .map(move |x| {
            seen.lock().unwrap().push(x);
            if x == 0 {
                StreamItem::Error(flowfx_core::FlowError::stream_error("division by zero"))
            } else {
                StreamItem::Value(10 / x)
            }
        })
        .do_on_next_count(|_| {});

    // Act
    let items: Vec<_> = counted.collect().await;

    // Assert: 10/1 and 10/2 forwarded, then the error; the trailing input
    // is never pulled through the pipeline.
    assert_eq!(items[0].clone().ok(), Some(10));
    assert_eq!(items[1].clone().ok(), Some(5));
    assert!(items[2].is_error());
    assert_eq!(items.len(), 3);
    assert_eq!(*processed.lock().unwrap(), vec![1, 2, 0]);
    Ok(())
}
