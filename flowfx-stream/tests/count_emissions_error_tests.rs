// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use flowfx_core::{FlowError, IntoStreamItems, StreamItem};
use flowfx_stream::{CountEmissionsExt, CountObserver};
use flowfx_test_utils::{
    assert_stream_ended, next_item, next_value, test_channel, test_channel_with_errors,
};
use futures::{stream, StreamExt};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_error_count_reports_values_forwarded_before_error() -> anyhow::Result<()> {
    // Arrange: the 10/x scenario; division by the third input raises.
    let error_count = Arc::new(Mutex::new(None));
    let sink = error_count.clone();
    let complete_fired = Arc::new(Mutex::new(false));
    let complete_sink = complete_fired.clone();
    let counted = stream::iter([1, 2, 0, 3])
        .map(|x| {
            if x == 0 {
                StreamItem::Error(FlowError::stream_error("division by zero"))
            } else {
                StreamItem::Value(10 / x)
            }
        })
        .count_emissions(
            CountObserver::new()
                .on_error(move |n| {
                    *sink.lock().unwrap() = Some(n);
                    Ok(())
                })
                .on_complete(move |_| {
                    *complete_sink.lock().unwrap() = true;
                    Ok(())
                }),
        );

    // Act
    let items: Vec<_> = counted.collect().await;

    // Assert: two successful divisions, then the error; complete never fires.
    assert_eq!(items.len(), 3);
    assert!(items[2].is_error());
    assert_eq!(*error_count.lock().unwrap(), Some(2));
    assert!(!*complete_fired.lock().unwrap());
    Ok(())
}

#[tokio::test]
async fn test_failing_next_callback_terminates_with_derived_error() -> anyhow::Result<()> {
    // Arrange: the callback fails on the second value.
    let forwarded = Arc::new(Mutex::new(Vec::new()));
    let sink = forwarded.clone();
    let error_count = Arc::new(Mutex::new(None));
    let error_sink = error_count.clone();
    let (tx, source) = test_channel::<&str>();
    let mut counted = source.count_emissions(
        CountObserver::new()
            .on_next(|n| {
                if n < 2 {
                    Ok(())
                } else {
                    Err(FlowError::stream_error("observer refused"))
                }
            })
            .on_error(move |n| {
                *error_sink.lock().unwrap() = Some(n);
                Ok(())
            }),
    );

    // Act
    tx.send("Alpha")?;
    tx.send("Beta")?;
    tx.send("Gamma")?;
    if let StreamItem::Value(v) = next_item(&mut counted, 500).await {
        sink.lock().unwrap().push(v);
    }
    let second = next_item(&mut counted, 500).await;

    // Assert: the counted-but-failed value is suppressed, the stream errors,
    // and no further value is forwarded.
    assert_eq!(*forwarded.lock().unwrap(), vec!["Alpha"]);
    match second {
        StreamItem::Error(e) => assert!(e.to_string().contains("observer refused")),
        StreamItem::Value(v) => panic!("expected error, got value {v:?}"),
    }
    assert_eq!(*error_count.lock().unwrap(), Some(2));
    assert_stream_ended(&mut counted, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_failing_complete_callback_turns_completion_into_error() -> anyhow::Result<()> {
    // Arrange
    let error_count = Arc::new(Mutex::new(None));
    let error_sink = error_count.clone();
    let mut counted = stream::iter([1, 2]).into_items().count_emissions(
        CountObserver::new()
            .on_complete(|_| Err(FlowError::stream_error("completion refused")))
            .on_error(move |n| {
                *error_sink.lock().unwrap() = Some(n);
                Ok(())
            }),
    );

    // Act
    assert_eq!(next_value(&mut counted, 500).await, 1);
    assert_eq!(next_value(&mut counted, 500).await, 2);
    let terminal = next_item(&mut counted, 500).await;

    // Assert: downstream sees an error instead of completion, the error
    // callback observed the final count, and the terminal is consumed.
    match terminal {
        StreamItem::Error(e) => assert!(e.to_string().contains("completion refused")),
        StreamItem::Value(v) => panic!("expected error, got value {v:?}"),
    }
    assert_eq!(*error_count.lock().unwrap(), Some(2));
    assert_stream_ended(&mut counted, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_failing_error_callback_supersedes_original_error() -> anyhow::Result<()> {
    // Arrange: last failure wins.
    let (tx, source) = test_channel_with_errors::<i32>();
    let mut counted = source.count_emissions(
        CountObserver::new().on_error(|_| Err(FlowError::stream_error("superseding failure"))),
    );

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(FlowError::stream_error("original failure")))?;
    assert_eq!(next_value(&mut counted, 500).await, 1);
    let terminal = next_item(&mut counted, 500).await;

    // Assert
    match terminal {
        StreamItem::Error(e) => assert!(e.to_string().contains("superseding failure")),
        StreamItem::Value(v) => panic!("expected error, got value {v:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_signals_after_terminal_are_dropped() -> anyhow::Result<()> {
    // Arrange: a non-conformant upstream keeps sending after its error.
    let counts = Arc::new(Mutex::new(Vec::new()));
    let sink = counts.clone();
    let (tx, source) = test_channel_with_errors::<i32>();
    let mut counted = source.do_on_next_count(move |n| sink.lock().unwrap().push(n));

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(FlowError::stream_error("boom")))?;
    tx.send(StreamItem::Value(2))?;
    tx.send(StreamItem::Value(3))?;
    assert_eq!(next_value(&mut counted, 500).await, 1);
    assert!(next_item(&mut counted, 500).await.is_error());

    // Assert: the late values never surface and are never counted.
    assert_stream_ended(&mut counted, 500).await;
    assert_eq!(*counts.lock().unwrap(), vec![1]);
    Ok(())
}

#[tokio::test]
async fn test_at_most_one_terminal_callback() -> anyhow::Result<()> {
    // Arrange
    let terminals = Arc::new(Mutex::new(Vec::new()));
    let complete_sink = terminals.clone();
    let error_sink = terminals.clone();
    let (tx, source) = test_channel_with_errors::<i32>();
    let mut counted = source.count_emissions(
        CountObserver::new()
            .on_complete(move |n| {
                complete_sink.lock().unwrap().push(("complete", n));
                Ok(())
            })
            .on_error(move |n| {
                error_sink.lock().unwrap().push(("error", n));
                Ok(())
            }),
    );

    // Act: error, then the upstream also ends.
    tx.send(StreamItem::Error(FlowError::stream_error("boom")))?;
    drop(tx);
    assert!(next_item(&mut counted, 500).await.is_error());
    assert_stream_ended(&mut counted, 500).await;
    assert_stream_ended(&mut counted, 500).await;

    // Assert: exactly one terminal callback fired.
    assert_eq!(*terminals.lock().unwrap(), vec![("error", 0)]);
    Ok(())
}

#[tokio::test]
async fn test_dropping_the_stream_fires_no_callbacks() -> anyhow::Result<()> {
    // Arrange
    let events = Arc::new(Mutex::new(Vec::<&str>::new()));
    let complete_sink = events.clone();
    let error_sink = events.clone();
    let (tx, source) = test_channel::<i32>();
    let mut counted = source.count_emissions(
        CountObserver::new()
            .on_complete(move |_| {
                complete_sink.lock().unwrap().push("complete");
                Ok(())
            })
            .on_error(move |_| {
                error_sink.lock().unwrap().push("error");
                Ok(())
            }),
    );

    // Act: consume one value, then cancel by dropping.
    tx.send(1)?;
    assert_eq!(next_value(&mut counted, 500).await, 1);
    drop(counted);
    tx.send(2).ok();

    // Assert
    assert!(events.lock().unwrap().is_empty());
    Ok(())
}
