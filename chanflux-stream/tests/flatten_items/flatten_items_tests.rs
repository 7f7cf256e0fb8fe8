// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chanflux_core::{channel, Receiver};
use chanflux_stream::{empty, just, FlattenItemsExt, MapItemsExt};
use chanflux_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_with_timeout, int_range, occurrences,
    repeat, unwrap_stream, BUFFER_SIZES, ELEMENT_COUNT,
};
use futures::{stream, StreamExt};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_flatten_items_drains_every_inner_stream() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Arrange
        let nested = int_range(buffer, 0, ELEMENT_COUNT).map_items(|x| repeat(0, x + 1, x + 1));

        // Act
        let values = collect_with_timeout(nested.flatten_items(), 5000).await;

        // Assert
        let counts = occurrences(&values);
        assert_eq!(values.len(), ELEMENT_COUNT * (ELEMENT_COUNT + 1) / 2);
        assert_eq!(counts.len(), ELEMENT_COUNT);
        for i in 1..=ELEMENT_COUNT {
            assert_eq!(counts[&i], i, "value {i} with buffer {buffer}");
        }
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_flatten_items_drains_every_inner_stream_multi_threaded() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Arrange
        let nested = int_range(buffer, 0, ELEMENT_COUNT).map_items(|x| repeat(0, x + 1, x + 1));

        // Act
        let values = collect_with_timeout(nested.flatten_items(), 5000).await;

        // Assert
        let counts = occurrences(&values);
        for i in 1..=ELEMENT_COUNT {
            assert_eq!(counts[&i], i, "value {i} with buffer {buffer}");
        }
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_flatten_items_preserves_order_within_each_inner_stream() -> anyhow::Result<()> {
    // Arrange
    let inner_len = 50;
    let nested = int_range(1, 0, 10).map_items(move |base| int_range(1, base * 1000, inner_len));

    // Act
    let values = collect_with_timeout(nested.flatten_items(), 5000).await;

    // Assert
    assert_eq!(values.len(), 10 * inner_len);
    for base in 0..10 {
        let from_inner: Vec<usize> = values.iter().copied().filter(|v| v / 1000 == base).collect();
        let expected: Vec<usize> = (base * 1000..base * 1000 + inner_len).collect();
        assert_eq!(from_inner, expected);
    }

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_with_empty_outer_stream() -> anyhow::Result<()> {
    // Arrange
    let mut merged = empty::<Receiver<i32>>().flatten_items();

    // Act & Assert
    assert_stream_ended(&mut merged, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_skips_empty_inner_streams() -> anyhow::Result<()> {
    // Arrange
    let nested = stream::iter(vec![empty(), just(1), empty(), just(2), empty()]);

    // Act
    let mut values = collect_with_timeout(nested.flatten_items(), 1000).await;
    values.sort_unstable();

    // Assert
    assert_eq!(values, vec![1, 2]);

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_stays_open_while_an_inner_stream_is_open() -> anyhow::Result<()> {
    // Arrange
    let (tx, slow) = channel::<i32>(1);
    let mut merged = stream::iter(vec![slow, just(5)]).flatten_items();

    // Act & Assert
    assert_eq!(unwrap_stream(&mut merged, 500).await, 5);
    assert_no_element_emitted(&mut merged, 100).await;

    tx.send(6).await?;
    assert_eq!(unwrap_stream(&mut merged, 500).await, 6);

    drop(tx);
    assert_stream_ended(&mut merged, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_releases_source_when_consumer_drops() -> anyhow::Result<()> {
    // Arrange
    let (outer_tx, outer_rx) = channel::<Receiver<u8>>(1);
    let mut merged = outer_rx.flatten_items();
    outer_tx.send(just(1)).await?;
    assert_eq!(unwrap_stream(&mut merged, 500).await, 1);

    // Act
    drop(merged);

    // Assert
    timeout(Duration::from_secs(2), async {
        while outer_tx.send(just(1)).await.is_ok() {}
    })
    .await?;
    assert!(outer_tx.is_closed());

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_survives_a_panicking_inner_stream() -> anyhow::Result<()> {
    // Arrange
    let nested = stream::iter(0..3).map(|x| {
        stream::iter([x]).map(|y| {
            if y == 1 {
                panic!("inner stream {y} failed");
            }
            y
        })
    });

    // Act
    let mut values = collect_with_timeout(nested.flatten_items(), 2000).await;
    values.sort_unstable();

    // Assert
    assert_eq!(values, vec![0, 2]);

    Ok(())
}
