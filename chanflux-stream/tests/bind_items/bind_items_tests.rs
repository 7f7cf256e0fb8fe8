// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chanflux_stream::{empty, just, BindItemsExt};
use chanflux_test_utils::{
    assert_stream_ended, collect_with_timeout, int_range, occurrences, repeat, unwrap_stream,
    BUFFER_SIZES, ELEMENT_COUNT,
};
use futures::stream;

#[tokio::test]
async fn test_bind_items_drains_every_opened_stream() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Arrange
        let source = int_range(buffer, 0, ELEMENT_COUNT);

        // Act
        let values =
            collect_with_timeout(source.bind_items(|x| repeat(0, x + 1, x + 1)), 5000).await;

        // Assert
        let counts = occurrences(&values);
        assert_eq!(values.len(), 5050);
        assert_eq!(counts.len(), ELEMENT_COUNT);
        for i in 1..=ELEMENT_COUNT {
            assert_eq!(counts[&i], i, "value {i} with buffer {buffer}");
        }
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_bind_items_drains_every_opened_stream_multi_threaded() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Arrange
        let source = int_range(buffer, 0, ELEMENT_COUNT);

        // Act
        let values =
            collect_with_timeout(source.bind_items(|x| repeat(0, x + 1, x + 1)), 5000).await;

        // Assert
        let counts = occurrences(&values);
        for i in 1..=ELEMENT_COUNT {
            assert_eq!(counts[&i], i, "value {i} with buffer {buffer}");
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_bind_items_calls_transform_once_per_item_in_order() -> anyhow::Result<()> {
    // Arrange
    let (seen_tx, seen_rx) = chanflux_core::channel::<usize>(ELEMENT_COUNT);

    // Act
    let merged = int_range(1, 0, ELEMENT_COUNT).bind_items(move |x| {
        seen_tx.try_send(x).ok();
        empty::<usize>()
    });
    let values = collect_with_timeout(merged, 1000).await;
    let seen = collect_with_timeout(seen_rx, 1000).await;

    // Assert
    assert!(values.is_empty());
    assert_eq!(seen, (0..ELEMENT_COUNT).collect::<Vec<_>>());

    Ok(())
}

#[tokio::test]
async fn test_bind_items_over_plain_stream() -> anyhow::Result<()> {
    // Arrange
    let words = stream::iter(vec!["one", "three"]);

    // Act
    let mut merged = words.bind_items(|w| just(w.len()));

    // Assert
    let first = unwrap_stream(&mut merged, 500).await;
    let second = unwrap_stream(&mut merged, 500).await;
    let mut lengths = vec![first, second];
    lengths.sort_unstable();
    assert_eq!(lengths, vec![3, 5]);
    assert_stream_ended(&mut merged, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_bind_items_closes_when_transform_panics() -> anyhow::Result<()> {
    // Arrange
    let source = int_range(1, 0, ELEMENT_COUNT);

    // Act
    let merged = source.bind_items(|x| {
        if x == 2 {
            panic!("transform failed on {x}");
        }
        just(x)
    });
    let mut values = collect_with_timeout(merged, 2000).await;
    values.sort_unstable();

    // Assert
    assert_eq!(values, vec![0, 1]);

    Ok(())
}
