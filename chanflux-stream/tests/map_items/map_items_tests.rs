// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chanflux_core::{CancellationToken, ChanfluxError, Maybe};
use chanflux_stream::MapItemsExt;
use chanflux_test_utils::{
    assert_stream_ended, collect_with_timeout, int_range, string_int_range, unwrap_stream,
    BUFFER_SIZES, ELEMENT_COUNT,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::timeout;

fn double(x: usize) -> usize {
    x * 2
}

#[tokio::test]
async fn test_map_items_preserves_order_and_count() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Act
        let values =
            collect_with_timeout(int_range(buffer, 0, ELEMENT_COUNT).map_items(double), 2000)
                .await;

        // Assert
        assert_eq!(values, (0..ELEMENT_COUNT).map(double).collect::<Vec<_>>());
    }

    Ok(())
}

#[tokio::test]
async fn test_map_items_with_fallible_transform() -> anyhow::Result<()> {
    // Arrange
    let source = string_int_range(1, 0, 3).map_items(|s| s + "x");

    // Act
    let mut parsed = source.map_items(|s| {
        Maybe::from(s.trim_end_matches('x').parse::<u8>().map_err(ChanfluxError::user_error))
    });

    // Assert
    for expected in 0..3 {
        let item = unwrap_stream(&mut parsed, 500).await;
        assert_eq!(item.ok(), Some(expected));
    }
    assert_stream_ended(&mut parsed, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_map_items_carries_errors_as_values() -> anyhow::Result<()> {
    // Arrange
    let source = string_int_range(1, 9, 2).map_items(|s| s.replace('1', "one"));

    // Act
    let parsed = source.map_items(|s| {
        Maybe::from(s.parse::<u8>().map_err(ChanfluxError::user_error))
    });
    let values = collect_with_timeout(parsed, 1000).await;

    // Assert
    assert_eq!(values.len(), 2);
    assert!(values[0].is_value());
    assert!(values[1].is_error());

    Ok(())
}

#[tokio::test]
async fn test_map_items_until_without_cancellation() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Arrange
        let token = CancellationToken::new();

        // Act
        let mapped = int_range(buffer, 0, ELEMENT_COUNT).map_items_until(token, double);
        let values = collect_with_timeout(mapped, 2000).await;

        // Assert
        assert_eq!(values, (0..ELEMENT_COUNT).map(double).collect::<Vec<_>>());
    }

    Ok(())
}

#[tokio::test]
async fn test_map_items_until_stops_after_cancellation() -> anyhow::Result<()> {
    for buffer in BUFFER_SIZES {
        // Arrange
        let cancel_at = fastrand::usize(1..=ELEMENT_COUNT / 4);
        let token = CancellationToken::new();
        let mut mapped =
            int_range(buffer, 0, ELEMENT_COUNT).map_items_until(token.clone(), double);

        // Act
        let mut count = 0;
        timeout(Duration::from_secs(5), async {
            while let Some(value) = mapped.next().await {
                assert_eq!(value, double(count));
                count += 1;
                if count == cancel_at {
                    token.cancel();
                }
            }
        })
        .await?;

        // Assert
        assert!(count >= cancel_at);
        assert!(count < ELEMENT_COUNT, "count {count} with buffer {buffer}");
    }

    Ok(())
}
