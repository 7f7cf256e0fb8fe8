// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::async_std::helpers::{collect_within, sleep_ms, within};
use chanflux_core::{CancellationToken, OUTPUT_CAPACITY};
use chanflux_stream::{just, BindItemsExt, FlattenItemsExt, MapItemsExt};
use chanflux_test_utils::{infinite, int_range, occurrences, repeat, BUFFER_SIZES, ELEMENT_COUNT};
use futures::StreamExt;

#[async_std::test]
async fn test_flatten_items_drains_every_inner_stream() {
    for buffer in BUFFER_SIZES {
        // Arrange
        let nested = int_range(buffer, 0, ELEMENT_COUNT).map_items(|x| repeat(0, x + 1, x + 1));

        // Act
        let values = collect_within(nested.flatten_items(), 5000).await;

        // Assert
        let counts = occurrences(&values);
        assert_eq!(values.len(), ELEMENT_COUNT * (ELEMENT_COUNT + 1) / 2);
        for i in 1..=ELEMENT_COUNT {
            assert_eq!(counts[&i], i, "value {i} with buffer {buffer}");
        }
    }
}

#[async_std::test]
async fn test_bind_items_chained_twice() {
    for buffer in BUFFER_SIZES {
        // Arrange
        let source = int_range(buffer, 0, ELEMENT_COUNT);

        // Act
        let chained = source
            .bind_items(move |x| repeat(buffer, x, 2))
            .bind_items(|x| just(x * 10));
        let values = collect_within(chained, 5000).await;

        // Assert
        let counts = occurrences(&values);
        assert_eq!(values.len(), 2 * ELEMENT_COUNT);
        for i in 0..ELEMENT_COUNT {
            assert_eq!(counts[&(i * 10)], 2, "value {i} with buffer {buffer}");
        }
    }
}

#[async_std::test]
async fn test_bind_items_until_stops_after_cancellation() {
    for buffer in BUFFER_SIZES {
        // Arrange
        let cancel_at = fastrand::usize(1..=ELEMENT_COUNT / 4);
        let token = CancellationToken::new();
        let mut merged = int_range(buffer, 0, ELEMENT_COUNT).bind_items_until(token.clone(), just);

        // Act
        let mut count = 0;
        within(
            async {
                while merged.next().await.is_some() {
                    count += 1;
                    if count == cancel_at {
                        token.cancel();
                    }
                }
            },
            5000,
        )
        .await;

        // Assert
        assert!(count >= cancel_at, "count {count} below {cancel_at}");
        assert!(count < ELEMENT_COUNT, "count {count} with buffer {buffer}");
    }
}

#[async_std::test]
async fn test_flatten_items_until_closes_while_consumer_is_idle() {
    // Arrange
    let token = CancellationToken::new();
    let mut merged = int_range(1, 0, 10)
        .map_items(|_| infinite(1, 1_u8))
        .flatten_items_until(token.clone());
    assert_eq!(within(merged.next(), 1000).await, Some(1));

    // Act
    sleep_ms(100).await;
    token.cancel();
    sleep_ms(100).await;
    let leftover = collect_within(merged, 2000).await;

    // Assert
    assert!(leftover.len() <= OUTPUT_CAPACITY, "leftover {}", leftover.len());
}
