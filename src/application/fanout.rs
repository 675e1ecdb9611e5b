//! Concurrent fan-out with best-effort partial results.
//!
//! [`fan_out`] runs one fetch per input item, all of them concurrently up to
//! [`FanoutPolicy::max_in_flight`]. Each item waits [`FanoutPolicy::settle_delay`]
//! after its fetch returns, success or not, before its slot is released.
//! Failed items are logged and dropped; they never cancel their siblings.
//!
//! With `max_in_flight >= items.len()` the whole batch completes in roughly
//! `max(latency) + settle_delay`.

use futures_util::future::join_all;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{Instrument, info, info_span, warn};

/// Scheduling knobs of a fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanoutPolicy {
    /// Pause applied after every fetch while the item still holds its slot.
    pub settle_delay: Duration,
    /// Maximum number of items fetching or settling at the same time.
    pub max_in_flight: usize,
}

impl FanoutPolicy {
    pub fn new(settle_delay: Duration, max_in_flight: usize) -> Self {
        Self {
            settle_delay,
            max_in_flight,
        }
    }
}

impl Default for FanoutPolicy {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), 48)
    }
}

/// Fetches every item concurrently and returns the successful values.
///
/// Results keep the relative order of `items`; failed items leave no gap.
/// Duplicated items are fetched once per occurrence.
///
/// # Examples
///
/// ```ignore
/// let details = fan_out(vec![440, 570], policy, |id| api.fetch_app_detail(id)).await;
/// assert!(details.len() <= 2);
/// ```
pub async fn fan_out<I, T, E, F, Fut>(items: Vec<I>, policy: FanoutPolicy, fetch: F) -> Vec<T>
where
    I: Clone + fmt::Display,
    E: fmt::Display,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let requested = items.len();
    let span = info_span!("fan_out", requested, max_in_flight = policy.max_in_flight);

    async move {
        let slots = Semaphore::new(policy.max_in_flight.max(1));
        let slots = &slots;
        let fetch = &fetch;

        let outcomes = join_all(items.into_iter().map(|item| async move {
            // The semaphore is never closed, so acquire only fails in theory.
            let _slot = slots.acquire().await.ok();
            let outcome = fetch(item.clone()).await;
            sleep(policy.settle_delay).await;
            (item, outcome)
        }))
        .await;

        let mut succeeded = Vec::with_capacity(requested);
        for (item, outcome) in outcomes {
            match outcome {
                Ok(value) => {
                    metrics::counter!("steam_fanout_items_total", "outcome" => "ok").increment(1);
                    succeeded.push(value);
                }
                Err(e) => {
                    metrics::counter!("steam_fanout_items_total", "outcome" => "failed")
                        .increment(1);
                    warn!(item = %item, error = %e, "Dropping failed fan-out item");
                }
            }
        }

        info!(succeeded = succeeded.len(), "Fan-out complete");
        succeeded
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_millis(1000);

    fn latency_for(id: u32) -> Duration {
        Duration::from_millis(50 * u64::from(id % 7) + 20)
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_successes_are_returned_in_input_order() {
        let ids: Vec<u32> = (1..=30).collect();

        let result = fan_out(ids.clone(), FanoutPolicy::new(DELAY, 64), |id| async move {
            sleep(latency_for(id)).await;
            Ok::<_, String>(id * 10)
        })
        .await;

        assert_eq!(result.len(), 30);
        assert_eq!(result, ids.iter().map(|id| id * 10).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_failure_is_dropped() {
        let ids: Vec<u32> = (1..=10).collect();

        let result = fan_out(ids, FanoutPolicy::new(DELAY, 64), |id| async move {
            if id == 4 {
                Err(format!("boom {id}"))
            } else {
                Ok(id)
            }
        })
        .await;

        assert_eq!(result.len(), 9);
        assert!(!result.contains(&4));
        for id in [1, 2, 3, 5, 6, 7, 8, 9, 10] {
            assert!(result.contains(&id));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_failures_yield_empty_result() {
        let result = fan_out(vec![1u32, 2, 3], FanoutPolicy::new(DELAY, 8), |id| async move {
            Err::<u32, _>(format!("failed {id}"))
        })
        .await;

        assert!(result.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_batch() {
        let result = fan_out(Vec::<u32>::new(), FanoutPolicy::default(), |id| async move {
            Ok::<_, String>(id)
        })
        .await;

        assert!(result.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicates_are_fetched_per_occurrence() {
        let calls = Arc::new(AtomicUsize::new(0));

        let result = fan_out(vec![440u32, 440, 570], FanoutPolicy::new(DELAY, 8), |id| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(id)
            }
        })
        .await;

        assert_eq!(result, vec![440, 440, 570]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_clock_is_bounded_by_slowest_item_plus_delay() {
        let ids: Vec<u32> = (1..=34).collect();
        let slowest = ids.iter().map(|id| latency_for(*id)).max().unwrap();
        let serial: Duration = ids.iter().map(|id| latency_for(*id) + DELAY).sum();

        let started = Instant::now();
        let result = fan_out(ids, FanoutPolicy::new(DELAY, 64), |id| async move {
            sleep(latency_for(id)).await;
            if id % 5 == 0 {
                Err(format!("upstream failure for {id}"))
            } else {
                Ok(id)
            }
        })
        .await;
        let elapsed = started.elapsed();

        assert_eq!(result.len(), 28);
        assert!(elapsed >= slowest + DELAY);
        assert!(elapsed < slowest + DELAY + Duration::from_millis(50));
        assert!(elapsed * 10 < serial);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_applies_after_failures_too() {
        let started = Instant::now();
        let _ = fan_out(vec![1u32], FanoutPolicy::new(DELAY, 1), |id| async move {
            Err::<u32, _>(format!("failed {id}"))
        })
        .await;

        assert!(started.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_max_in_flight_caps_concurrency() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let latency = Duration::from_millis(100);

        let started = Instant::now();
        let result = fan_out((0..6u32).collect(), FanoutPolicy::new(DELAY, 2), |id| {
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                sleep(latency).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok::<_, String>(id)
            }
        })
        .await;

        assert_eq!(result.len(), 6);
        assert_eq!(peak.load(Ordering::SeqCst), 2);
        // Three waves of two, each holding its slot for latency + delay.
        assert!(started.elapsed() >= (latency + DELAY) * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_max_in_flight_still_makes_progress() {
        let result = fan_out(vec![1u32, 2], FanoutPolicy::new(DELAY, 0), |id| async move {
            Ok::<_, String>(id)
        })
        .await;

        assert_eq!(result, vec![1, 2]);
    }
}
