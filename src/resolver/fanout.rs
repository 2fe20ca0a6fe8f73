use std::future::Future;

use futures::StreamExt;
use futures::stream::FuturesUnordered;

/// Runs `f` over every input concurrently and returns the outputs in input order.
///
/// All futures are started before any is awaited. Each output is stored at
/// the index of the input that produced it, so completion order never leaks
/// into the result.
pub async fn fetch_indexed<I, F, Fut, T>(inputs: I, mut f: F) -> Vec<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = T>,
{
    let mut pending: FuturesUnordered<_> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let task = f(input);
            async move { (index, task.await) }
        })
        .collect();

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
        .take(pending.len())
        .collect();
    while let Some((index, output)) = pending.next().await {
        slots[index] = Some(output);
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_preserves_input_order_when_completion_is_reversed() {
        // Earlier inputs sleep longer, so they finish last.
        let out = fetch_indexed(vec![30u64, 20, 10, 0], |delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            delay
        })
        .await;
        assert_eq!(out, vec![30, 20, 10, 0]);
    }

    #[tokio::test]
    async fn test_runs_concurrently() {
        let start = std::time::Instant::now();
        let out = fetch_indexed(0..5, |i| async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            i * 2
        })
        .await;
        assert_eq!(out, vec![0, 2, 4, 6, 8]);
        // Serial would take ~500ms.
        assert!(start.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let out: Vec<i32> = fetch_indexed(Vec::<i32>::new(), |x| async move { x }).await;
        assert!(out.is_empty());
    }
}
