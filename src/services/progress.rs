//! Progress Simulation
//!
//! Timer-driven progress for long operations (backup create/restore) whose
//! real progress is unknown. Progress climbs by a fixed step per tick, holds
//! at a cap below 100 and only completes once the operation resolves.

use std::future::Future;
use std::time::Duration;

use crate::constants::{PROGRESS_CAP, PROGRESS_DONE, PROGRESS_STEP, PROGRESS_TICK_MS};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressConfig {
    pub tick: Duration,
    pub step: u8,
    /// Held until the operation resolves; always below 100
    pub cap: u8,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(PROGRESS_TICK_MS),
            step: PROGRESS_STEP,
            cap: PROGRESS_CAP,
        }
    }
}

/// Await `op`, reporting simulated progress through `on_progress`.
///
/// Reports 0 first and 100 on success. On failure progress stays where it was.
pub async fn run_with_progress<F, T>(op: F, config: ProgressConfig, mut on_progress: impl FnMut(u8)) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let cap = config.cap.min(PROGRESS_DONE - 1);
    let mut progress = 0u8;
    on_progress(progress);

    let mut ticker = tokio::time::interval(config.tick);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // first tick completes immediately
    ticker.tick().await;

    tokio::pin!(op);
    loop {
        tokio::select! {
            biased;
            result = &mut op => {
                match &result {
                    Ok(_) => on_progress(PROGRESS_DONE),
                    Err(e) => tracing::warn!(progress, error = %e, "Operation failed before completion"),
                }
                return result;
            }
            _ = ticker.tick() => {
                let next = progress.saturating_add(config.step).min(cap);
                if next != progress {
                    progress = next;
                    on_progress(progress);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchSnafu;

    async fn settle_after(ms: u64, ok: bool) -> Result<&'static str> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        if ok {
            Ok("done")
        } else {
            FetchSnafu { message: "disk full" }.fail()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn progress_holds_at_cap_until_done() {
        let mut seen = Vec::new();
        let result = run_with_progress(settle_after(5_000, true), ProgressConfig::default(), |p| seen.push(p)).await;

        assert_eq!(result.expect("ok"), "done");
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] < w[1]), "strictly increasing: {seen:?}");
        assert_eq!(seen[seen.len() - 2], 90);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_leaves_progress_below_100() {
        let mut seen = Vec::new();
        let result = run_with_progress(settle_after(700, false), ProgressConfig::default(), |p| seen.push(p)).await;

        assert!(result.is_err());
        assert!(seen.iter().all(|p| *p < 100));
        assert!(seen.len() >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cap_is_kept_below_100() {
        let config = ProgressConfig {
            tick: Duration::from_millis(10),
            step: 60,
            cap: 150,
        };
        let mut seen = Vec::new();
        run_with_progress(settle_after(100, true), config, |p| seen.push(p))
            .await
            .expect("ok");
        assert_eq!(seen, vec![0, 60, 99, 100]);
    }
}
