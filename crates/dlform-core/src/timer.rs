//! Deferred callbacks with cancel handles.
//!
//! Cancellation uses a shared token the scheduled task checks before each
//! phase; `cancel` also aborts the task so an unstarted timer never fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a scheduled callback. Dropping the handle does not cancel;
/// the timer runs to completion unless `cancel` is called first.
#[derive(Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Requests cancellation: pending phases will not run.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Runs `f` once after `delay`, unless cancelled first.
pub fn schedule_after<F>(delay: Duration, f: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let token = Arc::clone(&cancelled);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if !token.load(Ordering::Relaxed) {
            f();
        }
    });
    TimerHandle { cancelled, task }
}

/// Runs `first` after `delay`, then `second` after a further `gap`.
/// One handle covers both phases; the token is checked before each.
pub fn schedule_chained<F, G>(delay: Duration, first: F, gap: Duration, second: G) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
    G: FnOnce() + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let token = Arc::clone(&cancelled);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if token.load(Ordering::Relaxed) {
            return;
        }
        first();
        tokio::time::sleep(gap).await;
        if token.load(Ordering::Relaxed) {
            return;
        }
        second();
    });
    TimerHandle { cancelled, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn schedule_after_fires_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handle = schedule_after(Duration::from_millis(100), move || {
            seen.fetch_add(1, Ordering::Relaxed);
        });

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(count.load(Ordering::Relaxed), 0);
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_deadline_suppresses() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handle = schedule_after(Duration::from_millis(100), move || {
            seen.fetch_add(1, Ordering::Relaxed);
        });

        handle.cancel();
        assert!(handle.is_cancelled());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::Relaxed), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn chained_phases_run_in_order() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let first_log = Arc::clone(&log);
        let second_log = Arc::clone(&log);
        let _handle = schedule_chained(
            Duration::from_millis(50),
            move || first_log.lock().unwrap().push("fade"),
            Duration::from_millis(25),
            move || second_log.lock().unwrap().push("hide"),
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(*log.lock().unwrap(), vec!["fade"]);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(*log.lock().unwrap(), vec!["fade", "hide"]);
    }

    #[tokio::test(start_paused = true)]
    async fn chained_cancel_between_phases_stops_second() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let first_log = Arc::clone(&log);
        let second_log = Arc::clone(&log);
        let handle = schedule_chained(
            Duration::from_millis(50),
            move || first_log.lock().unwrap().push("fade"),
            Duration::from_millis(25),
            move || second_log.lock().unwrap().push("hide"),
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*log.lock().unwrap(), vec!["fade"]);
    }
}
