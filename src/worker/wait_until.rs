use std::future::Future;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

/// Lifetime extension for an event handler.
///
/// The work is spawned the moment the handler registers it, so it runs to
/// completion even if nobody settles the handle. The host settles it to
/// learn when the event has been fully handled and with what result.
#[derive(Debug)]
pub struct WaitUntil<T> {
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> WaitUntil<T> {
    pub fn spawn<F>(work: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(work),
        }
    }

    pub async fn settle(self) -> Result<T> {
        self.handle.await.context("Event handler panicked")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn it_settles_with_the_result_of_the_work() {
        let value = WaitUntil::spawn(async { Ok(7) }).settle().await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn it_settles_with_the_failure_of_the_work() {
        let result: Result<()> = WaitUntil::spawn(async { Err(anyhow::anyhow!("boom")) })
            .settle()
            .await;
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }

    #[tokio::test]
    async fn it_finishes_the_work_when_the_handle_is_dropped() {
        let done = Arc::new(AtomicBool::new(false));
        let (tx, rx) = tokio::sync::oneshot::channel();

        let flag = Arc::clone(&done);
        drop(WaitUntil::spawn(async move {
            flag.store(true, Ordering::SeqCst);
            let _ = tx.send(());
            Ok(())
        }));

        rx.await.unwrap();
        assert!(done.load(Ordering::SeqCst));
    }
}
