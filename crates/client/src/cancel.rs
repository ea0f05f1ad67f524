use std::future::Future;
use std::pin::pin;

use futures::future::{select, Either};
use tokio_util::sync::CancellationToken;

/// Cancellation scope tied to a mounted view.
///
/// Responses that arrive after [`ViewScope::cancel`] are dropped instead of
/// being written into state the view no longer owns.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("view scope cancelled");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run `fut` unless the scope is cancelled first. `None` means the
    /// result must be discarded.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            return None;
        }
        let cancelled = pin!(self.token.cancelled());
        let fut = pin!(fut);
        match select(fut, cancelled).await {
            Either::Left((output, _)) if !self.token.is_cancelled() => Some(output),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn live_scope_returns_output() {
        let scope = ViewScope::new();
        assert_eq!(block_on(scope.run(async { 5 })), Some(5));
    }

    #[test]
    fn cancelled_scope_skips_work() {
        let scope = ViewScope::new();
        scope.cancel();
        assert_eq!(block_on(scope.run(async { 5 })), None);
    }

    #[test]
    fn cancel_while_pending_discards_late_response() {
        let scope = ViewScope::new();
        let (tx, rx) = oneshot::channel::<u32>();
        let teardown = scope.clone();

        let outcome = block_on(async {
            let waiting = scope.run(async move { rx.await.ok() });
            let unmount = async move {
                teardown.cancel();
                let _ = tx.send(9);
            };
            futures::join!(waiting, unmount).0
        });
        assert_eq!(outcome, None);
    }
}
