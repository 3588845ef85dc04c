use std::future;
use tokio::sync::watch;

///
/// CancelSignal
///
/// Receiving side of an advisory cancellation. Cloning is cheap; every clone
/// observes the same handle. A signal whose handle is dropped without
/// cancelling never fires.
///

#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
    rx: Option<watch::Receiver<bool>>,
}

impl CancelSignal {
    /// Create a linked handle and signal.
    #[must_use]
    pub fn pair() -> (CancelHandle, Self) {
        let (tx, rx) = watch::channel(false);

        (CancelHandle { tx }, Self { rx: Some(rx) })
    }

    /// A signal that is never cancelled.
    #[must_use]
    pub const fn never() -> Self {
        Self { rx: None }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Resolves once cancellation is requested.
    pub async fn cancelled(&self) {
        let Some(rx) = self.rx.as_ref() else {
            return future::pending().await;
        };

        let mut rx = rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // handle dropped
            future::pending::<()>().await;
        }
    }
}

///
/// CancelHandle
///

#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            rx: Some(self.tx.subscribe()),
        }
    }
}
