//! Graceful stop coordination.
//!
//! `Shutdown` is held by whoever decides the process should stop (the signal
//! listener, tests). Each long-running task holds a `ShutdownSignal` and awaits
//! it; the server hands it to axum as its graceful-shutdown future.

use tokio::sync::broadcast;

#[derive(Clone)]
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

/// One task's view of the stop request.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.notify.subscribe(),
        }
    }

    /// Ask every `ShutdownSignal` to resolve. Returns how many tasks were listening.
    pub fn trigger(&self) -> usize {
        let listening = self.notify.receiver_count();
        tracing::info!(listening, "Shutdown requested");
        // No receivers is not an error: nothing is left to stop.
        let _ = self.notify.send(());
        listening
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown is triggered or every `Shutdown` handle is gone.
    pub async fn wait(mut self) {
        let _ = self.rx.recv().await;
    }
}
