//! Tokio-backed double-tap timer.
//!
//! Arms a sleep task that reports back through the runtime's event channel.
//! Cancelling aborts the task; because an already-fired message may still be
//! queued, every fire carries a generation number the event loop compares
//! against [`TokioTapTimer::generation`] before forwarding it to the
//! controller.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::core::nav::TapTimer;
use crate::term::RuntimeEvent;

pub struct TokioTapTimer {
    tx: UnboundedSender<RuntimeEvent>,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl TokioTapTimer {
    pub fn new(tx: UnboundedSender<RuntimeEvent>) -> Self {
        Self {
            tx,
            generation: 0,
            handle: None,
        }
    }

    /// Generation of the most recently armed window. Fires tagged with an
    /// older generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl TapTimer for TokioTapTimer {
    fn arm(&mut self, window: Duration) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let _ = tx.send(RuntimeEvent::TapTimeout(generation));
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        // Bump the generation so a fire already in the channel is ignored.
        self.generation += 1;
    }
}
