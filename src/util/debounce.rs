//! src/util/debounce.rs
//! ============================================================================
//! # Cancellable Timers for Debounce and Deferred Teardown
//!
//! Every fixed-delay timer in the app (search input debounce, notification
//! auto-dismiss, dialog/notification teardown sweeps) follows the same shape:
//! spawn a sleeper that sends a message when it fires, and let the receiver
//! decide whether the firing is still current. Cancellation is therefore
//! cheap: bump a generation counter (or drop the target) and the stale firing
//! is ignored on arrival. Nothing is ever aborted mid-flight.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tracing::trace;

/// Spawn a sleeper that delivers `msg` on `tx` after `delay`.
///
/// The send result is ignored: if the receiver is gone the app is shutting
/// down and the timer no longer matters.
pub fn schedule<T: Send + 'static>(delay: Duration, tx: UnboundedSender<T>, msg: T) {
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = tx.send(msg);
    });
}

/// Generation counter for a single debounced input field.
///
/// Each keystroke calls [`Debouncer::arm`], which invalidates every earlier
/// timer and returns the generation to stamp onto the newly scheduled firing.
/// When a firing arrives, [`Debouncer::accepts`] tells the caller whether it
/// is still the latest one.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    /// Quiet period before a firing is considered settled.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invalidate any pending firing and return the next generation.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        trace!("debounce armed, generation {}", self.generation);
        self.generation
    }

    /// Invalidate any pending firing without arming a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// True when `generation` is the most recently armed one.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn rearming_invalidates_earlier_generations() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.arm();
        let second = debouncer.arm();

        assert!(!debouncer.accepts(first));
        assert!(debouncer.accepts(second));
    }

    #[test]
    fn cancel_invalidates_without_arming() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let generation = debouncer.arm();
        debouncer.cancel();

        assert!(!debouncer.accepts(generation));
    }

    #[tokio::test(start_paused = true)]
    async fn schedule_delivers_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
        schedule(Duration::from_millis(300), tx, 7);

        // Nothing arrives before the delay elapses.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(rx.try_recv().unwrap(), 7);
    }
}
