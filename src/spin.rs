//! The spin engine: a timed reveal that ends in one committed random choice.
//!
//! [`start`] spawns a task that emits [`SpinEvent::Flicker`] updates at a
//! fixed cadence and one distinguished [`SpinEvent::Settled`] draw after the
//! total duration. The task owns a snapshot of the choice list taken at spin
//! start; later catalog mutations do not affect an in-flight spin.
//!
//! Every spin has an id. Cancelling the returned [`SpinHandle`] stops the
//! task, and the event loop drops any event whose id no longer matches the
//! active session, so a torn-down screen is never mutated by a stale spin.

use std::time::Duration;

use rand::prelude::IndexedRandom;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Total reveal duration before the final draw.
pub const SPIN_DURATION_MS: u64 = 2000;

/// Cadence of intermediate flicker draws.
pub const FLICKER_INTERVAL_MS: u64 = 100;

/// Timing parameters for a spin, injectable for config overrides and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub duration: Duration,
    pub flicker_interval: Duration,
}

impl SpinTiming {
    /// Build timing from millisecond values, clamped to sane minimums.
    pub fn from_millis(duration_ms: u64, flicker_interval_ms: u64) -> Self {
        let flicker_interval = Duration::from_millis(flicker_interval_ms.max(1));
        let duration = Duration::from_millis(duration_ms).max(flicker_interval);
        Self {
            duration,
            flicker_interval,
        }
    }

    /// Number of intermediate flicker draws before the final one.
    pub fn flicker_count(&self) -> u32 {
        (self.duration.as_millis() / self.flicker_interval.as_millis()) as u32
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::from_millis(SPIN_DURATION_MS, FLICKER_INTERVAL_MS)
    }
}

/// Event emitted by a spin task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinEvent {
    /// Intermediate draw, shown for animation only.
    Flicker { id: u64, word: String },
    /// Final committed draw.
    Settled { id: u64, word: String },
}

impl SpinEvent {
    pub fn id(&self) -> u64 {
        match self {
            SpinEvent::Flicker { id, .. } | SpinEvent::Settled { id, .. } => *id,
        }
    }
}

/// Handle to an in-flight spin.
pub struct SpinHandle {
    pub id: u64,
    cancel: CancellationToken,
}

impl SpinHandle {
    /// Stop the spin task. Pending emissions are discarded; no settled event
    /// is delivered.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

/// One independent uniform draw, with replacement.
fn draw(choices: &[String]) -> String {
    choices.choose(&mut rand::rng()).cloned().unwrap_or_default()
}

/// Spawn the spin task for the given choices.
///
/// The caller must guard the non-empty precondition and the one-spin-at-a-time
/// invariant; this only runs the sequence. Events are delivered over `tx` in
/// emission order.
pub fn start(
    id: u64,
    choices: Vec<String>,
    timing: SpinTiming,
    tx: mpsc::Sender<SpinEvent>,
) -> SpinHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(timing.flicker_interval);
        // First flicker fires immediately, matching the reveal starting the
        // instant the user triggers it.
        for _ in 0..timing.flicker_count() {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = interval.tick() => {}
            }
            let word = draw(&choices);
            if tx.send(SpinEvent::Flicker { id, word }).await.is_err() {
                return;
            }
        }

        // One more tick lands exactly at the total duration, then the final
        // independent draw commits the result.
        tokio::select! {
            _ = token.cancelled() => return,
            _ = interval.tick() => {}
        }
        let word = draw(&choices);
        let _ = tx.send(SpinEvent::Settled { id, word }).await;
    });

    SpinHandle { id, cancel }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_timing_flicker_count() {
        assert_eq!(SpinTiming::default().flicker_count(), 20);
        assert_eq!(SpinTiming::from_millis(500, 100).flicker_count(), 5);
        // Clamped below one interval
        assert_eq!(SpinTiming::from_millis(0, 100).flicker_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spin_settles_on_member() {
        let list = choices(&["Red", "Blue", "Green"]);
        let (tx, mut rx) = mpsc::channel(32);
        let _handle = start(7, list.clone(), SpinTiming::default(), tx);

        let mut flickers = 0;
        let settled = loop {
            match rx.recv().await.expect("spin task dropped early") {
                SpinEvent::Flicker { id, word } => {
                    assert_eq!(id, 7);
                    assert!(list.contains(&word));
                    flickers += 1;
                }
                SpinEvent::Settled { id, word } => {
                    assert_eq!(id, 7);
                    break word;
                }
            }
        };

        assert_eq!(flickers, 20);
        assert!(list.contains(&settled));
        // The sequence is finite: nothing after the settled event.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_spin_emits_no_result() {
        let (tx, mut rx) = mpsc::channel(32);
        let handle = start(1, choices(&["A", "B"]), SpinTiming::from_millis(1000, 100), tx);

        // Let a couple of flickers through, then tear the session down.
        for _ in 0..2 {
            assert!(matches!(
                rx.recv().await,
                Some(SpinEvent::Flicker { .. })
            ));
        }
        handle.cancel();

        // The task stops without a settled event; the channel just closes
        // after any flicker already in flight.
        while let Some(event) = rx.recv().await {
            assert!(matches!(event, SpinEvent::Flicker { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_choice_list_settles_on_it() {
        let (tx, mut rx) = mpsc::channel(32);
        let _handle = start(3, choices(&["Only"]), SpinTiming::from_millis(300, 100), tx);

        let mut last = None;
        while let Some(event) = rx.recv().await {
            match event {
                SpinEvent::Flicker { word, .. } => assert_eq!(word, "Only"),
                SpinEvent::Settled { word, .. } => last = Some(word),
            }
        }
        assert_eq!(last.as_deref(), Some("Only"));
    }
}
