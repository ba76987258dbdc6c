// SPDX-License-Identifier: MPL-2.0
//! Recurring auto-rotation timer.
//!
//! Two flavours share the same contract (one `RotateRight` per interval,
//! countdown restarted by manual navigation, cancellation tied to lifetime):
//!
//! - [`AutoRotateSchedule`] is a pure deadline tracker polled with the
//!   current time. The Iced component drives it from a subscription.
//! - [`AutoRotator`] owns a tokio task emitting events on a channel, for
//!   hosts that are not driven by an Iced update loop.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::state::RotationEvent;

// =============================================================================
// AutoRotateSchedule
// =============================================================================

/// Deadline tracker for auto-rotation.
///
/// A deadline past the clock's range never fires, which leaves the
/// schedule inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRotateSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoRotateSchedule {
    /// Starts counting down from `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now.checked_add(interval),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when the deadline has passed, and re-arms for one full
    /// interval after `now`. Late polls never fire twice.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = now.checked_add(self.interval);
                true
            }
            _ => false,
        }
    }

    /// Restarts the countdown. No-op once cancelled.
    pub fn reset(&mut self, now: Instant) {
        if self.next_due.is_some() {
            self.next_due = now.checked_add(self.interval);
        }
    }

    /// Stops the schedule for good.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }
}

// =============================================================================
// AutoRotator
// =============================================================================

const FAR_FUTURE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy)]
enum RotatorCommand {
    Reset,
}

/// Background auto-rotation task.
///
/// Emits [`RotationEvent::RotateRight`] on the provided channel every
/// interval. The task ends when [`AutoRotator::stop`] is called, when the
/// handle is dropped, or when the receiving side of the channel is closed.
#[derive(Debug)]
pub struct AutoRotator {
    command_tx: mpsc::UnboundedSender<RotatorCommand>,
    handle: Option<JoinHandle<()>>,
}

impl AutoRotator {
    /// Spawns the timer task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn start(interval: Duration, events_tx: mpsc::Sender<RotationEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(Self::rotator_loop(interval, events_tx, command_rx));

        Self {
            command_tx,
            handle: Some(handle),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Restarts the countdown, typically after manual navigation.
    pub fn reset(&self) {
        // A closed channel means the task already ended.
        let _ = self.command_tx.send(RotatorCommand::Reset);
    }

    /// Cancels the task. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("auto-rotation stopped");
        }
    }

    /// Next tick `interval` after now, or a year out when that overflows.
    fn next_deadline(interval: Duration) -> tokio::time::Instant {
        let now = tokio::time::Instant::now();
        now.checked_add(interval).unwrap_or_else(|| now + FAR_FUTURE)
    }

    async fn rotator_loop(
        interval: Duration,
        events_tx: mpsc::Sender<RotationEvent>,
        mut command_rx: mpsc::UnboundedReceiver<RotatorCommand>,
    ) {
        let mut deadline = Self::next_deadline(interval);

        loop {
            tokio::select! {
                () = tokio::time::sleep_until(deadline) => {
                    tracing::debug!("auto-rotation tick");
                    if events_tx.send(RotationEvent::RotateRight).await.is_err() {
                        break;
                    }
                    deadline = Self::next_deadline(interval);
                }
                command = command_rx.recv() => match command {
                    Some(RotatorCommand::Reset) => {
                        deadline = Self::next_deadline(interval);
                    }
                    None => break,
                },
            }
        }
    }
}

impl Drop for AutoRotator {
    fn drop(&mut self) {
        self.stop();
    }
}
