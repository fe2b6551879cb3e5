//! Single-slot deferred call scheduler.
//!
//! Every `schedule` cancels whatever is armed and arms a fresh timer, so a
//! burst of calls collapses into one trailing `fire` carrying the last payload.

use std::time::Duration;

/// A cancellable one-shot timer supplied by the host.
pub trait Timer {
    type Handle;

    fn arm(&mut self, delay: Duration) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

pub struct Debouncer<T, Tm: Timer> {
    timer: Tm,
    delay: Duration,
    armed: Option<Tm::Handle>,
    pending: Option<T>,
}

impl<T, Tm: Timer> Debouncer<T, Tm> {
    pub fn new(timer: Tm, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            armed: None,
            pending: None,
        }
    }

    /// Replaces any pending payload and restarts the quiet period.
    pub fn schedule(&mut self, payload: T) {
        if let Some(handle) = self.armed.take() {
            self.timer.cancel(handle);
        }
        self.pending = Some(payload);
        self.armed = Some(self.timer.arm(self.delay));
    }

    /// Called when the armed timer elapses. Returns `None` for a stale fire.
    pub fn fire(&mut self) -> Option<T> {
        self.armed = None;
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.armed.take() {
            self.timer.cancel(handle);
        }
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timer(&self) -> &Tm {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut Tm {
        &mut self.timer
    }
}

/// Deterministic timer driven by `advance`.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    armed: Vec<(u64, Duration)>,
    arm_count: usize,
    cancel_count: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward. Returns true if an armed timer came due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.now += elapsed;
        let now = self.now;
        let before = self.armed.len();
        self.armed.retain(|(_, deadline)| *deadline > now);
        self.armed.len() != before
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Total `arm` calls so far.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count
    }
}

impl Timer for ManualTimer {
    type Handle = u64;

    fn arm(&mut self, delay: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.arm_count += 1;
        self.armed.push((id, self.now + delay));
        id
    }

    fn cancel(&mut self, handle: u64) {
        self.cancel_count += 1;
        self.armed.retain(|(id, _)| *id != handle);
    }
}

#[cfg(test)]
mod tests;
