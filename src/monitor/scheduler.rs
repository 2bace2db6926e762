//! Periodic tick scheduling
//!
//! Timers are passive deadlines polled from the event loop, so all state
//! mutation happens on the loop's thread and ticks never overlap.

use std::time::{Duration, Instant};

use tracing::debug;

/// A single repeating deadline
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the ticker; the first tick is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns true at most once per call if the deadline has passed.
    ///
    /// Missed deadlines do not accumulate: a ticker more than one interval
    /// behind re-arms relative to `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                let mut next = due + self.interval;
                if next <= now {
                    next = now + self.interval;
                }
                self.next_due = Some(next);
                true
            }
            _ => false,
        }
    }
}

/// Which timers fired during a poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticks {
    pub process: bool,
    pub resource: bool,
}

impl Ticks {
    pub fn any(&self) -> bool {
        self.process || self.resource
    }
}

/// The process-refresh and resource-sample timers
#[derive(Debug, Clone)]
pub struct Scheduler {
    process: Ticker,
    resource: Ticker,
}

impl Scheduler {
    pub fn new(process_interval: Duration, resource_interval: Duration) -> Self {
        Self {
            process: Ticker::new(process_interval),
            resource: Ticker::new(resource_interval),
        }
    }

    /// Arms both timers.
    pub fn start(&mut self, now: Instant) {
        self.process.start(now);
        self.resource.start(now);
        debug!(
            process_ms = self.process.interval().as_millis() as u64,
            resource_ms = self.resource.interval().as_millis() as u64,
            "scheduler started"
        );
    }

    /// Disarms both timers. Safe to call any number of times.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("scheduler stopped");
        }
        self.process.stop();
        self.resource.stop();
    }

    pub fn is_running(&self) -> bool {
        self.process.is_active() || self.resource.is_active()
    }

    /// Fires whichever timers are due at `now`.
    pub fn poll(&mut self, now: Instant) -> Ticks {
        Ticks {
            process: self.process.fire(now),
            resource: self.resource.fire(now),
        }
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.process.next_due(), self.resource.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Time left until the next deadline, zero if overdue
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
