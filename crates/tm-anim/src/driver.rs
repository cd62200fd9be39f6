use std::fmt;
use std::time::Duration;

/// Identifies a periodic callback armed on a [`PeriodicDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer {}", self.0)
    }
}

/// The host facility that invokes the animator at a fixed cadence.
///
/// The driver only hands out and revokes handles. When a timer fires, the
/// host forwards the handle to
/// [`TileAnimator::on_timer`](crate::TileAnimator::on_timer). Firings of one
/// timer must never overlap.
pub trait PeriodicDriver {
    /// Arm a repeating timer with the given period.
    fn arm(&mut self, period: Duration) -> TimerHandle;

    /// Cancel a timer. Future firings stop; a firing in progress is unaffected.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A timer that fell due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    /// The timer that fired.
    pub handle: TimerHandle,
    /// Virtual time of the firing, in milliseconds.
    pub at_ms: u64,
}

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    period_ms: u64,
    /// `None` once the next firing would fall past the end of the clock.
    next_due_ms: Option<u64>,
}

/// A cooperative driver running on a virtual millisecond clock.
///
/// Nothing fires on its own: the host calls [`advance`](Self::advance) and
/// dispatches the returned firings. Useful for tests, offline simulation, and
/// hosts that already own a frame loop.
#[derive(Debug, Default)]
pub struct ManualDriver {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl ManualDriver {
    /// Create a driver at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers currently armed.
    pub fn armed_count(&self) -> usize {
        self.timers.len()
    }

    /// Return `true` if `handle` is armed.
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Move the clock forward by `delta_ms` and collect every firing in
    /// `(now, now + delta]`, ordered by time and then by arming order.
    ///
    /// The clock saturates at `u64::MAX`. Long runs with short periods build
    /// a large `Vec`; use [`next_firing`](Self::next_firing) to dispatch one
    /// at a time instead.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<Firing> {
        let target = self.now_ms.saturating_add(delta_ms);
        let mut firings = Vec::new();
        while let Some(firing) = self.next_firing(target) {
            firings.push(firing);
        }
        firings
    }

    /// Pop the earliest firing due at or before `until_ms` and move the clock
    /// to it. Simultaneous firings come out in arming order.
    ///
    /// Returns `None` once nothing more is due; the clock then rests at
    /// `until_ms` (it never moves backwards).
    pub fn next_firing(&mut self, until_ms: u64) -> Option<Firing> {
        let due = self
            .timers
            .iter_mut()
            .filter_map(|t| t.next_due_ms.map(|at| (at, t)))
            .filter(|(at, _)| *at <= until_ms)
            // min_by_key keeps the first of equal keys, i.e. arming order.
            .min_by_key(|(at, _)| *at);

        let Some((at_ms, timer)) = due else {
            self.now_ms = self.now_ms.max(until_ms);
            return None;
        };
        timer.next_due_ms = at_ms.checked_add(timer.period_ms);
        self.now_ms = at_ms;
        Some(Firing {
            handle: timer.handle,
            at_ms,
        })
    }
}

impl PeriodicDriver for ManualDriver {
    fn arm(&mut self, period: Duration) -> TimerHandle {
        // A zero period would fire forever within a single advance.
        let period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX).max(1);
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            period_ms,
            next_due_ms: self.now_ms.checked_add(period_ms),
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
