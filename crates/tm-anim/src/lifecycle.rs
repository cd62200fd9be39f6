use std::time::Duration;

use crate::driver::{PeriodicDriver, TimerHandle};

/// Idempotent start/stop of the single periodic callback.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    period: Duration,
    timer: Option<TimerHandle>,
}

impl Lifecycle {
    /// Create a stopped lifecycle that will arm timers with `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    /// Arm the periodic callback unless one is already armed.
    /// Returns `true` if a timer was armed by this call.
    pub fn start<D: PeriodicDriver + ?Sized>(&mut self, driver: &mut D) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(driver.arm(self.period));
        true
    }

    /// Cancel the armed callback, if any.
    /// Returns `true` if a timer was cancelled by this call.
    pub fn stop<D: PeriodicDriver + ?Sized>(&mut self, driver: &mut D) -> bool {
        match self.timer.take() {
            Some(handle) => {
                driver.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Return `true` while a timer is armed.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The armed timer, if running.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// The period timers are armed with.
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Driver double that counts arm and cancel calls.
    #[derive(Debug, Default)]
    struct CountingDriver {
        armed: Vec<TimerHandle>,
        cancelled: Vec<TimerHandle>,
        periods: Vec<Duration>,
    }

    impl PeriodicDriver for CountingDriver {
        fn arm(&mut self, period: Duration) -> TimerHandle {
            let handle = TimerHandle(self.armed.len() as u64);
            self.armed.push(handle);
            self.periods.push(period);
            handle
        }

        fn cancel(&mut self, handle: TimerHandle) {
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn double_start_arms_once() {
        let mut driver = CountingDriver::default();
        let mut lifecycle = Lifecycle::new(Duration::from_millis(20));

        assert!(lifecycle.start(&mut driver));
        assert!(!lifecycle.start(&mut driver));

        assert_eq!(driver.armed.len(), 1);
        assert_eq!(driver.periods, vec![Duration::from_millis(20)]);
        assert!(lifecycle.is_running());
    }

    #[test]
    fn stop_then_start_rearms_once() {
        let mut driver = CountingDriver::default();
        let mut lifecycle = Lifecycle::new(Duration::from_millis(20));
        lifecycle.start(&mut driver);

        assert!(lifecycle.stop(&mut driver));
        assert!(!lifecycle.is_running());
        assert!(lifecycle.start(&mut driver));

        assert_eq!(driver.armed.len(), 2);
        assert_eq!(driver.cancelled, vec![TimerHandle(0)]);
        assert_eq!(lifecycle.timer(), Some(TimerHandle(1)));
    }

    #[test]
    fn stop_when_stopped_is_a_no_op() {
        let mut driver = CountingDriver::default();
        let mut lifecycle = Lifecycle::new(Duration::from_millis(20));

        assert!(!lifecycle.stop(&mut driver));
        lifecycle.start(&mut driver);
        lifecycle.stop(&mut driver);
        assert!(!lifecycle.stop(&mut driver));

        assert_eq!(driver.cancelled.len(), 1);
    }
}
