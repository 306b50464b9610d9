use std::{thread, time::Duration};

use crate::executor::{Unit, Work};

/// Work that lets a delay elapse on its own thread before running.
pub struct Timer {
    delay: Duration,
    work: Work,
    daemon: bool,
}

impl Timer {
    pub fn new(delay: Duration, unit: Unit) -> Self {
        let (work, daemon) = unit.into_parts();

        Self { delay, work, daemon }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the delay, then runs the work.
    pub fn fire(self) {
        thread::sleep(self.delay);
        (self.work)();
    }

    /// Turns the timer into a unit with the daemon flag of the wrapped one.
    pub fn into_unit(self) -> Unit {
        let daemon = self.daemon;
        Unit::new(move || self.fire()).daemon(daemon)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::{Arc, Mutex}, time::{Duration, Instant}};

    use crate::executor::Unit;

    use super::Timer;

    #[test]
    fn fire_runs_after_delay() {
        let ran_at = Arc::new(Mutex::new(None));
        let start = Instant::now();

        let timer = Timer::new(Duration::from_millis(50), Unit::new({
            let ran_at = ran_at.clone();
            move || *ran_at.lock().unwrap() = Some(Instant::now())
        }));
        assert_eq!(timer.delay(), Duration::from_millis(50));
        timer.fire();

        let ran_at = ran_at.lock().unwrap().expect("work did not run");
        assert!(ran_at - start >= Duration::from_millis(50));
    }

    #[test]
    fn into_unit_keeps_daemon_flag() {
        let unit = Timer::new(Duration::ZERO, Unit::new(|| ()).daemon(true)).into_unit();
        assert!(unit.is_daemon());

        let unit = Timer::new(Duration::ZERO, Unit::new(|| ())).into_unit();
        assert!(!unit.is_daemon());
    }
}
