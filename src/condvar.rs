use std::{sync::{Condvar, Mutex}, time::{Duration, Instant}};

/// Condvar used to make threads wait for a condition to be met.
///
/// The condition is checked while holding the mutex, and notifiers take the
/// mutex too, so a notification between check and wait is never lost.
pub struct Cv {
    mutex: Mutex<()>,
    condvar: Condvar,
}

impl Cv {
    pub fn new() -> Self {
        Self {
            mutex: Mutex::new(()),
            condvar: Condvar::new(),
        }
    }

    /// Blocks until `done` returns true.
    pub fn wait_until(&self, mut done: impl FnMut() -> bool) {
        let mut guard = self.mutex.lock().unwrap_or_else(|p| p.into_inner());

        while !done() {
            guard = self.condvar.wait(guard).unwrap_or_else(|p| p.into_inner());
        }
    }

    /// Blocks until `done` returns true or `timeout` elapses, returns the
    /// last value of `done`.
    pub fn wait_timeout_until(&self, timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        let mut guard = self.mutex.lock().unwrap_or_else(|p| p.into_inner());

        loop {
            if done() {
                return true;
            }

            let now = Instant::now();
            if now >= deadline {
                return false;
            }

            guard = match self.condvar.wait_timeout(guard, deadline - now) {
                Ok((guard, _)) => guard,
                Err(e) => e.into_inner().0,
            };
        }
    }

    /// Notify all threads waiting on the condvar
    pub fn notify_all(&self) {
        let _guard = self.mutex.lock().unwrap_or_else(|p| p.into_inner());
        self.condvar.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::{atomic::{AtomicBool, Ordering}, Arc}, thread, time::Duration};

    use super::Cv;

    #[test]
    fn times_out_when_condition_never_holds() {
        let cv = Cv::new();
        assert!(!cv.wait_timeout_until(Duration::from_millis(50), || false));
    }

    #[test]
    fn wakes_on_notify() {
        let cv = Arc::new(Cv::new());
        let flag = Arc::new(AtomicBool::new(false));

        let notifier = thread::spawn({
            let cv = cv.clone();
            let flag = flag.clone();
            move || {
                thread::sleep(Duration::from_millis(20));
                flag.store(true, Ordering::SeqCst);
                cv.notify_all();
            }
        });

        cv.wait_until(|| flag.load(Ordering::SeqCst));
        notifier.join().unwrap();
    }
}
