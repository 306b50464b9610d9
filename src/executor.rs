use std::{io, sync::LazyLock, thread, time::Duration};

use crate::{builder::ThreadsBuilder, core::Core, timer::Timer, JoinResult};

/// Type-erased work run by a background unit.
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// A piece of work ready to be handed to an [`Executor`].
pub struct Unit {
    work: Work,
    daemon: bool,
}

impl Unit {
    pub fn new(work: impl FnOnce() + Send + 'static) -> Self {
        Self {
            work: Box::new(work),
            daemon: false,
        }
    }

    /// Marks the unit as daemon: executors never wait for it to finish.
    pub fn daemon(mut self, daemon: bool) -> Self {
        self.daemon = daemon;
        self
    }

    pub fn is_daemon(&self) -> bool {
        self.daemon
    }

    pub fn run(self) {
        (self.work)()
    }

    pub(crate) fn into_parts(self) -> (Work, bool) {
        (self.work, self.daemon)
    }
}

/// Waits for a spawned unit to finish.
pub trait Join {
    /// Blocks until the unit finished, `Err` holds the payload of a panic that
    /// escaped the unit.
    fn join(self) -> JoinResult<()>;
}

impl Join for thread::JoinHandle<()> {
    fn join(self) -> JoinResult<()> {
        thread::JoinHandle::join(self)
    }
}

/// The capability used to run units in the background.
pub trait Executor: Send + Sync + 'static {
    type Handle: Join;

    /// Starts `unit` right away.
    fn spawn(&self, unit: Unit) -> io::Result<Self::Handle>;

    /// Starts `unit` once `delay` has elapsed.
    fn spawn_after(&self, delay: Duration, unit: Unit) -> io::Result<Self::Handle> {
        self.spawn(Timer::new(delay, unit).into_unit())
    }
}

static GLOBAL: LazyLock<Threads> = LazyLock::new(Threads::new);

/// Executor running every unit on its own OS thread.
///
/// Threads are never reused. Non-daemon units are counted so the owner can
/// wait for them before the process exits, see [`Threads::wait_non_daemon`].
#[derive(Clone)]
pub struct Threads {
    pub(crate) core: Core,
}

impl Threads {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ThreadsBuilder {
        ThreadsBuilder::new()
    }

    /// The executor used by the free functions of this crate.
    pub fn global() -> &'static Threads {
        &GLOBAL
    }

    /// Number of non-daemon units that have not finished yet.
    pub fn pending(&self) -> usize {
        self.core.pending()
    }

    /// Blocks until every non-daemon unit spawned so far has finished.
    ///
    /// Called from a non-daemon unit of this executor, the caller's own unit
    /// is left out and the call waits for the others only.
    pub fn wait_non_daemon(&self) {
        self.core.wait_idle();
    }

    /// Like [`Threads::wait_non_daemon`] but gives up after `timeout`.
    /// Returns whether every non-daemon unit finished, the caller's own
    /// unit left out as above.
    pub fn wait_non_daemon_timeout(&self, timeout: Duration) -> bool {
        self.core.wait_idle_timeout(timeout)
    }
}

impl Default for Threads {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for Threads {
    type Handle = thread::JoinHandle<()>;

    fn spawn(&self, unit: Unit) -> io::Result<Self::Handle> {
        self.core.spawn_thread(unit)
    }
}
