use std::{io, ops::Deref, sync::{atomic::{AtomicUsize, Ordering}, Arc}, thread::JoinHandle, time::Duration};

use crate::{builder::ThreadsBuilder, condvar::Cv, executor::Unit, hooks::Hooks, macros::tracing_feat, worker};

#[derive(Clone)]
pub struct Core(Arc<CoreInner>);

/// State shared between a [`Threads`](crate::executor::Threads) executor and
/// every thread it spawned.
pub struct CoreInner {
    /// Hooks to be called on background thread events
    pub hooks: Hooks,
    /// Optional stack size to use when spawning threads
    stack_size: Option<usize>,
    /// Id handed to the next unit, used for thread names
    next_id: AtomicUsize,
    /// Number of non-daemon units spawned and not finished yet
    pending: AtomicUsize,
    /// Notified when `pending` drops to zero
    idle_cv: Cv,
}

impl Core {
    pub fn new(builder: ThreadsBuilder) -> Self {
        Self(Arc::new(CoreInner {
            hooks: builder.hooks,
            stack_size: builder.stack_size,
            next_id: AtomicUsize::new(1),
            pending: AtomicUsize::new(0),
            idle_cv: Cv::new(),
        }))
    }

    /// Starts a fresh thread running `unit`.
    pub fn spawn_thread(&self, unit: Unit) -> io::Result<JoinHandle<()>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let daemon = unit.is_daemon();

        let mut thread_builder = std::thread::Builder::new()
            .name(self.hooks.call_name_fn(id));

        if let Some(stack_size) = self.stack_size {
            thread_builder = thread_builder.stack_size(stack_size);
        }

        if !daemon {
            self.enter_pending();
        }

        let core = self.clone();
        let spawned = thread_builder.spawn(move || worker::run_unit(core, id, unit));

        match spawned {
            Ok(handle) => {
                tracing_feat!(trace!("Spawned unit {id} (daemon: {daemon})"));
                Ok(handle)
            }
            Err(e) => {
                tracing_feat!(error!("Failed to spawn thread for unit {id}: {e}"));
                if !daemon {
                    self.leave_pending();
                }
                Err(e)
            }
        }
    }

    fn enter_pending(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    pub fn leave_pending(&self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
        // a waiting unit of this core waits for one, not zero
        self.idle_cv.notify_all();
    }

    /// Identity of this core, shared by all its clones.
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Number of pending units a waiter on the calling thread must leave
    /// out: its own unit, when it is a non-daemon unit of this core.
    fn own_pending(&self) -> usize {
        usize::from(worker::is_own_non_daemon(self.id()))
    }

    /// Blocks until every non-daemon unit other than the caller's has finished.
    pub fn wait_idle(&self) {
        let own = self.own_pending();
        self.idle_cv.wait_until(|| self.pending() <= own);
    }

    /// Same as [`Core::wait_idle`] but gives up after `timeout`, returns
    /// whether every other non-daemon unit finished.
    pub fn wait_idle_timeout(&self, timeout: Duration) -> bool {
        let own = self.own_pending();
        self.idle_cv.wait_timeout_until(timeout, || self.pending() <= own)
    }
}

impl Deref for Core {
    type Target = CoreInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
