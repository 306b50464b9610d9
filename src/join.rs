use std::{any::Any, sync::Arc};

use crate::{executor::Join, task::{state::State, Slot}, JoinResult};

/// Handle used to wait for a background unit and read its output.
///
/// The output is only read after the unit's thread has been joined.
#[must_use = "If unnecessary, please drop it or call .detach()"]
pub struct JoinHandle<T, H = std::thread::JoinHandle<()>> {
    handle: H,
    slot: Arc<Slot<T>>,
}

impl<T, H: Join> JoinHandle<T, H> {
    pub(crate) fn new(handle: H, slot: Arc<Slot<T>>) -> Self {
        Self { handle, slot }
    }

    /// Waits for the unit and returns its output, or `None` if the body
    /// panicked.
    pub fn join(self) -> Option<T> {
        self.join_result().ok()
    }

    /// Waits for the unit and returns its output, or the panic payload if
    /// the body panicked.
    pub fn join_result(self) -> JoinResult<T> {
        let joined = self.handle.join();

        match self.slot.take() {
            Some(output) => output,
            None => Err(joined
                .err()
                .unwrap_or_else(|| Box::new("background unit finished without an output") as Box<dyn Any + Send>)),
        }
    }

    /// Checks whether the unit was handed to its executor
    pub fn is_started(&self) -> bool {
        self.slot.state.get(State::STARTED)
    }

    /// Checks whether the body is executing
    pub fn is_running(&self) -> bool {
        self.slot.state.get(State::RUNNING)
    }

    /// Checks whether the body returned or panicked
    pub fn is_finished(&self) -> bool {
        self.slot.state.get(State::FINISHED)
    }

    /// Detaches the handle from the unit, which keeps running
    pub fn detach(self) {
        drop(self);
    }
}
