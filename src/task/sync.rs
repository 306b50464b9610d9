use std::{cell::UnsafeCell, panic::{catch_unwind, AssertUnwindSafe}, sync::Arc};

use crate::{macros::tracing_feat, JoinResult};

use super::{runnable::Runnable, state::State};

/// Single-write, single-read storage for the output of a background unit.
///
/// The unit fills it once before its thread exits, the caller takes it after
/// joining that thread. No lock guards the value: the writer and the reader
/// each claim a state bit, and OUTPUT_READY publishes the write.
pub struct Slot<T> {
    pub(crate) state: State,
    value: UnsafeCell<Option<JoinResult<T>>>,
}

// SAFETY: the value is written once by the claimer of OUTPUT_CLAIMED before
// OUTPUT_READY is released, and read once by the claimer of OUTPUT_TAKEN
// after OUTPUT_READY is acquired.
unsafe impl<T: Send> Sync for Slot<T> {}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self {
            state: State::new(),
            value: UnsafeCell::new(None),
        }
    }

    /// Stores the output, panics if the slot was already written.
    pub(crate) fn fill(&self, output: JoinResult<T>) {
        assert!(self.state.claim(State::OUTPUT_CLAIMED), "result slot written twice");

        unsafe {
            *self.value.get() = Some(output);
        }
        self.state.set(State::OUTPUT_READY, true);
    }

    /// Takes the output if it was produced and not taken yet.
    pub(crate) fn take(&self) -> Option<JoinResult<T>> {
        if !self.state.get(State::OUTPUT_READY) || !self.state.claim(State::OUTPUT_TAKEN) {
            return None;
        }

        unsafe { (*self.value.get()).take() }
    }

    pub fn is_filled(&self) -> bool {
        self.state.get(State::OUTPUT_READY)
    }
}

/// A body paired with the slot its output goes to.
pub struct Task<T: Runnable> {
    runnable: T,
    slot: Arc<Slot<T::Output>>,
}

impl<T: Runnable> Task<T> {
    /// Creates the task and returns the caller's handle on its slot.
    pub fn new(runnable: T) -> (Self, Arc<Slot<T::Output>>) {
        let slot = Arc::new(Slot::new());
        let task = Self {
            runnable,
            slot: slot.clone(),
        };

        (task, slot)
    }

    pub fn run(self) {
        let Task { runnable, slot } = self;
        slot.state.set(State::RUNNING, true);

        let output = catch_unwind(AssertUnwindSafe(|| runnable.run()));

        if output.is_err() {
            tracing_feat!(warn!("Background body panicked, result slot holds the payload"));
        }

        slot.fill(output);
        slot.state.set(State::RUNNING, false);
        slot.state.set(State::FINISHED, true);
    }
}
