use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a background unit, as seen through its result slot.
pub struct State(AtomicU8);

impl State {
    /// The unit has been handed to an executor.
    pub const STARTED: u8 = 0b0000_0001;
    /// The body is executing.
    pub const RUNNING: u8 = 0b0000_0010;
    /// The body returned or panicked.
    pub const FINISHED: u8 = 0b0000_0100;

    /// A writer owns the slot.
    pub const OUTPUT_CLAIMED: u8 = 0b0000_1000;
    /// The slot holds an output.
    pub const OUTPUT_READY: u8 = 0b0001_0000;
    /// The output has been taken by the caller.
    pub const OUTPUT_TAKEN: u8 = 0b0010_0000;

    pub fn new() -> Self {
        State(AtomicU8::new(0))
    }

    /// Sets the specified flag bit with the provided value.
    pub fn set(&self, item: u8, value: bool) {
        if value {
            self.0.fetch_or(item, Ordering::AcqRel);
        } else {
            self.0.fetch_and(!item, Ordering::AcqRel);
        }
    }

    /// Sets the specified flag bit, returns whether this call was the one
    /// that set it.
    pub fn claim(&self, item: u8) -> bool {
        self.0.fetch_or(item, Ordering::AcqRel) & item == 0
    }

    /// Checks if the specified flag bit is set.
    pub fn get(&self, item: u8) -> bool {
        self.0.load(Ordering::Acquire) & item != 0
    }
}
