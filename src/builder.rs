use crate::{core::Core, executor::Threads, hooks::Hooks};

/// Builder for a [`Threads`] executor.
pub struct ThreadsBuilder {
    /// Hooks to be executed on the background threads.
    pub(crate) hooks: Hooks,
    /// Stack size for the threads.
    pub(crate) stack_size: Option<usize>,
}

impl ThreadsBuilder {
    pub fn new() -> Self {
        Self {
            hooks: Hooks::new(),
            stack_size: None,
        }
    }

    /// Sets the stack size for background threads.
    pub fn stack_size(&mut self, size: usize) -> &mut Self {
        self.stack_size = Some(size);
        self
    }

    /// Sets the hooks to be executed on the background threads.
    pub fn with_hooks(&mut self, fun: impl FnOnce(&mut Hooks)) -> &mut Self {
        fun(&mut self.hooks);

        self
    }

    /// Builds the executor, leaving default hooks behind in the builder.
    pub fn build(&mut self) -> Threads {
        let builder = std::mem::take(self);

        Threads {
            core: Core::new(builder),
        }
    }
}

impl Default for ThreadsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
