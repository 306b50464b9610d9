pub trait HookFn<T>: Fn() -> T + Send + Sync + 'static {}
impl<F, T> HookFn<T> for F
where
    F: Fn() -> T + Send + Sync + 'static
{}

pub trait NameFn: Fn(usize) -> String + Send + Sync + 'static {}
impl<F> NameFn for F
where
    F: Fn(usize) -> String + Send + Sync + 'static
{}

/// Hooks called on background thread events
pub struct Hooks {
    /// Called when a thread is created with the unit id, must provide a name for the thread
    name_fn: Box<dyn NameFn>,
    /// Called on the background thread before the unit runs
    on_start_fn: Option<Box<dyn HookFn<()>>>,
    /// Called on the background thread after the unit ran, even if it panicked
    on_stop_fn: Option<Box<dyn HookFn<()>>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self {
            name_fn: Box::new(|id| format!("Thread-{id}")),
            on_start_fn: None,
            on_stop_fn: None,
        }
    }

    /// Set the name function
    pub fn set_name_fn(&mut self, name_fn: impl NameFn) -> &mut Self {
        self.name_fn = Box::new(name_fn);
        self
    }

    /// Set the on_start function
    pub fn set_on_start_fn(&mut self, on_start_fn: impl HookFn<()>) -> &mut Self {
        self.on_start_fn = Some(Box::new(on_start_fn));
        self
    }

    /// Set the on_stop function
    pub fn set_on_stop_fn(&mut self, on_stop_fn: impl HookFn<()>) -> &mut Self {
        self.on_stop_fn = Some(Box::new(on_stop_fn));
        self
    }

    pub(crate) fn call_name_fn(&self, id: usize) -> String {
        (self.name_fn)(id)
    }

    pub(crate) fn call_on_start_fn(&self) {
        if let Some(ref f) = self.on_start_fn {
            f();
        }
    }

    pub(crate) fn call_on_stop_fn(&self) {
        if let Some(ref f) = self.on_stop_fn {
            f();
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}
