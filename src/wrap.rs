use std::{io, sync::Arc, time::Duration};

use crate::{
    executor::{Executor, Join, Threads, Unit},
    join::JoinHandle,
    macros::delay_decorator,
    task::{state::State, Call, Runnable, Task},
    JoinResult,
};

/// Turns plain functions into functions that run on a background unit.
///
/// Every call of a wrapped function binds its argument into a fresh
/// [`Call`] and hands it to a fresh unit of the executor, after the
/// configured delay if any. Nothing is pooled or reused between calls.
pub struct Wrapper<E: Executor = Threads> {
    executor: Arc<E>,
    delay: Option<Duration>,
}

impl Wrapper {
    /// Wrapper over the global thread executor.
    pub fn new() -> Self {
        Self::with_executor(Threads::global().clone())
    }
}

impl Default for Wrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor> Clone for Wrapper<E> {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor.clone(),
            delay: self.delay,
        }
    }
}

impl<E: Executor> Wrapper<E> {
    pub fn with_executor(executor: E) -> Self {
        Self::with_shared_executor(Arc::new(executor))
    }

    pub fn with_shared_executor(executor: Arc<E>) -> Self {
        Self {
            executor,
            delay: None,
        }
    }

    /// Delays every call by `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    fn launch(&self, unit: Unit) -> io::Result<E::Handle> {
        match self.delay {
            Some(delay) => self.executor.spawn_after(delay, unit),
            None => self.executor.spawn(unit),
        }
    }

    /// Runs `runnable` on a new unit and returns a handle to its output.
    pub fn spawn<T: Runnable>(&self, runnable: T, daemon: bool) -> io::Result<JoinHandle<T::Output, E::Handle>> {
        let (task, slot) = Task::new(runnable);

        // set before the body can start running
        slot.state.set(State::STARTED, true);
        let handle = self
            .launch(Unit::new(move || task.run()).daemon(daemon))
            .inspect_err(|_| slot.state.set(State::STARTED, false))?;

        Ok(JoinHandle::new(handle, slot))
    }

    fn capture<F, A, R>(&self, call: Call<F, A>) -> JoinHandle<R, E::Handle>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        self.spawn(move || call.invoke(), false)
            .unwrap_or_else(|e| panic!("Failed to spawn thread: {e}"))
    }

    /// Starts a unit whose output is discarded. A panic stays on the unit's
    /// thread and is reported by the panic hook.
    fn start<F, A, R>(&self, call: Call<F, A>, daemon: bool) -> E::Handle
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
    {
        let unit = Unit::new(move || {
            call.invoke();
        });

        self.launch(unit.daemon(daemon))
            .unwrap_or_else(|e| panic!("Failed to spawn thread: {e}"))
    }

    /// Calls return immediately, the output is discarded.
    pub fn detached<F, A, R>(&self, function: F) -> impl Fn(A) + Send + Sync + 'static + use<E, F, A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        let this = self.clone();
        let function = Arc::new(function);

        move |args| {
            drop(this.start(Call::new(function.clone(), args), false));
        }
    }

    /// Calls block until the function has returned, the output is discarded.
    pub fn joined<F, A, R>(&self, function: F) -> impl Fn(A) + Send + Sync + 'static + use<E, F, A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        let this = self.clone();
        let function = Arc::new(function);

        move |args| {
            // a panic was already reported on the unit's thread
            let _ = this.start(Call::new(function.clone(), args), false).join();
        }
    }

    /// Like [`Wrapper::detached`] on a daemon unit.
    pub fn daemon<F, A, R>(&self, function: F) -> impl Fn(A) + Send + Sync + 'static + use<E, F, A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        let this = self.clone();
        let function = Arc::new(function);

        move |args| {
            drop(this.start(Call::new(function.clone(), args), true));
        }
    }

    /// Calls block until the function has returned and yield its output,
    /// or `None` if it panicked.
    pub fn with_return_value<F, A, R>(&self, function: F) -> impl Fn(A) -> Option<R> + Send + Sync + 'static + use<E, F, A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        let this = self.clone();
        let function = Arc::new(function);

        move |args| this.capture(Call::new(function.clone(), args)).join()
    }

    /// Like [`Wrapper::with_return_value`] but hands a panic payload back
    /// to the caller.
    pub fn with_result<F, A, R>(&self, function: F) -> impl Fn(A) -> JoinResult<R> + Send + Sync + 'static + use<E, F, A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: Send + 'static,
        R: Send + 'static,
    {
        let this = self.clone();
        let function = Arc::new(function);

        move |args| this.capture(Call::new(function.clone(), args)).join_result()
    }
}

delay_decorator! {
    /// Runs the wrapped function after a delay, calls return immediately.
    Delay => detached -> ()
}

delay_decorator! {
    /// Runs the wrapped function after a delay, calls block until it returned.
    DelayJoin => joined -> ()
}

delay_decorator! {
    /// Runs the wrapped function after a delay on a daemon unit.
    DelayDaemon => daemon -> ()
}

delay_decorator! {
    /// Runs the wrapped function after a delay and returns its output,
    /// `None` if it panicked.
    DelayWithReturnValue => with_return_value -> Option<R>
}

delay_decorator! {
    /// Runs the wrapped function after a delay and returns its output or
    /// panic payload.
    DelayWithResult => with_result -> JoinResult<R>
}
