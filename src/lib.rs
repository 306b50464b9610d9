//! Run plain functions on background threads.
//!
//! Each wrapper turns a `Fn(A) -> R` into a function that, on every call,
//! binds its argument and runs it on a fresh OS thread, optionally after a
//! delay. Depending on the wrapper the call returns right away, waits for
//! the function, or waits and hands back its output.
//!
//! | Wrapper | Blocks | Output | Delay | Daemon |
//! |---|---|---|---|---|
//! | [`thread`] | no | no | no | no |
//! | [`thread_join`] | yes | no | no | no |
//! | [`thread_daemon`] | no | no | no | yes |
//! | [`thread_with_return_value`] | yes | yes | no | no |
//! | [`delay`] | no | no | yes | no |
//! | [`delay_join`] | yes | no | yes | no |
//! | [`delay_daemon`] | no | no | yes | yes |
//! | [`delay_with_return_value`] | yes | yes | yes | no |
//!
//! Several arguments are passed as a tuple:
//!
//! ```
//! let add = offthread::thread_with_return_value(|(a, b): (i32, i32)| a + b);
//! assert_eq!(add((2, 3)), Some(5));
//! ```
//!
//! A panic inside a wrapped function never reaches the caller. The capturing
//! wrappers return `None` instead; [`thread_with_result`] and
//! [`delay_with_result`] hand the panic payload back.
//!
//! Rust does not wait for background threads when `main` returns. Call
//! [`wait_non_daemon`] before exiting to let non-daemon units finish.
//! Started units cannot be cancelled.

use std::{any::Any, time::Duration};

pub mod builder;
mod condvar;
mod core;
mod defer;
pub mod executor;
pub mod hooks;
pub mod join;
mod macros;
pub mod task;
pub mod timer;
mod worker;
pub mod wrap;


pub use executor::{Executor, Join, Threads, Unit};
pub use join::JoinHandle;
pub use task::Runnable;
pub use wrap::{Delay, DelayDaemon, DelayJoin, DelayWithResult, DelayWithReturnValue, Wrapper};

pub type JoinResult<T> = Result<T, Box<dyn Any + Send + 'static>>;

/// Runs `function` on a new thread, calls return immediately.
pub fn thread<F, A, R>(function: F) -> impl Fn(A) + Send + Sync + 'static
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Wrapper::new().detached(function)
}

/// Runs `function` on a new thread and waits for it to return.
pub fn thread_join<F, A, R>(function: F) -> impl Fn(A) + Send + Sync + 'static
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Wrapper::new().joined(function)
}

/// Runs `function` on a new daemon thread, calls return immediately.
pub fn thread_daemon<F, A, R>(function: F) -> impl Fn(A) + Send + Sync + 'static
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Wrapper::new().daemon(function)
}

/// Runs `function` on a new thread and returns its output.
/// The call blocks until the thread is joined; `None` if `function` panicked.
pub fn thread_with_return_value<F, A, R>(function: F) -> impl Fn(A) -> Option<R> + Send + Sync + 'static
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Wrapper::new().with_return_value(function)
}

/// Same as [`thread_with_return_value`] but returns the panic payload
/// instead of `None`.
pub fn thread_with_result<F, A, R>(function: F) -> impl Fn(A) -> JoinResult<R> + Send + Sync + 'static
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Wrapper::new().with_result(function)
}

/// Waits `delay` before calling the wrapped function.
pub fn delay(delay: Duration) -> Delay {
    Delay::new(delay)
}

/// Waits `delay` before calling the wrapped function and joins the thread.
pub fn delay_join(delay: Duration) -> DelayJoin {
    DelayJoin::new(delay)
}

/// Waits `delay` before calling the wrapped function in a daemon thread.
pub fn delay_daemon(delay: Duration) -> DelayDaemon {
    DelayDaemon::new(delay)
}

/// Waits `delay` before returning the output of the wrapped function.
pub fn delay_with_return_value(delay: Duration) -> DelayWithReturnValue {
    DelayWithReturnValue::new(delay)
}

/// Same as [`delay_with_return_value`] but returns the panic payload
/// instead of `None`.
pub fn delay_with_result(delay: Duration) -> DelayWithResult {
    DelayWithResult::new(delay)
}

/// Blocks until every non-daemon unit started through the free functions
/// has finished.
pub fn wait_non_daemon() {
    Threads::global().wait_non_daemon();
}
