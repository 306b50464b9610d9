/// Executes the provided block of code if the `tracing` feature is enabled.
macro_rules! tracing_feat {
    ($($tree:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            use tracing::*;
            $($tree)*
        }
    };
}

/// Declares a decorator factory that applies a fixed delay before running
/// the wrapped function through the given [`Wrapper`](crate::wrap::Wrapper) mode.
macro_rules! delay_decorator {
    ($(#[$meta:meta])* $name:ident => $mode:ident -> $ret:ty) => {
        $(#[$meta])*
        pub struct $name<E: Executor = Threads> {
            wrapper: Wrapper<E>,
        }

        impl $name {
            pub fn new(delay: Duration) -> Self {
                Self {
                    wrapper: Wrapper::new().after(delay),
                }
            }
        }

        impl<E: Executor> $name<E> {
            /// Uses `executor` instead of the global thread executor.
            pub fn with_executor(delay: Duration, executor: Arc<E>) -> Self {
                Self {
                    wrapper: Wrapper::with_shared_executor(executor).after(delay),
                }
            }

            pub fn delay(&self) -> Duration {
                self.wrapper.delay().unwrap_or_default()
            }

            pub fn wrap<F, A, R>(&self, function: F) -> impl Fn(A) -> $ret + Send + Sync + 'static + use<E, F, A, R>
            where
                F: Fn(A) -> R + Send + Sync + 'static,
                A: Send + 'static,
                R: Send + 'static,
            {
                self.wrapper.$mode(function)
            }
        }

        impl<E: Executor> Clone for $name<E> {
            fn clone(&self) -> Self {
                Self {
                    wrapper: self.wrapper.clone(),
                }
            }
        }
    };
}

pub(crate) use {delay_decorator, tracing_feat};
