/// A one-shot body executed by a background unit.
pub trait Runnable: Send + 'static {
    type Output: Send + 'static;

    fn run(self) -> Self::Output;
}

impl<T, R> Runnable for T
where
    T: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    type Output = R;

    fn run(self) -> Self::Output {
        self()
    }
}
