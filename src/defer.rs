/// Runs a closure when dropped, including while unwinding.
#[doc(hidden)]
pub struct Defer<F: FnOnce()> {
    inner: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    #[doc(hidden)]
    pub fn new(f: F) -> Self {
        Self { inner: Some(f) }
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(f) = self.inner.take() {
            f();
        }
    }
}

macro_rules! defer {
    (move || $($tree:tt)*) => {
        let _defer = $crate::defer::Defer::new(move || $($tree)*);
    };
    (|| $($tree:tt)*) => {
        let _defer = $crate::defer::Defer::new(|| $($tree)*);
    };
}

pub(crate) use defer;
