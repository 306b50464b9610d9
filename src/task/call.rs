use std::sync::Arc;

/// A function bound to the argument it will be invoked with.
///
/// Built once per invocation of a wrapped function and consumed by the
/// background unit that runs it. Several arguments travel as a tuple.
pub struct Call<F, A> {
    function: Arc<F>,
    args: A,
}

impl<F, A> Call<F, A> {
    pub fn new(function: Arc<F>, args: A) -> Self {
        Self { function, args }
    }

    pub fn invoke<R>(self) -> R
    where
        F: Fn(A) -> R,
    {
        let Call { function, args } = self;
        function(args)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Call;

    #[test]
    fn invoke_with_tuple() {
        let add = Arc::new(|(a, b): (i32, i32)| a + b);
        let first = Call::new(add.clone(), (2, 3));
        let second = Call::new(add, (10, -4));

        assert_eq!(second.invoke(), 6);
        assert_eq!(first.invoke(), 5);
    }
}
