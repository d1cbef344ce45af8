//! Trampoline for stack-safe folds.
//!
//! A numeral N or a list of length N is a chain of N closures, each
//! deferring to its predecessor. Evaluated directly that is N native
//! frames. Instead each closure returns a `Bounce` describing the next
//! step, and `run` drives the chain with a heap-allocated continuation
//! stack.

use crate::term::Term;

type Thunk = Box<dyn FnOnce() -> Bounce>;
type Continuation = Box<dyn FnOnce(Term) -> Bounce>;

pub(crate) enum Bounce {
    /// Evaluation finished with a value.
    Done(Term),
    /// Evaluation continues by calling the thunk.
    Defer(Thunk),
    /// Evaluate the inner step, then feed its value to the continuation.
    Then(Box<Bounce>, Continuation),
}

impl Bounce {
    pub(crate) fn defer(thunk: impl FnOnce() -> Bounce + 'static) -> Self {
        Bounce::Defer(Box::new(thunk))
    }

    pub(crate) fn then(self, continuation: impl FnOnce(Term) -> Bounce + 'static) -> Self {
        Bounce::Then(Box::new(self), Box::new(continuation))
    }

    /// Drive the computation to its final value.
    pub(crate) fn run(self) -> Term {
        let mut pending: Vec<Continuation> = Vec::new();
        let mut current = self;
        loop {
            current = match current {
                Bounce::Done(value) => match pending.pop() {
                    Some(continuation) => continuation(value),
                    None => return value,
                },
                Bounce::Defer(thunk) => thunk(),
                Bounce::Then(inner, continuation) => {
                    pending.push(continuation);
                    *inner
                }
            };
        }
    }
}
