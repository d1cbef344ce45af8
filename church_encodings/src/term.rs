//! Type-erased carrier for values travelling through encoding closures.
//!
//! A closure cannot be generic over its result type, but a Church value
//! must be usable at any result type. The closures therefore pass
//! `Term`s around and the typed faces (`select`, `fold`, ...) erase on
//! the way in and restore on the way out. The only `Term`s a closure
//! ever sees are the ones its caller erased, so `reveal` cannot fail
//! unless an encoding is broken.

use std::any::{type_name, Any};

pub(crate) type Term = Box<dyn Any>;

pub(crate) fn erase<T: 'static>(value: T) -> Term {
    Box::new(value)
}

/// Restore a `Term` to the type it was erased from. Panics on mismatch.
pub(crate) fn reveal<T: 'static>(term: Term) -> T {
    match term.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => panic!(
            "Encoding invariant violated: term is not a {}",
            type_name::<T>()
        ),
    }
}
