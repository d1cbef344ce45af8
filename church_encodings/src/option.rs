//! Option encoding.
//!
//! An option is applied to two continuations: `on_some` receives the
//! payload, `on_none` takes nothing. `none` runs only `on_none`,
//! `some(x)` runs only `on_some(x)`. Absence is data here, never an
//! error.

use std::rc::Rc;

use crate::boolean::{fls, tru, Bool};
use crate::term::{erase, reveal, Term};

type OnSome<T> = Box<dyn FnOnce(T) -> Term>;
type OnNone = Box<dyn FnOnce() -> Term>;

/// A Church option holding at most one `T`.
pub struct Maybe<T>(Rc<dyn Fn(OnSome<T>, OnNone) -> Term>);

impl<T> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> Maybe<T> {
    /// Apply the option: exactly one of the continuations runs.
    pub fn fold<R: 'static>(
        &self,
        on_some: impl FnOnce(T) -> R + 'static,
        on_none: impl FnOnce() -> R + 'static,
    ) -> R {
        reveal((self.0)(
            Box::new(move |x: T| erase(on_some(x))),
            Box::new(move || erase(on_none())),
        ))
    }
}

pub fn none<T: 'static>() -> Maybe<T> {
    Maybe(Rc::new(|_on_some: OnSome<T>, on_none: OnNone| on_none()))
}

pub fn some<T: Clone + 'static>(x: T) -> Maybe<T> {
    Maybe(Rc::new(move |on_some: OnSome<T>, _on_none: OnNone| {
        on_some(x.clone())
    }))
}

pub fn is_none<T: 'static>(o: &Maybe<T>) -> Bool {
    o.fold(|_| fls(), tru)
}

pub fn is_some<T: 'static>(o: &Maybe<T>) -> Bool {
    o.fold(|_| tru(), fls)
}

/// The payload, or `default` when absent.
pub fn get_or_else<T: 'static>(o: &Maybe<T>, default: T) -> T {
    o.fold(|x| x, move || default)
}

/// Apply `f` under `some`; `none` stays `none` and `f` never runs.
pub fn map<T, U, F>(o: &Maybe<T>, f: F) -> Maybe<U>
where
    T: 'static,
    U: Clone + 'static,
    F: FnOnce(T) -> U + 'static,
{
    o.fold(move |x| some(f(x)), none)
}

/// Monadic bind: `f` produces the next option and is skipped on `none`.
pub fn flat_map<T, U, F>(o: &Maybe<T>, f: F) -> Maybe<U>
where
    T: 'static,
    U: 'static,
    F: FnOnce(T) -> Maybe<U> + 'static,
{
    o.fold(f, none)
}
