//! Pair encoding: two values glued behind a boolean selector.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::boolean::{fls, tru, Bool};
use crate::term::{erase, reveal, Term};

/// A Church pair of an `A` and a `B`.
pub struct Pair<A, B> {
    apply: Rc<dyn Fn(&Bool) -> Term>,
    components: PhantomData<fn() -> (A, B)>,
}

impl<A, B> Clone for Pair<A, B> {
    fn clone(&self) -> Self {
        Self {
            apply: Rc::clone(&self.apply),
            components: PhantomData,
        }
    }
}

/// Capture `a` and `b`; applying the pair to a selector applies the
/// selector to them.
pub fn pair<A, B>(a: A, b: B) -> Pair<A, B>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    Pair {
        apply: Rc::new(move |selector: &Bool| {
            selector.choose(erase(a.clone()), erase(b.clone()))
        }),
        components: PhantomData,
    }
}

pub fn first<A: 'static, B>(p: &Pair<A, B>) -> A {
    reveal((p.apply)(&tru()))
}

pub fn second<A, B: 'static>(p: &Pair<A, B>) -> B {
    reveal((p.apply)(&fls()))
}
