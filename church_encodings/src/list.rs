//! List encoding.
//!
//! A list is its own right fold: given `combine` and a seed it computes
//! `combine(x1, combine(x2, ... combine(xn, seed)))`. Folding with
//! `cons` and `nil` rebuilds the list.
//!
//! Nothing here fails. An empty head, tail or out-of-range index is
//! `none`.

use std::rc::Rc;

use crate::boolean::{not, Bool};
use crate::bounce::Bounce;
use crate::link::{reach, Node};
use crate::nat::{is_zero, succ, zero, Nat};
use crate::option::{self, none, some, Maybe};
use crate::pair::{first, pair, second, Pair};
use crate::term::{erase, reveal, Term};

type Combine<T> = Rc<dyn Fn(T, Term) -> Term>;
type Apply<T> = dyn Fn(Combine<T>, Term) -> Bounce;

/// A Church list of `T`.
pub struct List<T>(Rc<Node<Apply<T>>>);

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> List<T> {
    /// Fold from the right, combining each element with the folded rest.
    pub fn fold<R: 'static>(&self, combine: impl Fn(T, R) -> R + 'static, seed: R) -> R {
        let combine: Combine<T> =
            Rc::new(move |head: T, acc: Term| erase(combine(head, reveal::<R>(acc))));
        reveal(self.unfold(combine, erase(seed)).run())
    }

    fn unfold(&self, combine: Combine<T>, seed: Term) -> Bounce {
        (self.0.apply())(combine, seed)
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

pub fn nil<T: 'static>() -> List<T> {
    let apply: Box<Apply<T>> = Box::new(|_combine: Combine<T>, seed: Term| Bounce::Done(seed));
    List(Node::leaf(apply))
}

/// `head` in front of `tail`. The closure reaches `tail` through its
/// link, so dropping a long list does not recurse.
pub fn cons<T: Clone + 'static>(head: T, tail: &List<T>) -> List<T> {
    List(Node::linked(&tail.0, move |below| -> Box<Apply<T>> {
        Box::new(move |combine: Combine<T>, seed: Term| {
            let rest = List(reach(&below));
            let element = head.clone();
            let outer = Rc::clone(&combine);
            Bounce::defer(move || rest.unfold(combine, seed))
                .then(move |acc| Bounce::Done(outer(element, acc)))
        })
    }))
}

// ---------------------------------------------------------------------------
// Fold-derived operations
// ---------------------------------------------------------------------------

/// Elements of `l1` followed by elements of `l2`.
pub fn append<T: Clone + 'static>(l1: &List<T>, l2: &List<T>) -> List<T> {
    l1.fold(|h, rest: List<T>| cons(h, &rest), l2.clone())
}

pub fn length<T: 'static>(l: &List<T>) -> Nat {
    l.fold(|_, n: Nat| succ(&n), zero())
}

pub fn is_nil<T: 'static>(l: &List<T>) -> Bool {
    is_zero(&length(l))
}

pub fn is_non_empty<T: 'static>(l: &List<T>) -> Bool {
    not(&is_nil(l))
}

/// Keep the elements whose predicate selects "keep", in order.
pub fn filter<T, P>(l: &List<T>, predicate: P) -> List<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> Bool + 'static,
{
    l.fold(
        move |h, rest: List<T>| {
            let keep = predicate(&h);
            keep.select(cons(h, &rest), rest)
        },
        nil(),
    )
}

pub fn map<T, U, F>(l: &List<T>, f: F) -> List<U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(T) -> U + 'static,
{
    l.fold(move |h, rest: List<U>| cons(f(h), &rest), nil())
}

/// Concatenate the sublists `f` produces for each element, in order.
pub fn flat_map<T, U, F>(l: &List<T>, f: F) -> List<U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(T) -> List<U> + 'static,
{
    l.fold(move |h, rest: List<U>| append(&f(h), &rest), nil())
}

/// Concatenate a list of lists.
pub fn flatten<T: Clone + 'static>(ls: &List<List<T>>) -> List<T> {
    flat_map(ls, |l| l)
}

// ---------------------------------------------------------------------------
// Partial accessors
// ---------------------------------------------------------------------------

/// The leftmost element, if any.
pub fn head<T: Clone + 'static>(l: &List<T>) -> Maybe<T> {
    l.fold(|h, _: Maybe<T>| some(h), none())
}

/// Everything after the first element, if there is a first element.
///
/// The fold carries `(list so far, tail of list so far)`: each step
/// conses onto the first field and shifts the old first field into the
/// second, the way `pred` shifts its pair.
pub fn tail<T: Clone + 'static>(l: &List<T>) -> Maybe<List<T>> {
    let shifted = l.fold(
        |h, acc: Pair<List<T>, Maybe<List<T>>>| {
            let built = first(&acc);
            pair(cons(h, &built), some(built))
        },
        pair(nil(), none()),
    );
    second(&shifted)
}

/// The element at index `i`: `tail` applied `i` times, then `head`.
/// Short-circuits to `none` once a `tail` runs off the end.
pub fn at<T: Clone + 'static>(l: &List<T>, i: &Nat) -> Maybe<T> {
    let dropped = i.fold(
        |o: Maybe<List<T>>| option::flat_map(&o, |rest| tail(&rest)),
        some(l.clone()),
    );
    option::flat_map(&dropped, |rest| head(&rest))
}
