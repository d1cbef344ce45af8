//! Native ↔ Church conversion bridge.
//!
//! Every encode direction builds the value the slow, reference way
//! (succ from zero, cons from the right) so it can serve as ground
//! truth for the operations under test. Every decode direction applies
//! the Church value to native continuations.

use std::collections::VecDeque;

use church_encodings::boolean::{fls, tru, Bool};
use church_encodings::list::{cons, nil, List};
use church_encodings::nat::{succ, zero, Nat};
use church_encodings::option::{none, some, Maybe};
use church_encodings::pair::{first, pair, second, Pair};

// ---------------------------------------------------------------------------
// Booleans
// ---------------------------------------------------------------------------

pub fn encode_bool(b: bool) -> Bool {
    if b {
        tru()
    } else {
        fls()
    }
}

pub fn decode_bool(b: &Bool) -> bool {
    b.select(true, false)
}

// ---------------------------------------------------------------------------
// Pairs
// ---------------------------------------------------------------------------

pub fn encode_pair<A, B>((a, b): (A, B)) -> Pair<A, B>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    pair(a, b)
}

pub fn decode_pair<A: 'static, B: 'static>(p: &Pair<A, B>) -> (A, B) {
    (first(p), second(p))
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// `succ` applied `n` times to `zero`.
pub fn encode_number(n: u64) -> Nat {
    let mut acc = zero();
    for _ in 0..n {
        acc = succ(&acc);
    }
    acc
}

pub fn decode_number(n: &Nat) -> u64 {
    n.fold(|k: u64| k + 1, 0)
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// Cons the items onto `nil` from the right, preserving order.
pub fn encode_list<T, I>(items: I) -> List<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    items
        .into_iter()
        .rev()
        .fold(nil(), |tail, head| cons(head, &tail))
}

/// Right fold that prepends each element to a native sequence.
pub fn decode_list<T: 'static>(l: &List<T>) -> Vec<T> {
    let items = l.fold(
        |head, mut acc: VecDeque<T>| {
            acc.push_front(head);
            acc
        },
        VecDeque::new(),
    );
    items.into()
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

pub fn encode_option<T: Clone + 'static>(o: Option<T>) -> Maybe<T> {
    match o {
        Some(x) => some(x),
        None => none(),
    }
}

pub fn decode_option<T: 'static>(o: &Maybe<T>) -> Option<T> {
    o.fold(Some, || None)
}
