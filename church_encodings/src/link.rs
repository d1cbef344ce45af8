//! Owned links between a numeral or list and the value one step down.
//!
//! A `succ` or `cons` closure refers to its predecessor only through a
//! `Weak` handle. The strong reference lives in the node's `below`
//! field, where `Drop` can release a long chain one link at a time
//! instead of recursing once per link.

use std::rc::{Rc, Weak};

pub(crate) struct Node<F: ?Sized> {
    below: Option<Rc<Node<F>>>,
    apply: Box<F>,
}

impl<F: ?Sized> Node<F> {
    /// A node with nothing below it (`zero`, `nil`).
    pub(crate) fn leaf(apply: Box<F>) -> Rc<Self> {
        Rc::new(Node { below: None, apply })
    }

    /// A node one step above `below`. `make` receives the handle its
    /// closure uses to reach `below`.
    pub(crate) fn linked(below: &Rc<Self>, make: impl FnOnce(Weak<Self>) -> Box<F>) -> Rc<Self> {
        let apply = make(Rc::downgrade(below));
        Rc::new(Node {
            below: Some(Rc::clone(below)),
            apply,
        })
    }

    pub(crate) fn apply(&self) -> &F {
        &self.apply
    }
}

/// Reach the node below from inside a closure. The node that owns the
/// closure keeps `below` alive, so this cannot fail while it runs.
pub(crate) fn reach<F: ?Sized>(below: &Weak<Node<F>>) -> Rc<Node<F>> {
    match below.upgrade() {
        Some(node) => node,
        None => panic!("Encoding invariant violated: link outlived the value above it"),
    }
}

impl<F: ?Sized> Drop for Node<F> {
    fn drop(&mut self) {
        let mut next = self.below.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                // Detach before `inner` drops so its own drop stays shallow.
                Ok(mut inner) => inner.below.take(),
                // Still shared: whoever holds it releases the rest.
                Err(_) => None,
            };
        }
    }
}
