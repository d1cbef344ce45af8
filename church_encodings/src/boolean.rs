//! Boolean encoding.
//!
//! A boolean is a two-argument selector: `tru` returns its first
//! argument, `fls` its second. Every other boolean is built from those
//! two by rearranging what gets selected.

use std::rc::Rc;

use crate::term::{erase, reveal, Term};

/// A Church boolean.
#[derive(Clone)]
pub struct Bool(Rc<dyn Fn(Term, Term) -> Term>);

impl Bool {
    pub(crate) fn choose(&self, on_true: Term, on_false: Term) -> Term {
        (self.0)(on_true, on_false)
    }

    /// Apply the boolean to two values, returning exactly one of them.
    pub fn select<T: 'static>(&self, on_true: T, on_false: T) -> T {
        reveal(self.choose(erase(on_true), erase(on_false)))
    }

    /// Select between two thunks and run only the selected one.
    pub fn branch<T: 'static>(
        &self,
        on_true: impl FnOnce() -> T + 'static,
        on_false: impl FnOnce() -> T + 'static,
    ) -> T {
        let chosen = self.select::<Box<dyn FnOnce() -> T>>(Box::new(on_true), Box::new(on_false));
        chosen()
    }
}

/// The boolean that selects its first argument.
pub fn tru() -> Bool {
    Bool(Rc::new(|on_true: Term, _on_false: Term| on_true))
}

/// The boolean that selects its second argument.
pub fn fls() -> Bool {
    Bool(Rc::new(|_on_true: Term, on_false: Term| on_false))
}

/// Swap the two continuations of `b`.
pub fn not(b: &Bool) -> Bool {
    let b = b.clone();
    Bool(Rc::new(move |on_true: Term, on_false: Term| {
        b.choose(on_false, on_true)
    }))
}

/// `b2` when `b1` is true, otherwise false.
pub fn and(b1: &Bool, b2: &Bool) -> Bool {
    b1.select(b2.clone(), fls())
}

/// True when `b1` is true, otherwise `b2`.
pub fn or(b1: &Bool, b2: &Bool) -> Bool {
    b1.select(tru(), b2.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(b: &Bool) -> bool {
        b.select(true, false)
    }

    fn both() -> [(Bool, bool); 2] {
        [(tru(), true), (fls(), false)]
    }

    #[test]
    fn test_constructors_select() {
        assert_eq!(tru().select("first", "second"), "first");
        assert_eq!(fls().select("first", "second"), "second");
    }

    #[test]
    fn test_not() {
        for (b, expected) in both() {
            assert_eq!(native(&not(&b)), !expected);
        }
        assert!(native(&not(&not(&tru()))));
    }

    #[test]
    fn test_and_or_truth_tables() {
        for (b1, n1) in both() {
            for (b2, n2) in both() {
                assert_eq!(native(&and(&b1, &b2)), n1 && n2);
                assert_eq!(native(&or(&b1, &b2)), n1 || n2);
            }
        }
    }

    #[test]
    fn test_branch_runs_only_selected_thunk() {
        let value = tru().branch(|| 1, || panic!("unselected branch ran"));
        assert_eq!(value, 1);
        let value = fls().branch(|| panic!("unselected branch ran"), || 2);
        assert_eq!(value, 2);
    }
}
