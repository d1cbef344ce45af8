//! Natural-number encoding.
//!
//! The numeral N applies a step function N times to a seed. Zero leaves
//! the seed alone and `succ(n)` applies the step once more than `n`.
//! Every operation below is a fold over some numeral's own structure.
//!
//! Subtraction saturates at zero. Division and remainder by zero are
//! reported as `ArithmeticError::DivisionByZero` instead of recursing
//! forever.

use std::rc::Rc;

use crate::boolean::{and, fls, not, tru, Bool};
use crate::bounce::Bounce;
use crate::error::ArithmeticError;
use crate::link::{reach, Node};
use crate::pair::{first, pair, second, Pair};
use crate::term::{erase, reveal, Term};

type Step = Rc<dyn Fn(Term) -> Term>;
type Apply = dyn Fn(Step, Term) -> Bounce;

/// A Church numeral.
#[derive(Clone)]
pub struct Nat(Rc<Node<Apply>>);

impl Nat {
    /// Apply `step` to `seed` as many times as this numeral denotes.
    pub fn fold<R: 'static>(&self, step: impl Fn(R) -> R + 'static, seed: R) -> R {
        let step: Step = Rc::new(move |acc: Term| erase(step(reveal::<R>(acc))));
        reveal(self.unfold(step, erase(seed)).run())
    }

    fn unfold(&self, step: Step, seed: Term) -> Bounce {
        (self.0.apply())(step, seed)
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

pub fn zero() -> Nat {
    let apply: Box<Apply> = Box::new(|_step: Step, seed: Term| Bounce::Done(seed));
    Nat(Node::leaf(apply))
}

/// One more application of the step than `n`. The closure reaches `n`
/// through its link, so dropping a large numeral does not recurse.
pub fn succ(n: &Nat) -> Nat {
    Nat(Node::linked(&n.0, |below| -> Box<Apply> {
        Box::new(move |step: Step, seed: Term| {
            let inner = Nat(reach(&below));
            let outer = Rc::clone(&step);
            Bounce::defer(move || inner.unfold(step, seed))
                .then(move |acc| Bounce::Done(outer(acc)))
        })
    }))
}

macro_rules! numerals {
    ($($name:ident = succ($prev:ident);)*) => {
        $(
            pub fn $name() -> Nat {
                succ(&$prev())
            }
        )*
    };
}

numerals! {
    one = succ(zero);
    two = succ(one);
    three = succ(two);
    four = succ(three);
    five = succ(four);
    six = succ(five);
    seven = succ(six);
    eight = succ(seven);
    nine = succ(eight);
    ten = succ(nine);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Predecessor by pair shifting: `(current, previous)` starts at
/// `(0, 0)` and each step moves `current` into `previous` and
/// increments it. `pred(0)` is 0.
pub fn pred(n: &Nat) -> Nat {
    let shifted = n.fold(
        |p: Pair<Nat, Nat>| {
            let current = first(&p);
            pair(succ(&current), current)
        },
        pair(zero(), zero()),
    );
    second(&shifted)
}

pub fn add(n: &Nat, m: &Nat) -> Nat {
    m.fold(|k: Nat| succ(&k), n.clone())
}

/// `n - m`, clamped to zero when `m > n`.
pub fn sub(n: &Nat, m: &Nat) -> Nat {
    m.fold(|k: Nat| pred(&k), n.clone())
}

pub fn mul(n: &Nat, m: &Nat) -> Nat {
    let n = n.clone();
    m.fold(move |k: Nat| add(&n, &k), zero())
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

pub fn is_zero(n: &Nat) -> Bool {
    n.fold(|_: Bool| fls(), tru())
}

/// `n <= m`: saturating `n - m` is zero exactly when `n <= m`.
pub fn leq(n: &Nat, m: &Nat) -> Bool {
    is_zero(&sub(n, m))
}

pub fn lt(n: &Nat, m: &Nat) -> Bool {
    not(&leq(m, n))
}

pub fn eq(n: &Nat, m: &Nat) -> Bool {
    and(&leq(n, m), &leq(m, n))
}

// ---------------------------------------------------------------------------
// Division family
// ---------------------------------------------------------------------------

/// Quotient by repeated subtraction.
pub fn div(n: &Nat, m: &Nat) -> Result<Nat, ArithmeticError> {
    require_divisor(m, "div")?;
    Ok(reveal(quotient(n.clone(), m.clone()).run()))
}

/// Remainder by repeated subtraction.
pub fn modulo(n: &Nat, m: &Nat) -> Result<Nat, ArithmeticError> {
    require_divisor(m, "mod")?;
    Ok(reveal(remainder(n.clone(), m.clone()).run()))
}

/// Euclid's algorithm. `gcd(n, 0)` is `n`, so `gcd(0, 0)` is 0 and the
/// remainder is only ever taken with a non-zero divisor.
pub fn gcd(n: &Nat, m: &Nat) -> Nat {
    reveal(euclid(n.clone(), m.clone()).run())
}

fn require_divisor(m: &Nat, operation: &'static str) -> Result<(), ArithmeticError> {
    is_zero(m).select(Err(ArithmeticError::DivisionByZero { operation }), Ok(()))
}

fn quotient(n: Nat, m: Nat) -> Bounce {
    leq(&m, &n).branch(
        move || {
            let rest = sub(&n, &m);
            Bounce::defer(move || quotient(rest, m))
                .then(|q| Bounce::Done(erase(succ(&reveal::<Nat>(q)))))
        },
        || Bounce::Done(erase(zero())),
    )
}

fn remainder(n: Nat, m: Nat) -> Bounce {
    let kept = n.clone();
    leq(&m, &n).branch(
        move || {
            let rest = sub(&n, &m);
            Bounce::defer(move || remainder(rest, m))
        },
        move || Bounce::Done(erase(kept)),
    )
}

fn euclid(n: Nat, m: Nat) -> Bounce {
    let result = n.clone();
    is_zero(&m).branch(
        move || Bounce::Done(erase(result)),
        move || {
            let rest = reveal::<Nat>(remainder(n, m.clone()).run());
            Bounce::defer(move || euclid(m, rest))
        },
    )
}
