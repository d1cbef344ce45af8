//! Algebraic laws of the encodings, checked against native arithmetic.
//!
//! Grids are kept small: numerals are unary.

use church_encodings::boolean::Bool;
use church_encodings::list::{self, List};
use church_encodings::nat::{self, Nat};
use church_encodings::option::Maybe;
use church_encodings::{boolean, ArithmeticError, ENCODING_VERSION};

const LEFT: [u64; 5] = [0, 3, 5, 6, 8];
const RIGHT: [u64; 4] = [0, 1, 5, 11];

fn nat_of(k: u64) -> Nat {
    (0..k).fold(nat::zero(), |acc, _| nat::succ(&acc))
}

fn count(n: &Nat) -> u64 {
    n.fold(|k: u64| k + 1, 0)
}

fn truth(b: &Bool) -> bool {
    b.select(true, false)
}

fn list_of<T: Clone + 'static>(items: &[T]) -> List<T> {
    items.iter().rev().fold(list::nil(), |acc, x| list::cons(x.clone(), &acc))
}

fn items<T: 'static>(l: &List<T>) -> Vec<T> {
    let mut out = l.fold(
        |h, mut acc: Vec<T>| {
            acc.push(h);
            acc
        },
        Vec::new(),
    );
    out.reverse();
    out
}

fn present<T: 'static>(o: &Maybe<T>) -> Option<T> {
    o.fold(Some, || None)
}

fn native_gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        native_gcd(b, a % b)
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_and_mul_match_native() {
    for n in LEFT {
        for m in RIGHT {
            assert_eq!(count(&nat::add(&nat_of(n), &nat_of(m))), n + m, "{} + {}", n, m);
            assert_eq!(count(&nat::mul(&nat_of(n), &nat_of(m))), n * m, "{} * {}", n, m);
        }
    }
}

#[test]
fn sub_saturates_at_zero() {
    for n in LEFT {
        for m in RIGHT {
            let expected = n.saturating_sub(m);
            assert_eq!(count(&nat::sub(&nat_of(n), &nat_of(m))), expected, "{} - {}", n, m);
        }
    }
}

#[test]
fn comparisons_match_native() {
    for n in LEFT {
        for m in RIGHT {
            let (a, b) = (nat_of(n), nat_of(m));
            assert_eq!(truth(&nat::leq(&a, &b)), n <= m, "{} <= {}", n, m);
            assert_eq!(truth(&nat::lt(&a, &b)), n < m, "{} < {}", n, m);
            assert_eq!(truth(&nat::eq(&a, &b)), n == m, "{} == {}", n, m);
        }
    }
}

#[test]
fn division_family_matches_native() {
    for n in LEFT {
        for m in [1, 5, 11] {
            let (a, b) = (nat_of(n), nat_of(m));
            assert_eq!(count(&nat::div(&a, &b).unwrap()), n / m, "{} / {}", n, m);
            assert_eq!(count(&nat::modulo(&a, &b).unwrap()), n % m, "{} % {}", n, m);
        }
    }
}

#[test]
fn division_by_zero_is_signalled_not_looped() {
    for n in LEFT {
        let err = nat::div(&nat_of(n), &nat::zero()).err();
        assert_eq!(err, Some(ArithmeticError::DivisionByZero { operation: "div" }));
        let err = nat::modulo(&nat_of(n), &nat::zero()).err();
        assert_eq!(err, Some(ArithmeticError::DivisionByZero { operation: "mod" }));
    }
}

#[test]
fn gcd_matches_native() {
    for n in LEFT {
        for m in RIGHT {
            if n == 0 && m == 0 {
                continue;
            }
            let got = count(&nat::gcd(&nat_of(n), &nat_of(m)));
            assert_eq!(got, native_gcd(n, m), "gcd({}, {})", n, m);
        }
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn append_is_concatenation() {
    let samples: [&[i32]; 3] = [&[], &[7, 8, 2], &[1, 2, 3]];
    for l1 in samples {
        for l2 in samples {
            let joined = list::append(&list_of(l1), &list_of(l2));
            assert_eq!(items(&joined), [l1, l2].concat());
            assert_eq!(count(&list::length(&joined)), (l1.len() + l2.len()) as u64);
        }
    }
}

#[test]
fn filter_and_map_match_comprehensions() {
    let samples: [&[i32]; 3] = [&[1], &[3, 2, 9], &[1, 6, 9, 3]];
    for l in samples {
        let small = list::filter(&list_of(l), |x: &i32| {
            if *x <= 3 {
                boolean::tru()
            } else {
                boolean::fls()
            }
        });
        let expected: Vec<i32> = l.iter().copied().filter(|x| *x <= 3).collect();
        assert_eq!(items(&small), expected);

        let squared = list::map(&list_of(l), |x: i32| x * x);
        let expected: Vec<i32> = l.iter().map(|x| x * x).collect();
        assert_eq!(items(&squared), expected);
    }
}

#[test]
fn head_tail_and_at_on_empty_are_absent() {
    let empty = list::nil::<i32>();
    assert!(present(&list::head(&empty)).is_none());
    assert!(present(&list::tail(&empty)).is_none());
    assert!(present(&list::at(&empty, &nat::zero())).is_none());
}

#[test]
fn at_indexes_or_reports_absence() {
    let source = [1, 2, 3];
    let l = list_of(&source);
    for i in 0..5u64 {
        let expected = source.get(i as usize).copied();
        assert_eq!(present(&list::at(&l, &nat_of(i))), expected, "at {}", i);
    }
}

#[test]
fn deep_list_folds_and_drops_without_native_recursion() {
    let source: Vec<u32> = (0..100_000).collect();
    let l = list_of(&source);
    assert_eq!(count(&list::length(&l)), 100_000);
    assert_eq!(items(&list::map(&l, |x: u32| x + 1)).last(), Some(&100_000));
}

#[test]
fn deep_numeral_arithmetic_and_drop() {
    let n = nat_of(60_000);
    let m = nat_of(40_000);
    assert_eq!(count(&nat::add(&n, &m)), 100_000);
    assert_eq!(count(&nat::pred(&n)), 59_999);
}

#[test]
fn encoding_version_is_one() {
    assert_eq!(ENCODING_VERSION, 1);
}
