//! Named host functions for higher-order scenarios.
//!
//! Fixtures cannot carry closures, so `list.filter`, `list.map`,
//! `option.map` and friends name one of these instead. Elements are
//! JSON values; arithmetic helpers treat anything that is not a
//! non-negative integer as outside their domain (predicates say no,
//! mappers yield `null`).
//!
//! Expanders may refuse an element (`None`) when its expansion would be
//! larger than `MAX_REPLICATION`; the evaluator reports that as a bad
//! argument.

use serde_json::Value;

pub type Predicate = fn(&Value) -> bool;
pub type Mapper = fn(&Value) -> Value;
pub type Expander = fn(&Value) -> Option<Vec<Value>>;
pub type Partial = fn(&Value) -> Option<Value>;

/// Most copies `replicate_self` will produce for one element.
pub const MAX_REPLICATION: usize = 256;

pub fn predicate(name: &str) -> Option<Predicate> {
    let f: Predicate = match name {
        "divisible_by_3" => |v| v.as_u64().is_some_and(|x| x % 3 == 0),
        "at_most_3" => |v| v.as_u64().is_some_and(|x| x <= 3),
        "is_even" => |v| v.as_u64().is_some_and(|x| x % 2 == 0),
        _ => return None,
    };
    Some(f)
}

pub fn mapper(name: &str) -> Option<Mapper> {
    let f: Mapper = match name {
        "mod_3" => |v| v.as_u64().map_or(Value::Null, |x| Value::from(x % 3)),
        "square" => |v| {
            v.as_u64()
                .and_then(|x| x.checked_mul(x))
                .map_or(Value::Null, Value::from)
        },
        "increment" => |v| {
            v.as_u64()
                .and_then(|x| x.checked_add(1))
                .map_or(Value::Null, Value::from)
        },
        _ => return None,
    };
    Some(f)
}

pub fn expander(name: &str) -> Option<Expander> {
    let f: Expander = match name {
        "replicate_self" => |v| match v.as_u64() {
            Some(x) => usize::try_from(x)
                .ok()
                .filter(|count| *count <= MAX_REPLICATION)
                .map(|count| vec![v.clone(); count]),
            None => Some(Vec::new()),
        },
        "singleton" => |v| Some(vec![v.clone()]),
        _ => return None,
    };
    Some(f)
}

pub fn partial(name: &str) -> Option<Partial> {
    let f: Partial = match name {
        "increment_if_even" => |v| {
            v.as_u64()
                .filter(|x| x % 2 == 0)
                .map(|x| Value::from(x + 1))
        },
        "half_if_even" => |v| {
            v.as_u64()
                .filter(|x| x % 2 == 0)
                .map(|x| Value::from(x / 2))
        },
        _ => return None,
    };
    Some(f)
}
