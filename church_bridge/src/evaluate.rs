//! Scenario evaluation: JSON in, Church computation, JSON out.
//!
//! Arguments are encoded the reference way (numbers become numerals,
//! arrays become lists of JSON elements, `null` becomes `none`), the
//! named Church operation runs, and the result is decoded back to JSON.
//!
//! Fixtures are untrusted input. Numerals and lists are unary, so number
//! and list arguments are capped and anything larger is a bad argument.

use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use church_encodings::{boolean, list, nat, option, pair};
use church_encodings::{ArithmeticError, Bool, List, Maybe, Nat};

use crate::convert::{
    decode_bool, decode_list, decode_number, decode_option, encode_bool, encode_list,
    encode_number, encode_option, encode_pair,
};
use crate::functions;
use crate::scenario::{Outcome, Scenario};

/// Largest number argument. `nat.mul` multiplies sizes, so this also
/// bounds the largest numeral a scenario can build.
pub const MAX_NUMBER: u64 = 1_000;

/// Most elements a list argument may hold.
pub const MAX_LIST_LENGTH: usize = 4_096;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    UnknownOperation(String),
    UnknownFunction { operation: String, name: String },
    MissingFunction { operation: String },
    WrongArity { operation: String, expected: usize, got: usize },
    BadArgument { operation: String, index: usize, expected: &'static str },
    Arithmetic(ArithmeticError),
}

impl EvalError {
    /// Stable code recorded in outcomes and fixtures.
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UnknownOperation(_) => "unknown_operation",
            EvalError::UnknownFunction { .. } => "unknown_function",
            EvalError::MissingFunction { .. } => "missing_function",
            EvalError::WrongArity { .. } => "wrong_arity",
            EvalError::BadArgument { .. } => "bad_argument",
            EvalError::Arithmetic(ArithmeticError::DivisionByZero { .. }) => "division_by_zero",
            EvalError::Arithmetic(_) => "arithmetic",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownOperation(op) => write!(f, "Unknown operation: {}", op),
            EvalError::UnknownFunction { operation, name } => {
                write!(f, "{}: no host function named {:?} of the right kind", operation, name)
            }
            EvalError::MissingFunction { operation } => {
                write!(f, "{}: a host function name is required", operation)
            }
            EvalError::WrongArity { operation, expected, got } => {
                write!(f, "{}: expected {} arguments, got {}", operation, expected, got)
            }
            EvalError::BadArgument { operation, index, expected } => {
                write!(f, "{}: argument {} must be {}", operation, index, expected)
            }
            EvalError::Arithmetic(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EvalError {}

impl From<ArithmeticError> for EvalError {
    fn from(err: ArithmeticError) -> Self {
        EvalError::Arithmetic(err)
    }
}

// ---------------------------------------------------------------------------
// Public dispatcher
// ---------------------------------------------------------------------------

/// Run a scenario and return the decoded result.
pub fn evaluate(scenario: &Scenario) -> Result<Value, EvalError> {
    let args = Args {
        operation: &scenario.operation,
        values: &scenario.args,
    };
    let function = scenario.function.as_deref();
    let op = scenario.operation.as_str();

    match op {
        "bool.not" => {
            args.arity(1)?;
            Ok(bool_value(&boolean::not(&args.boolean(0)?)))
        }
        "bool.and" => {
            args.arity(2)?;
            Ok(bool_value(&boolean::and(&args.boolean(0)?, &args.boolean(1)?)))
        }
        "bool.or" => {
            args.arity(2)?;
            Ok(bool_value(&boolean::or(&args.boolean(0)?, &args.boolean(1)?)))
        }

        "pair.first" | "pair.second" => {
            args.arity(2)?;
            let p = encode_pair((args.any(0), args.any(1)));
            Ok(if op == "pair.first" { pair::first(&p) } else { pair::second(&p) })
        }

        "option.is_none" => {
            args.arity(1)?;
            Ok(bool_value(&option::is_none(&args.option(0))))
        }
        "option.is_some" => {
            args.arity(1)?;
            Ok(bool_value(&option::is_some(&args.option(0))))
        }
        "option.get_or_else" => {
            args.arity(2)?;
            Ok(option::get_or_else(&args.option(0), args.any(1)))
        }
        "option.map" => {
            args.arity(1)?;
            let f = lookup(op, function, functions::mapper)?;
            Ok(option_value(&option::map(&args.option(0), move |x| f(&x))))
        }
        "option.flat_map" => {
            args.arity(1)?;
            let f = lookup(op, function, functions::partial)?;
            let bound = option::flat_map(&args.option(0), move |x| encode_option(f(&x)));
            Ok(option_value(&bound))
        }

        "nat.succ" => unary_number(&args, nat::succ),
        "nat.pred" => unary_number(&args, nat::pred),
        "nat.add" => binary_number(&args, nat::add),
        "nat.sub" => binary_number(&args, nat::sub),
        "nat.mul" => binary_number(&args, nat::mul),
        "nat.gcd" => binary_number(&args, nat::gcd),
        "nat.div" => binary_checked(&args, nat::div),
        "nat.mod" => binary_checked(&args, nat::modulo),
        "nat.is_zero" => {
            args.arity(1)?;
            Ok(bool_value(&nat::is_zero(&args.number(0)?)))
        }
        "nat.leq" => binary_comparison(&args, nat::leq),
        "nat.lt" => binary_comparison(&args, nat::lt),
        "nat.eq" => binary_comparison(&args, nat::eq),

        "list.cons" => {
            args.arity(2)?;
            Ok(list_value(&list::cons(args.any(0), &args.list(1)?)))
        }
        "list.append" => {
            args.arity(2)?;
            Ok(list_value(&list::append(&args.list(0)?, &args.list(1)?)))
        }
        "list.length" => {
            args.arity(1)?;
            Ok(number_value(&list::length(&args.list(0)?)))
        }
        "list.is_nil" => {
            args.arity(1)?;
            Ok(bool_value(&list::is_nil(&args.list(0)?)))
        }
        "list.is_non_empty" => {
            args.arity(1)?;
            Ok(bool_value(&list::is_non_empty(&args.list(0)?)))
        }
        "list.filter" => {
            args.arity(1)?;
            let p = lookup(op, function, functions::predicate)?;
            let kept = list::filter(&args.list(0)?, move |x: &Value| encode_bool(p(x)));
            Ok(list_value(&kept))
        }
        "list.map" => {
            args.arity(1)?;
            let f = lookup(op, function, functions::mapper)?;
            Ok(list_value(&list::map(&args.list(0)?, move |x| f(&x))))
        }
        "list.flat_map" => {
            args.arity(1)?;
            let f = lookup(op, function, functions::expander)?;
            let refused = Rc::new(Cell::new(false));
            let flag = Rc::clone(&refused);
            let expanded = list::flat_map(&args.list(0)?, move |x| match f(&x) {
                Some(items) => encode_list(items),
                None => {
                    flag.set(true);
                    list::nil()
                }
            });
            if refused.get() {
                return Err(args.bad(0, "an array the expander accepts"));
            }
            Ok(list_value(&expanded))
        }
        "list.head" => {
            args.arity(1)?;
            Ok(option_value(&list::head(&args.list(0)?)))
        }
        "list.tail" => {
            args.arity(1)?;
            let rest = decode_option(&list::tail(&args.list(0)?));
            Ok(rest.map_or(Value::Null, |l| list_value(&l)))
        }
        "list.at" => {
            args.arity(2)?;
            Ok(option_value(&list::at(&args.list(0)?, &args.number(1)?)))
        }

        other => Err(EvalError::UnknownOperation(other.to_string())),
    }
}

/// Run a scenario, folding failures into their stable code.
pub fn outcome_of(scenario: &Scenario) -> Outcome {
    match evaluate(scenario) {
        Ok(value) => Outcome::Value(value),
        Err(err) => Outcome::Error(err.code().to_string()),
    }
}

// ---------------------------------------------------------------------------
// Argument access (private)
// ---------------------------------------------------------------------------

struct Args<'a> {
    operation: &'a str,
    values: &'a [Value],
}

impl Args<'_> {
    fn arity(&self, expected: usize) -> Result<(), EvalError> {
        if self.values.len() != expected {
            return Err(EvalError::WrongArity {
                operation: self.operation.to_string(),
                expected,
                got: self.values.len(),
            });
        }
        Ok(())
    }

    fn bad(&self, index: usize, expected: &'static str) -> EvalError {
        EvalError::BadArgument {
            operation: self.operation.to_string(),
            index,
            expected,
        }
    }

    fn any(&self, index: usize) -> Value {
        self.values[index].clone()
    }

    fn boolean(&self, index: usize) -> Result<Bool, EvalError> {
        self.values[index]
            .as_bool()
            .map(encode_bool)
            .ok_or_else(|| self.bad(index, "a boolean"))
    }

    fn number(&self, index: usize) -> Result<Nat, EvalError> {
        self.values[index]
            .as_u64()
            .filter(|n| *n <= MAX_NUMBER)
            .map(encode_number)
            .ok_or_else(|| self.bad(index, "a non-negative integer up to MAX_NUMBER"))
    }

    fn list(&self, index: usize) -> Result<List<Value>, EvalError> {
        self.values[index]
            .as_array()
            .filter(|items| items.len() <= MAX_LIST_LENGTH)
            .map(|items| encode_list(items.iter().cloned()))
            .ok_or_else(|| self.bad(index, "an array of at most MAX_LIST_LENGTH elements"))
    }

    /// `null` is absence; anything else is present.
    fn option(&self, index: usize) -> Maybe<Value> {
        match &self.values[index] {
            Value::Null => encode_option(None),
            other => encode_option(Some(other.clone())),
        }
    }
}

fn lookup<F>(
    operation: &str,
    function: Option<&str>,
    registry: fn(&str) -> Option<F>,
) -> Result<F, EvalError> {
    let name = function.ok_or_else(|| EvalError::MissingFunction {
        operation: operation.to_string(),
    })?;
    registry(name).ok_or_else(|| EvalError::UnknownFunction {
        operation: operation.to_string(),
        name: name.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Shapes (private)
// ---------------------------------------------------------------------------

fn unary_number(args: &Args<'_>, op: fn(&Nat) -> Nat) -> Result<Value, EvalError> {
    args.arity(1)?;
    Ok(number_value(&op(&args.number(0)?)))
}

fn binary_number(args: &Args<'_>, op: fn(&Nat, &Nat) -> Nat) -> Result<Value, EvalError> {
    args.arity(2)?;
    Ok(number_value(&op(&args.number(0)?, &args.number(1)?)))
}

fn binary_checked(
    args: &Args<'_>,
    op: fn(&Nat, &Nat) -> Result<Nat, ArithmeticError>,
) -> Result<Value, EvalError> {
    args.arity(2)?;
    let result = op(&args.number(0)?, &args.number(1)?)?;
    Ok(number_value(&result))
}

fn binary_comparison(args: &Args<'_>, op: fn(&Nat, &Nat) -> Bool) -> Result<Value, EvalError> {
    args.arity(2)?;
    Ok(bool_value(&op(&args.number(0)?, &args.number(1)?)))
}

fn bool_value(b: &Bool) -> Value {
    Value::Bool(decode_bool(b))
}

fn number_value(n: &Nat) -> Value {
    Value::from(decode_number(n))
}

fn list_value(l: &List<Value>) -> Value {
    Value::Array(decode_list(l))
}

fn option_value(o: &Maybe<Value>) -> Value {
    decode_option(o).unwrap_or(Value::Null)
}
