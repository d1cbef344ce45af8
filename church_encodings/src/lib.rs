#![forbid(unsafe_code)]

//! Church encodings: booleans, pairs, options, natural numbers and
//! lists built only from closures capturing other closures.
//!
//! Layering, leaves first:
//!
//! ```text
//! boolean   option
//!    |
//!  pair
//!    |
//!   nat
//!    |
//!  list  (uses nat, option, pair, boolean)
//! ```
//!
//! Values are immutable and cheap to clone. Folding a numeral or a list
//! runs on a trampoline, and `succ`/`cons` hold the value below them
//! through an explicit link that is released iteratively. Neither
//! folding nor dropping a deep value grows the native stack with its
//! depth.

/// Encoding generation. Bound into conformance reports.
pub const ENCODING_VERSION: u32 = 1;

mod bounce;
mod link;
mod term;

pub mod boolean;
pub mod error;
pub mod list;
pub mod nat;
pub mod option;
pub mod pair;

pub use boolean::Bool;
pub use error::ArithmeticError;
pub use list::List;
pub use nat::Nat;
pub use option::Maybe;
pub use pair::Pair;
