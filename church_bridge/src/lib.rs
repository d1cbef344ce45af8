#![forbid(unsafe_code)]

//! Bridge between native Rust values and Church encodings, plus the
//! conformance layer that drives the encodings from JSON scenarios.
//!
//! No encoding logic lives here. Every computation is delegated to
//! `church_encodings`; this crate only converts at the edges, names
//! host functions, and digests runs.

pub mod convert;
pub mod evaluate;
pub mod functions;
pub mod report;
pub mod scenario;
pub mod suite;
