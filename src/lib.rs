//! # Audit Diff
//!
//! Structural comparison of two versions of a nested value, producing a flat
//! list of addressable changes suitable for audit logs.
//!
//! Records are compared field by field, maps key by key, sequences of
//! scalars as sets and sequences of records by the identity of each item.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of the data being compared
//! - [`path`] - Dot-separated locations of changes
//! - [`diff`] - The comparator, its change records and errors
//! - [`models`] - Sample account types used by the CLI demo
//! - [`logging`] - Subscriber setup for binaries

pub mod diff;
pub mod logging;
pub mod models;
pub mod path;
pub mod value;

pub use diff::{
    diff, diff_values, diff_with_options, Change, DiffError, DiffOptions,
};
pub use path::{Path, PathElement};
pub use value::{Composite, Diffable, Record, Value};
