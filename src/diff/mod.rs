//! Diff module - Structural comparison of two values.
//!
//! Sequences of scalars are compared as sets; sequences of records or maps
//! are matched item by item through their identity.

mod change;
mod comparator;
mod error;
mod identity;
mod options;


pub use change::*;
pub use comparator::*;
pub use error::*;
pub use identity::*;
pub use options::*;
