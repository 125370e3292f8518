//! Value module - In-memory representation of the data being compared.
//!
//! Values are either built from caller types through [`Diffable`] and
//! [`Composite`], or parsed from JSON/YAML documents.

mod composite;
mod value;

pub use composite::*;
pub use value::*;
