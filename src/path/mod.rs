//! Path module - Names the location of every change.

mod path;

pub use path::*;
