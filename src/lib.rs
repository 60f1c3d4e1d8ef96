//! A complex number that sorts by magnitude but compares equal field by field.
//!
//! Ordering and equality are two separate relations on [`Complex`]. Once the
//! ordering stops looking at every field, equality can no longer be derived
//! from it.

mod comparison;
pub use comparison::*;

mod complex;
pub use complex::*;

mod report;
pub use report::*;
