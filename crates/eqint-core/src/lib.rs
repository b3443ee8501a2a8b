//! # eqint-core
//!
//! Non-negative integers represented as equivalence classes of finite
//! sequences.
//!
//! This crate provides:
//! - The `Sequence` capability: any finite ordered collection with a length
//! - The `Eqint` value type, whose magnitude is the length it was built from
//! - Magnitude-based arithmetic (`+`, `-`, `*`, sums and products) on
//!   arbitrary precision magnitudes backed by `dashu`
//! - Parsing an `Eqint` back from its decimal display form
//!
//! ## Equivalence
//!
//! Two values are equal exactly when the sequences they were built from have
//! the same length. The element types never take part:
//!
//! ```
//! use eqint_core::Eqint;
//!
//! let from_list = Eqint::new(&[1]);
//! let from_tuple = Eqint::new(&(1,));
//! let from_text = Eqint::new("1");
//!
//! assert_eq!(from_list, from_tuple);
//! assert_eq!(from_tuple, from_text);
//! assert_eq!((from_list + from_text).to_string(), "2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eqint;
pub mod error;
pub mod sequence;

#[cfg(test)]
mod proptests;

pub use eqint::{Eqint, Marker, Markers};
pub use error::ParseEqintError;
pub use sequence::Sequence;
