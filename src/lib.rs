//! # eqint
//!
//! Non-negative integers as equivalence classes of finite sequences.
//!
//! An [`Eqint`](prelude::Eqint) is built from any finite ordered collection
//! (a slice, a `Vec`, a tuple, some text) and stands for nothing but that
//! collection's length. Collections of different element types but equal
//! length give equal values, and arithmetic works on lengths alone.
//!
//! ## Features
//!
//! - **Sequence capability**: one trait covering slices, arrays, vectors,
//!   deques, text, and tuples
//! - **Magnitude arithmetic**: addition, subtraction, multiplication, sums
//!   and products on arbitrary precision magnitudes, so addition never
//!   overflows
//! - **Inductive naturals**: each natural built from all of its predecessors
//! - **Serde** (optional `serde` feature): values serialize as their decimal
//!   magnitude
//!
//! ## Quick Start
//!
//! ```rust
//! use eqint::prelude::*;
//!
//! let zero = Eqint::new(&[0u8; 0]);
//! let ones = [Eqint::new(&[1]), Eqint::new(&(1,)), Eqint::new("1")];
//!
//! assert!(ones.iter().all(|one| *one == ones[0] && *one != zero));
//! assert_eq!(ones.iter().sum::<Eqint>() + &zero, Eqint::from_magnitude(3));
//!
//! let first: Vec<Eqint> = naturals(3).collect();
//! assert_eq!(first, vec![zero, ones[0].clone(), &ones[0] + &ones[1]]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use eqint_core as core;
pub use eqint_naturals as naturals;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use eqint_core::{Eqint, Marker, Markers, ParseEqintError, Sequence};
    pub use eqint_naturals::{naturals, Naturals};
}
