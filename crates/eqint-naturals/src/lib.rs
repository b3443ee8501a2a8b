//! # eqint-naturals
//!
//! Inductive construction of the natural numbers as [`Eqint`] values.
//!
//! Zero is built from nothing, and every later natural is built from the
//! collection of all naturals produced before it:
//!
//! ```text
//! 0 = Eqint([])
//! 1 = Eqint([0])
//! 2 = Eqint([0, 1])
//! 3 = Eqint([0, 1, 2])
//! ```
//!
//! ```
//! use eqint_naturals::naturals;
//!
//! let rendered: Vec<String> = naturals(4).map(|n| n.to_string()).collect();
//! assert_eq!(rendered, ["0", "1", "2", "3"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod naturals;

pub use eqint_core::Eqint;
pub use naturals::{naturals, Naturals};
