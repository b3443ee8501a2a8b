//! Equivalence-class integers.
//!
//! An `Eqint` stands for the class of all finite sequences with the same
//! length. Whatever sequence it was built from is normalized to a run of
//! [`Marker`]s, so two values built from a list, a tuple, and a string of the
//! same length are indistinguishable.
//!
//! The length is kept as a `dashu::UBig`, so sums and products of lengths
//! never overflow.

use crate::error::ParseEqintError;
use crate::sequence::Sequence;
use dashu::integer::UBig;
use num_traits::{CheckedSub, One, Zero};
use std::fmt;
use std::iter::{FusedIterator, Product, Sum};
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// The uniform element every `Eqint` sequence is made of.
///
/// It carries no data; only the number of markers is meaningful.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Marker;

/// A non-negative integer represented by the length of a sequence.
///
/// Equality, ordering, and hashing all go through [`Eqint::magnitude`], never
/// through the contents of the sequence the value was constructed from.
/// Values are immutable; every operation returns a new `Eqint`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Eqint(UBig);

impl Eqint {
    /// The value built from the empty sequence.
    pub const ZERO: Self = Self(UBig::ZERO);

    /// The value built from any one-element sequence.
    pub const ONE: Self = Self(UBig::ONE);

    /// Creates the value whose magnitude is the length of `sequence`.
    ///
    /// ```
    /// use eqint_core::Eqint;
    ///
    /// assert_eq!(Eqint::new(&[1]), Eqint::new(&(1,)));
    /// assert_eq!(Eqint::new(&[1]), Eqint::new("1"));
    /// ```
    #[must_use]
    pub fn new<S: Sequence + ?Sized>(sequence: &S) -> Self {
        Self::from_magnitude(sequence.len())
    }

    /// Creates the value with the given magnitude directly.
    #[must_use]
    pub fn from_magnitude(magnitude: usize) -> Self {
        Self(UBig::from(magnitude))
    }

    /// Returns the length of the underlying sequence.
    #[must_use]
    pub fn magnitude(&self) -> &UBig {
        &self.0
    }

    /// Attempts to convert the magnitude to a `usize`.
    ///
    /// Returns `None` if the value doesn't fit in a `usize`.
    #[must_use]
    pub fn to_usize(&self) -> Option<usize> {
        self.0.clone().try_into().ok()
    }

    /// Returns the normalized sequence: one [`Marker`] per unit of magnitude.
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers {
            remaining: self.0.clone(),
        }
    }

    /// Returns the value one larger than this one.
    #[must_use]
    pub fn successor(&self) -> Self {
        Self(&self.0 + &UBig::ONE)
    }

    /// Returns the value one smaller than this one, or `None` for zero.
    #[must_use]
    pub fn predecessor(&self) -> Option<Self> {
        self.checked_sub(&Self::ONE)
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.0 < other.0 {
            None
        } else {
            Some(Self(&self.0 - &other.0))
        }
    }
}

/// Iterator over the markers of an [`Eqint`].
#[derive(Clone, Debug)]
pub struct Markers {
    remaining: UBig,
}

impl Iterator for Markers {
    type Item = Marker;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == UBig::ZERO {
            return None;
        }
        self.remaining -= &UBig::ONE;
        Some(Marker)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining.clone()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Markers {}

impl Default for Eqint {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Eqint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eqint({})", self.0)
    }
}

impl fmt::Display for Eqint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the decimal form written by `Display`: ASCII digits only, no sign.
impl FromStr for Eqint {
    type Err = ParseEqintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseEqintError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseEqintError::InvalidDigit(s.to_owned()));
        }
        UBig::from_str_radix(s, 10)
            .map(Self)
            .map_err(|_| ParseEqintError::InvalidDigit(s.to_owned()))
    }
}

// Arithmetic operations
impl Add for Eqint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Eqint> for Eqint {
    type Output = Self;

    fn add(self, rhs: &Eqint) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Eqint {
    type Output = Eqint;

    fn add(self, rhs: Self) -> Self::Output {
        Eqint(&self.0 + &rhs.0)
    }
}

impl Sub for Eqint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Eqint> for Eqint {
    type Output = Self;

    fn sub(self, rhs: &Eqint) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Eqint {
    type Output = Eqint;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("Eqint subtraction would produce a negative magnitude")
    }
}

impl Mul for Eqint {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Eqint> for Eqint {
    type Output = Self;

    fn mul(self, rhs: &Eqint) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Eqint {
    type Output = Eqint;

    fn mul(self, rhs: Self) -> Self::Output {
        Eqint(&self.0 * &rhs.0)
    }
}

impl Sum for Eqint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Eqint> for Eqint {
    fn sum<I: Iterator<Item = &'a Eqint>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for Eqint {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Eqint> for Eqint {
    fn product<I: Iterator<Item = &'a Eqint>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl Zero for Eqint {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }
}

impl One for Eqint {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.0 == UBig::ONE
    }
}

impl CheckedSub for Eqint {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Eqint::checked_sub(self, v)
    }
}

/// Counts the items of a finite iterator.
///
/// Collecting from an infinite iterator never returns.
impl<T> FromIterator<T> for Eqint {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut total = UBig::ZERO;
        let mut run: usize = 0;
        for _ in iter {
            if run == usize::MAX {
                total += UBig::from(run);
                run = 0;
            }
            run += 1;
        }
        Self(total + UBig::from(run))
    }
}

impl From<usize> for Eqint {
    fn from(magnitude: usize) -> Self {
        Self::from_magnitude(magnitude)
    }
}

impl From<UBig> for Eqint {
    fn from(magnitude: UBig) -> Self {
        Self(magnitude)
    }
}

impl From<Eqint> for UBig {
    fn from(value: Eqint) -> Self {
        value.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Values serialize as their decimal magnitude text.

    use super::Eqint;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Eqint {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Eqint {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }
}
