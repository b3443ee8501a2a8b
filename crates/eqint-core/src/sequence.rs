//! The `Sequence` capability.
//!
//! An `Eqint` can be built from anything that is a finite ordered collection
//! exposing a length. The element type never matters, only how many elements
//! there are.

use std::collections::VecDeque;

/// A finite ordered collection that exposes its length.
///
/// # Laws
///
/// - `len` is the number of elements, counted once each
/// - `is_empty()` holds exactly when `len() == 0`
pub trait Sequence {
    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Text is a sequence of characters.
///
/// The length counts Unicode scalar values, so `"é"` has length 1 even
/// though it is two bytes of UTF-8.
impl Sequence for str {
    fn len(&self) -> usize {
        self.chars().count()
    }
}

impl Sequence for String {
    fn len(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn len(&self) -> usize {
        S::len(*self)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    fn len(&self) -> usize {
        S::len(self.as_ref())
    }
}

// Tuples are heterogeneous sequences whose length is their arity.
macro_rules! tuple_sequence {
    ($($arity:literal => ($($name:ident),*);)*) => {
        $(
            impl<$($name),*> Sequence for ($($name,)*) {
                fn len(&self) -> usize {
                    $arity
                }
            }
        )*
    };
}

tuple_sequence! {
    0 => ();
    1 => (A);
    2 => (A, B);
    3 => (A, B, C);
    4 => (A, B, C, D);
    5 => (A, B, C, D, E);
    6 => (A, B, C, D, E, F);
    7 => (A, B, C, D, E, F, G);
    8 => (A, B, C, D, E, F, G, H);
    9 => (A, B, C, D, E, F, G, H, I);
    10 => (A, B, C, D, E, F, G, H, I, J);
    11 => (A, B, C, D, E, F, G, H, I, J, K);
    12 => (A, B, C, D, E, F, G, H, I, J, K, L);
}
