//! Defines core algebraic traits and the scalar domains.
//!
//! The core trait is [Ring], which has two binary operations, addition and
//! multiplication. Each ring has an associated element type, that should not
//! be confused with the ring type itself. For example:
//! - The ring of integers [Z](type@integer::Z) has elements of type [i64].
//! - The field of rational numbers [Q](type@rational::Q) has elements of type
//!   [Rational](rational::Rational).
//!
//! In general, the ring elements do not implement operations such as addition
//! or multiplication, but rather the ring itself does. The matrix engine is
//! generic over the ring type. The concrete element types additionally
//! implement the standard operator traits for convenience.
//!
//! An extension of the ring trait is the [`EuclideanDomain`] trait, which adds
//! the ability to compute remainders, quotients, and gcds. Another extension
//! is the [`Field`] trait, which adds the ability to divide and invert
//! elements.
pub mod integer;
pub mod rational;

mod proptests;

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Errors that can occur when constructing or inverting a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A fraction was given a zero denominator, or the reciprocal of zero
    /// was requested.
    DivisionByZero,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// A ring is a set with two binary operations, addition and multiplication.
/// Examples of rings include the integers and the rational numbers.
///
/// Each ring has an element type, that should not be confused with the ring
/// type itself: the ring of integers [Z](type@integer::Z) has elements of
/// type [i64], and the field of rational numbers [Q](type@rational::Q) has
/// elements of type [Rational](rational::Rational).
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring, for example [i64] for [Z](type@integer::Z).
    type Element: Clone + PartialEq + Eq + Hash + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Compute `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    /// Compute `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element;
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(a: &Self::Element) -> bool;
    /// Draw a random element whose representation is bounded by `range`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;
}

/// A Euclidean domain is a ring that supports division with remainder,
/// quotients, and gcds.
pub trait EuclideanDomain: Ring {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}

/// A field is a ring that supports division and inversion.
pub trait Field: EuclideanDomain {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Invert `a`.
    ///
    /// # Panics
    ///
    /// Panics when `a` is zero. The checked entry point for user input is
    /// the `recip` method on [Rational](rational::Rational).
    fn inv(&self, a: &Self::Element) -> Self::Element;
}
