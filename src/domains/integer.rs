//! The ring of integers, backed by the host integer type.

use std::fmt::{Display, Formatter};

use rand::Rng;

use super::{EuclideanDomain, Ring};

/// The ring of integers.
pub type Z = IntegerRing;
/// The ring of integers.
pub const Z: IntegerRing = IntegerRing::new();

/// The ring of machine integers. Overflow is the caller's concern: the
/// fraction field is generic over its backing ring, so callers that need
/// larger values can substitute an arbitrary-precision integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct IntegerRing;

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

impl Display for IntegerRing {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl Ring for IntegerRing {
    type Element = i64;

    #[inline]
    fn add(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    #[inline]
    fn sub(&self, a: &i64, b: &i64) -> i64 {
        a - b
    }

    #[inline]
    fn mul(&self, a: &i64, b: &i64) -> i64 {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut i64, b: &i64) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut i64, b: &i64) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut i64, b: &i64) {
        *a *= b;
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut i64, b: &i64, c: &i64) {
        *a += b * c;
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut i64, b: &i64, c: &i64) {
        *a -= b * c;
    }

    #[inline]
    fn neg(&self, a: &i64) -> i64 {
        -a
    }

    #[inline]
    fn zero(&self) -> i64 {
        0
    }

    #[inline]
    fn one(&self) -> i64 {
        1
    }

    #[inline]
    fn nth(&self, n: i64) -> i64 {
        n
    }

    fn pow(&self, b: &i64, e: u64) -> i64 {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        b.pow(e as u32)
    }

    #[inline]
    fn is_zero(a: &i64) -> bool {
        *a == 0
    }

    #[inline]
    fn is_one(a: &i64) -> bool {
        *a == 1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> i64 {
        rng.gen_range(range.0..range.1)
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &i64, b: &i64) -> i64 {
        if *b == 0 {
            panic!("Cannot divide by zero");
        }
        a % b
    }

    fn quot_rem(&self, a: &i64, b: &i64) -> (i64, i64) {
        if *b == 0 {
            panic!("Cannot divide by zero");
        }
        (a / b, a % b)
    }

    fn gcd(&self, a: &i64, b: &i64) -> i64 {
        num::integer::gcd(*a, *b)
    }
}
