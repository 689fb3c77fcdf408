//! The field of rational numbers.
//!
//! A [Fraction] is always kept in normal form: reduced to lowest terms, with
//! the normalization factor of the backing ring applied to the denominator
//! (for [Z](type@super::integer::Z), a positive sign), and with zero stored
//! canonically as `0/1`. Every arithmetic operation produces a new normalized
//! value; fractions are never mutated.

use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::integer::{IntegerRing, Z};
use super::{ArithmeticError, EuclideanDomain, Field, Ring};

/// The field of rational numbers.
pub type Q = FractionField<IntegerRing>;
pub type RationalField = FractionField<IntegerRing>;
/// The field of rational numbers.
pub const Q: FractionField<IntegerRing> = FractionField::new(Z);

/// The fraction field of `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FractionField<R: Ring> {
    ring: R,
}

impl<R: Ring> FractionField<R> {
    pub const fn new(ring: R) -> FractionField<R> {
        FractionField { ring }
    }
}

impl<R: Ring> Display for FractionField<R> {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

/// The factor that canonicalizes an element used as a denominator.
pub trait FractionNormalization: Ring {
    /// Get the factor that normalizes the element `a`.
    /// - For the integers, this is the sign of `a`.
    /// - For a field, this is the inverse of `a`.
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element;
}

impl FractionNormalization for IntegerRing {
    fn get_normalization_factor(&self, a: &i64) -> i64 {
        if *a < 0 {
            -1
        } else {
            1
        }
    }
}

impl<T: Field> FractionNormalization for T {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        self.inv(a)
    }
}

/// A fraction of two elements of the ring `R`, kept in normal form.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction<R: Ring> {
    numerator: R::Element,
    denominator: R::Element,
}

impl<R: Ring> Fraction<R> {
    pub fn numerator(&self) -> R::Element {
        self.numerator.clone()
    }

    pub fn denominator(&self) -> R::Element {
        self.denominator.clone()
    }

    pub fn numerator_ref(&self) -> &R::Element {
        &self.numerator
    }

    pub fn denominator_ref(&self) -> &R::Element {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        R::is_zero(&self.numerator)
    }

    pub fn is_one(&self) -> bool {
        R::is_one(&self.numerator) && R::is_one(&self.denominator)
    }
}

impl<R: EuclideanDomain + FractionNormalization> FractionField<R> {
    /// Build the normalized fraction `numerator / denominator`: reduce by the
    /// gcd and canonicalize the denominator.
    pub fn to_element(
        &self,
        mut numerator: R::Element,
        mut denominator: R::Element,
    ) -> Result<Fraction<R>, ArithmeticError> {
        if R::is_zero(&denominator) {
            return Err(ArithmeticError::DivisionByZero);
        }

        let g = self.ring.gcd(&numerator, &denominator);
        if !R::is_one(&g) {
            numerator = self.ring.quot_rem(&numerator, &g).0;
            denominator = self.ring.quot_rem(&denominator, &g).0;
        }

        let f = self.ring.get_normalization_factor(&denominator);
        if R::is_one(&f) {
            Ok(Fraction {
                numerator,
                denominator,
            })
        } else {
            Ok(Fraction {
                numerator: self.ring.mul(&numerator, &f),
                denominator: self.ring.mul(&denominator, &f),
            })
        }
    }

    /// Wrap `numerator` as the fraction `numerator / 1`.
    pub fn to_element_numerator(&self, numerator: R::Element) -> Fraction<R> {
        Fraction {
            numerator,
            denominator: self.ring.one(),
        }
    }
}

impl<R: EuclideanDomain + FractionNormalization> Ring for FractionField<R> {
    type Element = Fraction<R>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;

        if a.denominator == b.denominator {
            let num = r.add(&a.numerator, &b.numerator);
            let g = r.gcd(&num, &a.denominator);
            return if R::is_one(&g) {
                Fraction {
                    numerator: num,
                    denominator: a.denominator.clone(),
                }
            } else {
                Fraction {
                    numerator: r.quot_rem(&num, &g).0,
                    denominator: r.quot_rem(&a.denominator, &g).0,
                }
            };
        }

        let denom_gcd = r.gcd(&a.denominator, &b.denominator);
        let a_den_red = r.quot_rem(&a.denominator, &denom_gcd).0;
        let b_den_red = r.quot_rem(&b.denominator, &denom_gcd).0;

        // a fresh common factor can only come out of the shared gcd
        let mut num = r.add(
            &r.mul(&a.numerator, &b_den_red),
            &r.mul(&b.numerator, &a_den_red),
        );
        let mut den = r.mul(&a_den_red, &b.denominator);

        let g = r.gcd(&num, &denom_gcd);
        if !R::is_one(&g) {
            num = r.quot_rem(&num, &g).0;
            den = r.quot_rem(&den, &g).0;
        }

        Fraction {
            numerator: num,
            denominator: den,
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;
        let gcd1 = r.gcd(&a.numerator, &b.denominator);
        let gcd2 = r.gcd(&a.denominator, &b.numerator);

        Fraction {
            numerator: r.mul(
                &r.quot_rem(&a.numerator, &gcd1).0,
                &r.quot_rem(&b.numerator, &gcd2).0,
            ),
            denominator: r.mul(
                &r.quot_rem(&a.denominator, &gcd2).0,
                &r.quot_rem(&b.denominator, &gcd1).0,
            ),
        }
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        self.add_assign(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        self.sub_assign(a, &self.mul(b, c));
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Fraction {
            numerator: self.ring.neg(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn zero(&self) -> Self::Element {
        Fraction {
            numerator: self.ring.zero(),
            denominator: self.ring.one(),
        }
    }

    fn one(&self) -> Self::Element {
        Fraction {
            numerator: self.ring.one(),
            denominator: self.ring.one(),
        }
    }

    #[inline]
    fn nth(&self, n: i64) -> Self::Element {
        Fraction {
            numerator: self.ring.nth(n),
            denominator: self.ring.one(),
        }
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        Fraction {
            numerator: self.ring.pow(&b.numerator, e),
            denominator: self.ring.pow(&b.denominator, e),
        }
    }

    fn is_zero(a: &Self::Element) -> bool {
        R::is_zero(&a.numerator)
    }

    fn is_one(a: &Self::Element) -> bool {
        R::is_one(&a.numerator) && R::is_one(&a.denominator)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Fraction {
            numerator: self.ring.sample(rng, range),
            denominator: self.ring.one(),
        }
    }
}

impl<R: EuclideanDomain + FractionNormalization> EuclideanDomain for FractionField<R> {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        self.zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), self.zero())
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let gcd_num = self.ring.gcd(&a.numerator, &b.numerator);
        let gcd_den = self.ring.gcd(&a.denominator, &b.denominator);

        let d1 = self.ring.quot_rem(&a.denominator, &gcd_den).0;
        let lcm = self.ring.mul(&d1, &b.denominator);

        Fraction {
            numerator: gcd_num,
            denominator: lcm,
        }
    }
}

impl<R: EuclideanDomain + FractionNormalization> Field for FractionField<R> {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.mul(a, &self.inv(b))
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.div(a, b);
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        if R::is_zero(&a.numerator) {
            panic!("Cannot invert zero");
        }

        let f = self.ring.get_normalization_factor(&a.numerator);
        Fraction {
            numerator: self.ring.mul(&a.denominator, &f),
            denominator: self.ring.mul(&a.numerator, &f),
        }
    }
}

impl<R: Ring> Display for Fraction<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if R::is_one(&self.denominator) {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// A rational number.
pub type Rational = Fraction<IntegerRing>;

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }
}

impl From<(i64, i64)> for Rational {
    /// Convert a `(numerator, denominator)` pair into its normal form.
    ///
    /// # Panics
    ///
    /// Panics when the denominator is zero; the checked entry point is
    /// [Rational::new].
    #[inline]
    fn from((numerator, denominator): (i64, i64)) -> Self {
        match Rational::new(numerator, denominator) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rational {
    /// Build the normalized rational `numerator / denominator`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, ArithmeticError> {
        Q.to_element(numerator, denominator)
    }

    /// Wrap an integer as the rational `n / 1`.
    pub fn from_integer(n: i64) -> Rational {
        Q.to_element_numerator(n)
    }

    pub fn zero() -> Rational {
        Fraction {
            numerator: 0,
            denominator: 1,
        }
    }

    pub fn one() -> Rational {
        Fraction {
            numerator: 1,
            denominator: 1,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn abs(&self) -> Rational {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// The multiplicative inverse.
    pub fn recip(&self) -> Result<Rational, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Q.inv(self))
    }

    pub fn pow(&self, e: u64) -> Rational {
        Q.pow(self, e)
    }
}

impl Add<Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Self::Output {
        Q.add(&self, &rhs)
    }
}

impl Sub<Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Self::Output {
        Q.sub(&self, &rhs)
    }
}

impl Mul<Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Self::Output {
        Q.mul(&self, &rhs)
    }
}

impl Div<Rational> for Rational {
    type Output = Rational;

    /// Divide two rationals.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    fn div(self, rhs: Rational) -> Self::Output {
        Q.div(&self, &rhs)
    }
}

impl<'a, 'b> Add<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Self::Output {
        Q.add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Self::Output {
        Q.sub(self, rhs)
    }
}

impl<'a, 'b> Mul<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn mul(self, rhs: &'a Rational) -> Self::Output {
        Q.mul(self, rhs)
    }
}

impl<'a, 'b> Div<&'a Rational> for &'b Rational {
    type Output = Rational;

    /// Divide two rationals.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    fn div(self, rhs: &'a Rational) -> Self::Output {
        Q.div(self, rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Q.neg(&self)
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, rhs: &'a Rational) {
        Q.add_assign(self, rhs);
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, rhs: &'a Rational) {
        Q.sub_assign(self, rhs);
    }
}

impl<'a> MulAssign<&'a Rational> for Rational {
    fn mul_assign(&mut self, rhs: &'a Rational) {
        Q.mul_assign(self, rhs);
    }
}

impl<'a> DivAssign<&'a Rational> for Rational {
    fn div_assign(&mut self, rhs: &'a Rational) {
        Q.div_assign(self, rhs);
    }
}

impl AddAssign<Rational> for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        Q.add_assign(self, &rhs);
    }
}

impl SubAssign<Rational> for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        Q.sub_assign(self, &rhs);
    }
}

impl MulAssign<Rational> for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        Q.mul_assign(self, &rhs);
    }
}

impl DivAssign<Rational> for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        Q.div_assign(self, &rhs);
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{
        rational::{Q, Rational},
        ArithmeticError, Field, Ring,
    };

    #[test]
    fn normalization() {
        assert_eq!(Rational::new(2, 4).unwrap(), (1, 2).into());
        assert_eq!(Rational::new(1, -2).unwrap(), (-1, 2).into());
        assert_eq!(Rational::new(-1, -2).unwrap(), (1, 2).into());
        assert_eq!(Rational::new(-6, 4).unwrap(), (-3, 2).into());

        let zero = Rational::new(0, 5).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.numerator(), 0);
        assert_eq!(zero.denominator(), 1);

        assert_eq!(Rational::new(3, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn arithmetic() {
        let a: Rational = (1, 2).into();
        let b: Rational = (1, 3).into();

        assert_eq!(a.clone() + b.clone(), (5, 6).into());
        assert_eq!(a.clone() - b.clone(), (1, 6).into());
        assert_eq!(a.clone() * b.clone(), (1, 6).into());
        assert_eq!(a.clone() / b.clone(), (3, 2).into());
        assert_eq!(-a.clone(), (-1, 2).into());

        // the same-denominator fast path reduces as well
        let c: Rational = (1, 6).into();
        let d: Rational = (5, 6).into();
        assert_eq!(c + d, Rational::one());

        let mut e: Rational = (2, 3).into();
        e += &Rational::from((1, 3));
        assert_eq!(e, Rational::one());
        e *= Rational::from((1, 2));
        assert_eq!(e, (1, 2).into());
    }

    #[test]
    fn reciprocal() {
        let a: Rational = (2, 3).into();
        assert_eq!(a.recip().unwrap(), (3, 2).into());

        let b: Rational = (-2, 3).into();
        assert_eq!(b.recip().unwrap(), (-3, 2).into());
        assert_eq!(b.clone() * b.recip().unwrap(), Rational::one());

        assert_eq!(
            Rational::zero().recip(),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn fraction_int() {
        let b = Q.neg(&Q.nth(3));
        let d = Q.div(&Q.add(&Q.nth(100), &b), &b);
        assert_eq!(d, Rational::new(-97, 3).unwrap());
    }

    #[test]
    fn signs_and_predicates() {
        let a: Rational = (-3, 4).into();
        assert!(a.is_negative());
        assert_eq!(a.abs(), (3, 4).into());
        assert!(Rational::from_integer(7).is_integer());
        assert!(!a.is_integer());
        assert!(Rational::one().is_one());
    }

    #[test]
    fn printing() {
        let a: Rational = (3, 4).into();
        assert_eq!(a.to_string(), "3/4");

        let b: Rational = (-1, 2).into();
        assert_eq!(b.to_string(), "-1/2");

        let c: Rational = 3.into();
        assert_eq!(c.to_string(), "3");
    }
}
