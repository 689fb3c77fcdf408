//! Ratmat is an exact linear algebra toolkit for dense matrices over the
//! rational numbers.
//!
//! Matrix entries are fractions kept in lowest terms, so row reduction,
//! rank, determinant and inverse computations lose no precision. The
//! scalar types live in [domains]: arithmetic is defined on ring objects
//! such as [Z](crate::domains::integer::Z) and
//! [Q](crate::domains::rational::Q), and the matrix engine in
//! [tensors](crate::tensors::matrix) is generic over the entry ring.
//!
//! For example:
//!
//! ```
//! use ratmat::domains::rational::Q;
//! use ratmat::tensors::matrix::Matrix;
//!
//! let a = Matrix::from_linear(vec![1.into(), 1.into(), 1.into(), 2.into()], 2, 2, Q).unwrap();
//!
//! let inv = a.inverse().unwrap().expect("the matrix is nonsingular");
//! assert_eq!(&a * &inv, Matrix::identity(2, Q));
//! assert_eq!(a.det(), Some(1.into()));
//! assert_eq!(a.rank(), 2);
//! ```
pub mod domains;
pub mod tensors;
