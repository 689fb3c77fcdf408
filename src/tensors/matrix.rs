//! Dense matrices and exact row reduction.
//!
//! [Matrix] stores its entries in a flat row-major sequence together with the
//! ring object of the entry type. Elementwise arithmetic and the determinant
//! are available for any [Ring]; row reduction, rank and the inverse require
//! the entries to come from a [Field].
//!
//! The central algorithm is [Matrix::row_reduce_lockstep], which brings a
//! matrix into reduced row-echelon form while applying the identical sequence
//! of row operations to a second matrix. The paired matrix thereby accumulates
//! the full row transform, which is how [Matrix::inverse] extracts the inverse
//! from a pair that starts as the identity.

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::Chunks;

use itertools::Itertools;
use once_cell::unsync::OnceCell;

use crate::domains::{Field, Ring};

/// Errors that can occur when performing matrix operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The operand shapes are incompatible, or the backing data disagrees
    /// with the declared shape.
    DimensionMismatch,
    /// A row or column index lies outside the declared shape.
    IndexOutOfBounds,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DimensionMismatch => write!(f, "The matrix shapes are incompatible"),
            MatrixError::IndexOutOfBounds => write!(f, "The index lies outside the matrix"),
        }
    }
}

impl std::error::Error for MatrixError {}

/// A matrix with entries that are elements of a ring `F`, stored in row-major
/// order.
#[derive(Clone, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
    /// The reduced row-echelon form, populated at most once. Mutating row
    /// access clears it again.
    rref: OnceCell<Box<Matrix<F>>>,
}

impl<F: Ring> PartialEq for Matrix<F> {
    /// Compare shape and entries exactly; the cached row-echelon form does
    /// not take part in equality.
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && self.field == other.field
            && self.data == other.data
    }
}

impl<F: Ring> Eq for Matrix<F> {}

impl<F: Ring> Hash for Matrix<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nrows.hash(state);
        self.ncols.hash(state);
        self.data.hash(state);
    }
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        assert!(
            nrows > 0 && ncols > 0,
            "Matrix dimensions must be positive: ({},{})",
            nrows,
            ncols
        );

        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| field.zero())
                .collect(),
            nrows,
            ncols,
            field,
            rref: OnceCell::new(),
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main
    /// diagonal and zeroes elsewhere.
    ///
    /// # Panics
    ///
    /// Panics when `nrows` is zero.
    pub fn identity(nrows: u32, field: F) -> Matrix<F> {
        assert!(
            nrows > 0,
            "Matrix dimensions must be positive: ({},{})",
            nrows,
            nrows
        );

        Matrix {
            data: (0..nrows as usize * nrows as usize)
                .map(|i| {
                    if i % nrows as usize == i / nrows as usize {
                        field.one()
                    } else {
                        field.zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            field,
            rref: OnceCell::new(),
        }
    }

    /// Convert a linear (row-major) representation into a `Matrix`. The data
    /// length must match the declared shape and both dimensions must be
    /// positive.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if nrows == 0 || ncols == 0 || data.len() != nrows as usize * ncols as usize {
            return Err(MatrixError::DimensionMismatch);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            field,
            rref: OnceCell::new(),
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars. All rows
    /// must have the same nonzero length.
    pub fn from_nested_vec(
        matrix: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut data = Vec::with_capacity(matrix.len() * cols);
        for row in matrix {
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch);
            }
            data.extend(row);
        }

        Ok(Matrix {
            nrows: (data.len() / cols) as u32,
            ncols: cols as u32,
            data,
            field,
            rref: OnceCell::new(),
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// Return the ring of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols as usize)
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| F::is_zero(e))
    }

    /// Return true iff the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Get a reference to the entry at row `row` and column `col`.
    pub fn get(&self, row: u32, col: u32) -> Result<&F::Element, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds);
        }

        Ok(&self.data[row as usize * self.ncols as usize + col as usize])
    }

    /// Replace the entry at row `row` and column `col` and clear the cached
    /// row-echelon form.
    pub fn set(&mut self, row: u32, col: u32, e: F::Element) -> Result<(), MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds);
        }

        self.rref.take();
        self.data[row as usize * self.ncols as usize + col as usize] = e;
        Ok(())
    }

    /// Add `rhs` elementwise.
    pub fn checked_add(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.add(a, b);
        }

        Ok(m)
    }

    /// Subtract `rhs` elementwise; the same as adding the negation of `rhs`.
    pub fn checked_sub(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.sub(a, b);
        }

        Ok(m)
    }

    /// Compute the matrix product `self * rhs`.
    pub fn checked_mul(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());
        for i in 0..self.nrows as usize {
            for j in 0..rhs.ncols as usize {
                let sum = &mut m.data[i * rhs.ncols as usize + j];
                for k in 0..self.ncols as usize {
                    self.field.add_mul_assign(
                        sum,
                        &self.data[i * self.ncols as usize + k],
                        &rhs.data[k * rhs.ncols as usize + j],
                    );
                }
            }
        }

        Ok(m)
    }

    /// Multiply the scalar `e` into each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        Matrix {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
            rref: OnceCell::new(),
        }
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
        for i in 0..self.nrows as usize {
            for j in 0..self.ncols as usize {
                m.data[j * self.nrows as usize + i] =
                    self.data[i * self.ncols as usize + j].clone();
            }
        }
        m
    }

    /// Exchange the rows `r1` and `r2` in place.
    ///
    /// # Panics
    ///
    /// Panics when a row number is out of range.
    pub fn swap_rows(&mut self, r1: u32, r2: u32) {
        assert!(
            r1 < self.nrows && r2 < self.nrows,
            "Row is out of range: {} vs {} rows",
            r1.max(r2),
            self.nrows
        );

        self.rref.take();
        if r1 == r2 {
            return;
        }

        let a = r1 as usize * self.ncols as usize;
        let b = r2 as usize * self.ncols as usize;
        for c in 0..self.ncols as usize {
            self.data.swap(a + c, b + c);
        }
    }

    /// Scale every entry of the row `row` by `factor` in place. A zero factor
    /// is permitted and produces a zero row.
    ///
    /// # Panics
    ///
    /// Panics when the row number is out of range.
    pub fn mul_row(&mut self, row: u32, factor: &F::Element) {
        assert!(
            row < self.nrows,
            "Row is out of range: {} vs {} rows",
            row,
            self.nrows
        );

        self.rref.take();
        let start = row as usize * self.ncols as usize;
        for e in &mut self.data[start..start + self.ncols as usize] {
            self.field.mul_assign(e, factor);
        }
    }

    /// Add `factor` times the row `source` to the row `target` in place: the
    /// fundamental elimination step.
    ///
    /// # Panics
    ///
    /// Panics when a row number is out of range.
    pub fn add_mul_row(&mut self, target: u32, factor: &F::Element, source: u32) {
        assert!(
            target < self.nrows && source < self.nrows,
            "Row is out of range: {} vs {} rows",
            target.max(source),
            self.nrows
        );

        self.rref.take();
        let t = target as usize * self.ncols as usize;
        let s = source as usize * self.ncols as usize;
        for c in 0..self.ncols as usize {
            let e = self.data[s + c].clone();
            self.field.add_mul_assign(&mut self.data[t + c], factor, &e);
        }
    }

    /// A copy of the matrix with the given row and column removed, preserving
    /// the relative order of the remaining entries.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of range or the matrix has only one row
    /// or column.
    pub fn remove_row_and_col(&self, row: u32, col: u32) -> Matrix<F> {
        assert!(
            row < self.nrows && col < self.ncols,
            "Index is out of range: ({},{}) vs ({},{})",
            row,
            col,
            self.nrows,
            self.ncols
        );
        assert!(
            self.nrows > 1 && self.ncols > 1,
            "Cannot remove from a single row or column"
        );

        let mut data = Vec::with_capacity((self.nrows as usize - 1) * (self.ncols as usize - 1));
        for r in 0..self.nrows as usize {
            if r == row as usize {
                continue;
            }
            for c in 0..self.ncols as usize {
                if c == col as usize {
                    continue;
                }
                data.push(self.data[r * self.ncols as usize + c].clone());
            }
        }

        Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            field: self.field.clone(),
            rref: OnceCell::new(),
        }
    }

    /// Compute the determinant, or `None` when the matrix is not square.
    pub fn det(&self) -> Option<F::Element> {
        if self.nrows != self.ncols {
            return None;
        }

        Some(self.det_cofactor())
    }

    /// Cofactor (Laplace) expansion along row 0. Exponential in the matrix
    /// size; exactness is preferred over speed here and typical inputs are
    /// small.
    fn det_cofactor(&self) -> F::Element {
        let f = &self.field;
        match self.nrows {
            1 => self.data[0].clone(),
            2 => f.sub(
                &f.mul(&self.data[0], &self.data[3]),
                &f.mul(&self.data[1], &self.data[2]),
            ),
            _ => {
                let mut det = f.zero();
                for col in 0..self.ncols {
                    let minor = self.remove_row_and_col(0, col).det_cofactor();
                    if col % 2 == 0 {
                        f.add_mul_assign(&mut det, &self[(0, col)], &minor);
                    } else {
                        f.sub_mul_assign(&mut det, &self[(0, col)], &minor);
                    }
                }
                det
            }
        }
    }
}

impl<F: Field> Matrix<F> {
    /// Find the next pivot position in column-major order, strictly past the
    /// cursor `last`: only columns after the cursor's column and rows below
    /// the cursor's row are searched.
    fn next_pivot(&self, last: Option<(u32, u32)>) -> Option<(u32, u32)> {
        let (row_start, col_start) = match last {
            Some((r, c)) => (r + 1, c + 1),
            None => (0, 0),
        };

        for col in col_start..self.ncols {
            for row in row_start..self.nrows {
                if !F::is_zero(&self.data[row as usize * self.ncols as usize + col as usize]) {
                    return Some((row, col));
                }
            }
        }

        None
    }

    /// Bring `self` into reduced row-echelon form in place, applying the
    /// identical sequence of row operations to `pair`, so that `pair`
    /// accumulates the row transform. Returns the number of pivots.
    ///
    /// The pair must have the same number of rows as `self`; its column count
    /// is free.
    pub fn row_reduce_lockstep(&mut self, pair: &mut Matrix<F>) -> Result<u32, MatrixError> {
        if self.nrows != pair.nrows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut last = None;
        let mut pivots = 0;

        for cur_row in 0..self.nrows.min(self.ncols) {
            // all remaining rows are zero in the unreduced region
            let (pivot_row, pivot_col) = match self.next_pivot(last) {
                Some(p) => p,
                None => break,
            };

            self.swap_rows(cur_row, pivot_row);
            pair.swap_rows(cur_row, pivot_row);

            // the pivot search guarantees a nonzero pivot, so the inversion
            // cannot fail
            let factor = self.field.inv(&self[(cur_row, pivot_col)]);
            self.mul_row(cur_row, &factor);
            pair.mul_row(cur_row, &factor);

            for row in 0..self.nrows {
                if row != cur_row && !F::is_zero(&self[(row, pivot_col)]) {
                    let factor = self.field.neg(&self[(row, pivot_col)]);
                    self.add_mul_row(row, &factor, cur_row);
                    pair.add_mul_row(row, &factor, cur_row);
                }
            }

            last = Some((cur_row, pivot_col));
            pivots += 1;
        }

        Ok(pivots)
    }

    /// The reduced row-echelon form, computed on first use and cached until
    /// the next mutation.
    pub fn rref(&self) -> &Matrix<F> {
        self.rref.get_or_init(|| {
            let mut reduced = self.clone();
            let mut pair = Matrix::new(self.nrows, self.ncols, self.field.clone());
            reduced.row_reduce_lockstep(&mut pair).unwrap();
            Box::new(reduced)
        })
    }

    /// Compute the inverse of a square matrix: reduce a copy to row-echelon
    /// form with an identity pair in lockstep. Returns `None` when the matrix
    /// is singular and `MatrixError::DimensionMismatch` when it is not
    /// square.
    pub fn inverse(&self) -> Result<Option<Matrix<F>>, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut reduced = self.clone();
        let mut pair = Matrix::identity(self.nrows, self.field.clone());
        reduced.row_reduce_lockstep(&mut pair).unwrap();

        let invertible = reduced == Matrix::identity(self.nrows, self.field.clone());
        self.rref.get_or_init(|| Box::new(reduced));

        Ok(if invertible { Some(pair) } else { None })
    }

    /// The rank of the matrix: the number of nonzero rows of its reduced
    /// row-echelon form.
    pub fn rank(&self) -> usize {
        self.rref()
            .row_iter()
            .filter(|row| row.iter().any(|e| !F::is_zero(e)))
            .count()
    }
}

impl<F: Ring> Index<usize> for Matrix<F> {
    type Output = F::Element;

    /// Get the entry at the flat row-major position `index`; bounds are the
    /// caller's responsibility.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<F: Ring> IndexMut<usize> for Matrix<F> {
    /// Get the entry at the flat row-major position `index` and clear the
    /// cached row-echelon form; bounds are the caller's responsibility.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.rref.take();
        &mut self.data[index]
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    /// Get the entry at the `i`th row and `j`th column, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        debug_assert!(index.0 < self.nrows && index.1 < self.ncols);
        &self.data[index.0 as usize * self.ncols as usize + index.1 as usize]
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    /// Get the entry at the `i`th row and `j`th column, where `index=(i,j)`,
    /// and clear the cached row-echelon form.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut Self::Output {
        debug_assert!(index.0 < self.nrows && index.1 < self.ncols);
        self.rref.take();
        &mut self.data[index.0 as usize * self.ncols as usize + index.1 as usize]
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.row_iter()
                .map(|row| format!("[{}]", row.iter().format(", ")))
                .format(", ")
        )
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are incompatible; the checked entry point
    /// is [Matrix::checked_add].
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|_| {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            )
        })
    }
}

impl<F: Ring> AddAssign<&Matrix<F>> for Matrix<F> {
    /// Add two matrices in place.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are incompatible.
    fn add_assign(&mut self, rhs: &Matrix<F>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        self.rref.take();
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.add_assign(a, b);
        }
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are incompatible; the checked entry point
    /// is [Matrix::checked_sub].
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|_| {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            )
        })
    }
}

impl<F: Ring> SubAssign<&Matrix<F>> for Matrix<F> {
    /// Subtract two matrices in place.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are incompatible.
    fn sub_assign(&mut self, rhs: &Matrix<F>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        self.rref.take();
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.sub_assign(a, b);
        }
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are incompatible; the checked entry point
    /// is [Matrix::checked_mul].
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|_| {
            panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            )
        })
    }
}

impl<F: Ring> MulAssign<&Matrix<F>> for Matrix<F> {
    /// Multiply two matrices in place.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are incompatible.
    fn mul_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self * rhs;
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        self.rref.take();
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::domains::integer::Z;
    use crate::domains::rational::{Q, Rational};
    use crate::domains::Ring;
    use crate::tensors::matrix::{Matrix, MatrixError};

    #[test]
    fn basics() {
        let a = Matrix::from_linear(vec![1, 2, 3, 4, 5, 6], 2, 3, Z).unwrap();

        assert_eq!(a.nrows(), 2);
        assert_eq!(a.ncols(), 3);
        assert_eq!(a.transpose().data, vec![1, 4, 2, 5, 3, 6]);
        assert_eq!((-a.clone()).data, vec![-1, -2, -3, -4, -5, -6]);
        assert_eq!((&a - &a).data, vec![0, 0, 0, 0, 0, 0]);
        assert_eq!(a.mul_scalar(&3).data, vec![3, 6, 9, 12, 15, 18]);

        let b = Matrix::from_nested_vec(vec![vec![7, 8], vec![9, 10], vec![11, 12]], Z).unwrap();
        let c = &a * &b;

        assert_eq!(c.data, vec![58, 64, 139, 154]);
        assert_eq!(c[(0, 1)], 64);
        assert_eq!(c[2], 139);

        let mut d = a.clone();
        d += &a;
        assert_eq!(d.data, vec![2, 4, 6, 8, 10, 12]);

        assert_eq!(
            Matrix::from_linear(vec![1, 2, 3], 2, 2, Z),
            Err(MatrixError::DimensionMismatch)
        );
        assert_eq!(
            Matrix::from_nested_vec(vec![vec![1, 2], vec![3]], Z),
            Err(MatrixError::DimensionMismatch)
        );
        assert_eq!(
            a.checked_add(&b),
            Err(MatrixError::DimensionMismatch)
        );
    }

    #[test]
    fn checked_access() {
        let mut a = Matrix::from_linear(vec![1, 2, 3, 4], 2, 2, Z).unwrap();

        assert_eq!(a.get(1, 0), Ok(&3));
        assert_eq!(a.get(2, 0), Err(MatrixError::IndexOutOfBounds));
        assert_eq!(a.get(0, 2), Err(MatrixError::IndexOutOfBounds));

        a.set(0, 1, 9).unwrap();
        assert_eq!(a.data, vec![1, 9, 3, 4]);
        assert_eq!(a.set(0, 2, 9), Err(MatrixError::IndexOutOfBounds));
    }

    #[test]
    fn row_operations() {
        let mut a = Matrix::from_linear(vec![1, 2, 3, 4, 5, 6], 3, 2, Z).unwrap();

        a.swap_rows(0, 2);
        assert_eq!(a.data, vec![5, 6, 3, 4, 1, 2]);

        a.mul_row(1, &10);
        assert_eq!(a.data, vec![5, 6, 30, 40, 1, 2]);

        a.add_mul_row(0, &2, 2);
        assert_eq!(a.data, vec![7, 10, 30, 40, 1, 2]);

        // a zero factor is allowed and produces a singular row
        a.mul_row(2, &0);
        assert_eq!(a.data, vec![7, 10, 30, 40, 0, 0]);
    }

    #[test]
    fn rref_of_invertible_matrix() {
        let a =
            Matrix::from_linear(vec![1.into(), 1.into(), 1.into(), 2.into()], 2, 2, Q).unwrap();

        assert_eq!(*a.rref(), Matrix::identity(2, Q));
        // the cached result is reused and idempotent
        assert_eq!(a.rref().rref(), a.rref());
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn rref_of_singular_matrix() {
        let a =
            Matrix::from_linear(vec![1.into(), 2.into(), 2.into(), 4.into()], 2, 2, Q).unwrap();

        let r = Matrix::from_linear(vec![1.into(), 2.into(), 0.into(), 0.into()], 2, 2, Q).unwrap();
        assert_eq!(*a.rref(), r);
        assert_eq!(a.rank(), 1);

        let zero = Matrix::new(3, 5, Q);
        assert_eq!(*zero.rref(), zero);
        assert_eq!(zero.rank(), 0);

        assert_eq!(Matrix::identity(4, Q).rank(), 4);

        let wide =
            Matrix::from_nested_vec(vec![vec![1.into(), 2.into(), 3.into()],
                                         vec![2.into(), 4.into(), 6.into()]], Q)
                .unwrap();
        assert_eq!(wide.rank(), 1);
    }

    #[test]
    fn lockstep_pair_accumulates_transform() {
        let a = Matrix::from_nested_vec(
            vec![
                vec![1.into(), 2.into(), 3.into()],
                vec![4.into(), 5.into(), 6.into()],
                vec![7.into(), 8.into(), 9.into()],
            ],
            Q,
        )
        .unwrap();

        let mut m = a.clone();
        let mut p = Matrix::identity(3, Q);
        assert_eq!(m.row_reduce_lockstep(&mut p), Ok(2));

        // the pair accumulates the full row transform
        assert_eq!(&p * &a, m);
        assert_eq!(m, *a.rref());

        let mut short = Matrix::identity(2, Q);
        assert_eq!(
            a.clone().row_reduce_lockstep(&mut short),
            Err(MatrixError::DimensionMismatch)
        );
    }

    #[test]
    fn inverse() {
        let a =
            Matrix::from_linear(vec![1.into(), 1.into(), 1.into(), 2.into()], 2, 2, Q).unwrap();

        let inv = a.inverse().unwrap().unwrap();
        let expected = Matrix::from_linear(
            vec![2.into(), (-1).into(), (-1).into(), 1.into()],
            2,
            2,
            Q,
        )
        .unwrap();
        assert_eq!(inv, expected);
        assert_eq!(&a * &inv, Matrix::identity(2, Q));

        let b = Matrix::from_linear(
            vec![
                3.into(),
                2.into(),
                15.into(),
                4.into(),
                9.into(),
                6.into(),
                7.into(),
                8.into(),
                17.into(),
            ],
            3,
            3,
            Q,
        )
        .unwrap();
        let b_inv = b.inverse().unwrap().unwrap();
        assert_eq!(&b * &b_inv, Matrix::identity(3, Q));
    }

    #[test]
    fn inverse_of_singular_or_nonsquare_matrix() {
        let a =
            Matrix::from_linear(vec![1.into(), 2.into(), 2.into(), 4.into()], 2, 2, Q).unwrap();
        assert_eq!(a.inverse(), Ok(None));

        assert_eq!(Matrix::new(3, 3, Q).inverse(), Ok(None));

        // a repeated row makes the matrix singular
        let b = Matrix::from_nested_vec(
            vec![
                vec![1.into(), 2.into(), 3.into()],
                vec![4.into(), 5.into(), 6.into()],
                vec![1.into(), 2.into(), 3.into()],
            ],
            Q,
        )
        .unwrap();
        assert_eq!(b.inverse(), Ok(None));

        let c = Matrix::new(2, 3, Q);
        assert_eq!(c.inverse(), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn determinant() {
        let a =
            Matrix::from_linear(vec![1.into(), 1.into(), 1.into(), 2.into()], 2, 2, Q).unwrap();
        assert_eq!(a.det(), Some(1.into()));

        let b =
            Matrix::from_linear(vec![1.into(), 2.into(), 2.into(), 4.into()], 2, 2, Q).unwrap();
        assert_eq!(b.det(), Some(0.into()));

        assert_eq!(Matrix::identity(5, Q).det(), Some(1.into()));

        // cofactor expansion over the integer ring
        let c = Matrix::from_linear(vec![7], 1, 1, Z).unwrap();
        assert_eq!(c.det(), Some(7));
        let d = Matrix::from_linear(vec![1, 2, 3, 4, 5, 16, 7, 8, 9], 3, 3, Z).unwrap();
        assert_eq!(d.det(), Some(60));
        assert_eq!(d.transpose().det(), Some(60));

        let zero_row = Matrix::from_linear(vec![1, 2, 3, 0, 0, 0, 4, 5, 6], 3, 3, Z).unwrap();
        assert_eq!(zero_row.det(), Some(0));

        let nonsquare = Matrix::new(2, 3, Z);
        assert_eq!(nonsquare.det(), None);
    }

    #[test]
    fn cache_is_cleared_by_mutation() {
        let mut a =
            Matrix::from_linear(vec![1.into(), 1.into(), 1.into(), 2.into()], 2, 2, Q).unwrap();
        assert_eq!(a.rank(), 2);

        // make the second row a copy of the first
        a.set(1, 0, 1.into()).unwrap();
        a.set(1, 1, 1.into()).unwrap();
        assert_eq!(a.rank(), 1);

        a[(1, 1)] = 2.into();
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn random_inverse_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..32 {
            let data = (0..9).map(|_| Q.sample(&mut rng, (-10, 10))).collect();
            let a = Matrix::from_linear(data, 3, 3, Q).unwrap();

            match a.inverse().unwrap() {
                Some(inv) => {
                    assert_eq!(&a * &inv, Matrix::identity(3, Q));
                    assert_eq!(a.rank(), 3);
                    assert_ne!(a.det(), Some(Rational::zero()));
                }
                None => {
                    assert!(a.rank() < 3);
                    assert_eq!(a.det(), Some(Rational::zero()));
                }
            }
        }
    }

    #[test]
    fn printing() {
        let a = Matrix::from_linear(vec![1.into(), (1, 2).into(), 0.into(), 2.into()], 2, 2, Q)
            .unwrap();
        assert_eq!(a.to_string(), "[[1, 1/2], [0, 2]]");
    }
}
