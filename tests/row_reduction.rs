use ratmat::domains::rational::{Q, Rational};
use ratmat::domains::ArithmeticError;
use ratmat::tensors::matrix::{Matrix, MatrixError};

fn rat(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

fn mat(rows: Vec<Vec<i64>>) -> Matrix<Q> {
    Matrix::from_nested_vec(
        rows.into_iter()
            .map(|r| r.into_iter().map(Rational::from_integer).collect())
            .collect(),
        Q,
    )
    .unwrap()
}

#[test]
fn invertible_matrix_end_to_end() {
    let a = mat(vec![vec![1, 1], vec![1, 2]]);

    assert_eq!(*a.rref(), Matrix::identity(2, Q));
    assert_eq!(a.rank(), 2);
    assert_eq!(a.det(), Some(Rational::one()));

    let inv = a.inverse().unwrap().expect("the matrix is nonsingular");
    assert_eq!(inv, mat(vec![vec![2, -1], vec![-1, 1]]));
    assert_eq!(&a * &inv, Matrix::identity(2, Q));
}

#[test]
fn singular_matrix_end_to_end() {
    let a = mat(vec![vec![1, 2], vec![2, 4]]);

    assert_eq!(a.inverse(), Ok(None));
    assert_eq!(a.det(), Some(Rational::zero()));
    assert_eq!(a.rank(), 1);
}

#[test]
fn zero_row_kills_the_determinant() {
    let a = mat(vec![vec![1, 2, 3], vec![0, 0, 0], vec![4, 5, 6]]);

    assert_eq!(a.det(), Some(Rational::zero()));
    assert_eq!(a.inverse(), Ok(None));
    assert_eq!(a.rank(), 2);
}

#[test]
fn fractional_entries_stay_exact() {
    let a = Matrix::from_linear(
        vec![rat(1, 2), rat(1, 3), rat(1, 4), rat(1, 5)],
        2,
        2,
        Q,
    )
    .unwrap();

    // 1/2 * 1/5 - 1/3 * 1/4 = 1/60
    assert_eq!(a.det(), Some(rat(1, 60)));

    let inv = a.inverse().unwrap().expect("the matrix is nonsingular");
    assert_eq!(&a * &inv, Matrix::identity(2, Q));
    assert_eq!(inv, Matrix::from_linear(vec![rat(12, 1), rat(-20, 1), rat(-15, 1), rat(30, 1)], 2, 2, Q).unwrap());
}

#[test]
fn shape_and_index_errors() {
    let a = mat(vec![vec![1, 2, 3], vec![4, 5, 6]]);

    assert_eq!(a.inverse(), Err(MatrixError::DimensionMismatch));
    assert_eq!(a.det(), None);
    assert_eq!(a.get(2, 0), Err(MatrixError::IndexOutOfBounds));

    let b = mat(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(a.checked_add(&b), Err(MatrixError::DimensionMismatch));

    assert_eq!(
        Matrix::from_linear(vec![Rational::one(); 5], 2, 3, Q),
        Err(MatrixError::DimensionMismatch)
    );

    assert_eq!(Rational::new(1, 0), Err(ArithmeticError::DivisionByZero));
}
