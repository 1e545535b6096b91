//! Common test utilities
#![allow(dead_code)]

use tmatrix::dtype::Element;
use tmatrix::matrix::Matrix;
use tmatrix::vector::Vector;

/// Vector with element `i` set to `i`
pub fn iota(size: usize) -> Vector<i32> {
    let data: Vec<i32> = (0..size as i32).collect();
    Vector::from_vec(data).unwrap()
}

/// Matrix from literal rows
pub fn matrix<T: Element>(rows: &[&[T]]) -> Matrix<T> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Matrix with entry `[i][j] = i`
pub fn row_index_matrix(n: usize) -> Matrix<i32> {
    let mut m = Matrix::new(n).unwrap();
    for i in 0..n {
        for j in 0..n {
            m[i][j] = i as i32;
        }
    }
    m
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
