use rela::{C64, R64};
use rela::data::linear_algebra::matrix::{ExactMatrix, Matrix};
use rela::data::number_types::rational::Rational64;
use rela::error::Error;

use super::rational;

#[test]
fn sum_of_fractions() {
    let sum = R64!(1, 3) + R64!(1, 6);
    assert_eq!(sum.exact_parts(), Some((1, 2)));
    assert!(!sum.is_approximate());
}

#[test]
fn determinant_2x2() {
    assert_eq!(rational(&[&[1, 2], &[3, 4]]).determinant(), Ok(R64!(-2)));
}

#[test]
fn inverse_of_identity() {
    let identity = Matrix::<Rational64>::identity(3);
    assert_eq!(identity.inverse(), Ok(Matrix::identity(3)));
}

#[test]
fn singular() {
    assert_eq!(rational(&[&[1, 2], &[2, 4]]).inverse(), Err(Error::SingularMatrix));
}

#[test]
fn dependent_rows() {
    let m = rational(&[&[1, 1], &[2, 2]]);
    assert_eq!(m.row_reduce(), Ok(rational(&[&[1, 1], &[0, 0]])));
    assert_eq!(m.rank(), Ok(1));
    assert_eq!(m.null_space(), Ok(rational(&[&[-1], &[1]])));
}

#[test]
fn exact_complex_inverse() {
    // [[1, i], [0, 2]] has inverse [[1, -i/2], [0, 1/2]]
    let m = ExactMatrix::from_rows(vec![
        vec![C64!(R64!(1)), C64!(R64!(0), R64!(1))],
        vec![C64!(R64!(0)), C64!(R64!(2))],
    ]);
    let expected = ExactMatrix::from_rows(vec![
        vec![C64!(R64!(1)), C64!(R64!(0), R64!(-1, 2))],
        vec![C64!(R64!(0)), C64!(R64!(1, 2))],
    ]);
    assert_eq!(m.determinant(), Ok(C64!(R64!(2))));
    assert_eq!(m.inverse(), Ok(expected));
}

#[test]
fn formatting() {
    let m = rational(&[&[1, 2], &[3, 4]]).inverse().unwrap();
    assert_eq!(m.mathematica_style(), "{{-2,1},\n{3/2,-1/2}}");
    assert_eq!(m.matlab_style(), "[-2 1;\n1.5 -0.5]");
}
