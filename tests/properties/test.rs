use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_traits::Zero;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rela::data::linear_algebra::matrix::{FastMatrix, Matrix};
use rela::data::number_types::rational::Rational64;
use rela::data::number_types::rational::gcd::gcd;

use super::{NR_CASES, decimals, random_exact, safe_for_floats, sparse_integers, to_fast};

#[test]
fn normalized_rationals() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..1_000 {
        let numerator = rng.gen_range(-1_000_000_i64..=1_000_000);
        let denominator = rng.gen_range(1_i64..=1_000_000) * if rng.gen_bool(0.5) { 1 } else { -1 };
        let x = Rational64::new(numerator, denominator).unwrap();

        let (n, d) = x.exact_parts().unwrap();
        assert!(d > 0);
        assert_eq!(gcd(n, d), 1);
        assert_eq!(n * denominator.signum() * (denominator.abs() / d), numerator);
    }
}

#[test]
fn divide_then_multiply() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..1_000 {
        let a = Rational64::new(rng.gen_range(-5_000..=5_000), rng.gen_range(1..=5_000)).unwrap();
        let b = Rational64::new(rng.gen_range(1..=5_000), rng.gen_range(-5_000..=-1)).unwrap();

        let result = (a / b) * b;
        assert!(!result.is_approximate());
        assert_eq!(result.exact_parts(), a.exact_parts());
    }
}

#[test]
fn double_transpose() {
    for seed in 0..NR_CASES {
        let m = random_exact(3, 5, &decimals(), seed);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn determinant_of_identity() {
    for n in 1..8 {
        assert_eq!(Matrix::<Rational64>::identity(n).determinant(), Ok(Rational64::from(1)));
        assert_eq!(FastMatrix::identity(n).determinant(), Ok(1_f64));
    }
}

#[test]
fn determinant_is_multiplicative() {
    for seed in 0..NR_CASES {
        let a = random_exact(4, 4, &sparse_integers(), 2 * seed);
        let b = random_exact(4, 4, &sparse_integers(), 2 * seed + 1);

        let product = a.product(&b).unwrap();
        let expected = a.determinant().unwrap() * b.determinant().unwrap();
        let determinant = product.determinant().unwrap();
        assert!(!determinant.is_approximate());
        assert_eq!(determinant, expected);
    }
}

#[test]
fn determinant_is_multiplicative_for_floats() {
    for seed in 0..NR_CASES {
        let a = random_exact(4, 4, &decimals(), 2 * seed);
        let b = random_exact(4, 4, &decimals(), 2 * seed + 1);
        let product = a.product(&b).unwrap();
        if ![&a, &b, &product].into_iter().all(safe_for_floats) {
            continue;
        }

        let (a, b, product) = (to_fast(&a), to_fast(&b), to_fast(&product));
        let expected = a.determinant().unwrap() * b.determinant().unwrap();
        assert_relative_eq!(product.determinant().unwrap(), expected, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn double_inverse() {
    let mut tested = 0;
    for seed in 0..NR_CASES {
        let m = random_exact(3, 3, &sparse_integers(), seed);
        if m.determinant().unwrap().is_zero() {
            continue;
        }

        let inverse = m.inverse().unwrap();
        assert_eq!(m.product(&inverse), Ok(Matrix::identity(3)));
        assert_eq!(inverse.inverse(), Ok(m));
        tested += 1;
    }
    assert!(tested > 0);
}

#[test]
fn inverse_of_floats() {
    for seed in 0..NR_CASES {
        let exact = random_exact(3, 3, &decimals(), seed);
        if !safe_for_floats(&exact) {
            continue;
        }

        let m = to_fast(&exact);
        let product = m.product(&m.inverse().unwrap()).unwrap();
        for (x, y) in product.data().iter().zip(FastMatrix::identity(3).data()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-9);
        }
    }
}

#[test]
fn rank_nullity() {
    for seed in 0..NR_CASES {
        for (nr_rows, nr_columns) in [(3, 5), (4, 4), (5, 2), (1, 3)] {
            let m = random_exact(nr_rows, nr_columns, &sparse_integers(), seed);
            let rank = m.rank().unwrap();
            let null_space = m.null_space().unwrap();

            assert_eq!(rank + null_space.nr_columns(), nr_columns);
            assert_eq!(null_space.nr_rows(), nr_columns);
            assert_eq!(m.product(&null_space), Ok(Matrix::zeros(nr_rows, null_space.nr_columns())));
            assert_eq!(m.column_space().unwrap().nr_columns(), rank);
        }
    }
}

#[test]
fn row_reduce_is_idempotent() {
    for seed in 0..NR_CASES {
        let m = random_exact(4, 5, &decimals(), seed);
        let reduced = m.row_reduce().unwrap();
        assert_eq!(reduced.row_reduce(), Ok(reduced.clone()));
        assert_eq!(reduced.rank(), m.rank());
    }
}

#[test]
fn swap_negates_determinant() {
    for seed in 0..NR_CASES {
        let m = random_exact(4, 4, &sparse_integers(), seed);
        let mut swapped = m.clone();
        swapped.swap_rows(0, 3);
        // A triangular matrix with swaps counts as derived by triangularization
        if swapped.is_triangular() {
            continue;
        }

        assert_eq!(swapped.determinant(), m.determinant().map(|d| -d));
    }
}

#[test]
fn scaling_row_scales_determinant() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for seed in 0..NR_CASES {
        let m = random_exact(4, 4, &decimals(), seed);
        let factor = Rational64::new(rng.gen_range(-9..=9), rng.gen_range(1..=9)).unwrap();
        let mut scaled = m.clone();
        scaled.scale_row(rng.gen_range(0..4), &factor);

        assert_eq!(scaled.determinant(), m.determinant().map(|d| d * factor));
    }
}

#[test]
fn fast_and_exact_agree() {
    for seed in 0..NR_CASES {
        let exact = random_exact(3, 3, &decimals(), seed);
        if !safe_for_floats(&exact) {
            continue;
        }

        let expected = exact.determinant().unwrap().to_float();
        assert_relative_eq!(to_fast(&exact).determinant().unwrap(), expected, epsilon = 1e-12, max_relative = 1e-9);
    }
}
