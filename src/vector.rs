//! Writers for individual constraint rows.

use log::trace;
use num_traits::Zero;

use crate::config::PolkaConfig;
use crate::matrix::Matrix;
use crate::num::{numer_denom, BigInt, BigRational};
use crate::types::{RowKind, COL_CST, COL_EPS, COL_KIND};

/// Which side of a dimension a bound row constrains.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoundSide {
    /// `x_i >= bound`
    Lower,
    /// `x_i <= bound`
    Upper,
    /// `x_i == bound`
    Point,
}

/// Writes the vacuous constraint block at rows `start..start + dec - 1`.
///
/// Without strict support this is the single row `1 >= 0`. In strict mode it
/// is the pair `eps >= 0` and `1 - eps >= 0`, which keeps epsilon bounded.
pub fn fill_constraint_top(config: &PolkaConfig, c: &mut Matrix, start: usize) {
    let one = BigInt::from(1);
    if config.strict {
        let row = c.row_mut(start);
        row.fill(BigInt::zero());
        row[COL_KIND] = BigInt::from(RowKind::Inequality.code());
        row[COL_EPS] = one.clone();

        let row = c.row_mut(start + 1);
        row.fill(BigInt::zero());
        row[COL_KIND] = BigInt::from(RowKind::Inequality.code());
        row[COL_CST] = one;
        row[COL_EPS] = BigInt::from(-1);
    } else {
        let row = c.row_mut(start);
        row.fill(BigInt::zero());
        row[COL_KIND] = BigInt::from(RowKind::Inequality.code());
        row[COL_CST] = one;
    }
}

/// Writes the bound `x_dim (>= | <= | ==) bound` into `row`.
///
/// With `bound = p/q` in lowest terms and `q > 0`, the row reads
/// `-p + q*x >= 0` for a lower bound, `p - q*x >= 0` for an upper bound and
/// `p - q*x == 0` for a point.
pub fn set_dim_bound(
    config: &PolkaConfig,
    row: &mut [BigInt],
    dim: usize,
    bound: &BigRational,
    side: BoundSide,
) {
    let (p, q) = numer_denom(bound);
    let col = config.dec() + dim;
    assert!(col < row.len(), "Dimension {} out of range", dim);

    row.fill(BigInt::zero());
    let kind = match side {
        BoundSide::Point => RowKind::Equality,
        BoundSide::Lower | BoundSide::Upper => RowKind::Inequality,
    };
    row[COL_KIND] = BigInt::from(kind.code());
    match side {
        BoundSide::Lower => {
            row[COL_CST] = -p;
            row[col] = q;
        }
        BoundSide::Upper | BoundSide::Point => {
            row[COL_CST] = p;
            row[col] = -q;
        }
    }
    trace!("set_dim_bound(x{} {:?} {}) -> {:?}", dim, side, bound, row);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_fill_top_loose() {
        let config = PolkaConfig::default();
        let mut c = Matrix::alloc(1, 4, true);
        fill_constraint_top(&config, &mut c, 0);
        assert_eq!(c.row(0), ints(&[1, 1, 0, 0]).as_slice());
    }

    #[test]
    fn test_fill_top_strict() {
        let config = PolkaConfig::default().with_strict(true);
        let mut c = Matrix::alloc(3, 4, false);
        fill_constraint_top(&config, &mut c, 1);
        assert_eq!(c.row(0), ints(&[0, 0, 0, 0]).as_slice());
        assert_eq!(c.row(1), ints(&[1, 0, 1, 0]).as_slice());
        assert_eq!(c.row(2), ints(&[1, 1, -1, 0]).as_slice());
    }

    #[test]
    fn test_fill_top_overwrites() {
        let config = PolkaConfig::default();
        let mut c = Matrix::alloc(1, 3, true);
        c.row_mut(0).fill(BigInt::from(7));
        fill_constraint_top(&config, &mut c, 0);
        assert_eq!(c.row(0), ints(&[1, 1, 0]).as_slice());
    }

    #[test]
    fn test_bounds() {
        let config = PolkaConfig::default();
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        let mut row = vec![BigInt::zero(); 4];

        set_dim_bound(&config, &mut row, 1, &half, BoundSide::Lower);
        assert_eq!(row, ints(&[1, -1, 0, 2]));

        set_dim_bound(&config, &mut row, 0, &half, BoundSide::Upper);
        assert_eq!(row, ints(&[1, 1, -2, 0]));

        let three = BigRational::from_integer(BigInt::from(-3));
        set_dim_bound(&config, &mut row, 0, &three, BoundSide::Point);
        assert_eq!(row, ints(&[0, -3, -1, 0]));
    }

    #[test]
    fn test_bounds_strict_layout() {
        let config = PolkaConfig::default().with_strict(true);
        let two = BigRational::from_integer(BigInt::from(2));
        let mut row = vec![BigInt::zero(); 4];
        set_dim_bound(&config, &mut row, 0, &two, BoundSide::Lower);
        assert_eq!(row, ints(&[1, -2, 0, 1]));
    }
}
