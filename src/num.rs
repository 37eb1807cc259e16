//! Exact values: integers for matrix coefficients, rationals for bounds.
//!
//! Matrix entries are arbitrary-precision integers. Interval endpoints are
//! arbitrary-precision rationals extended with the two infinities.

use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;

/// Bound of an interval: -∞, finite rational, or +∞.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bound {
    NegInf,
    Finite(BigRational),
    PosInf,
}

impl Bound {
    /// Finite bound from an integer.
    pub fn int(value: i64) -> Self {
        Bound::Finite(BigRational::from_integer(BigInt::from(value)))
    }

    /// Finite bound `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom == 0`.
    pub fn ratio(numer: i64, denom: i64) -> Self {
        Bound::Finite(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    pub fn is_infinite(&self) -> bool {
        !matches!(self, Bound::Finite(_))
    }

    pub fn as_finite(&self) -> Option<&BigRational> {
        match self {
            Bound::Finite(q) => Some(q),
            _ => None,
        }
    }

    /// Rounds a finite bound up to the nearest integer. Infinities are unchanged.
    pub fn ceil(&self) -> Bound {
        match self {
            Bound::Finite(q) => Bound::Finite(q.ceil()),
            other => other.clone(),
        }
    }

    /// Rounds a finite bound down to the nearest integer. Infinities are unchanged.
    pub fn floor(&self) -> Bound {
        match self {
            Bound::Finite(q) => Bound::Finite(q.floor()),
            other => other.clone(),
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
            (Bound::NegInf, Bound::NegInf) | (Bound::PosInf, Bound::PosInf) => Ordering::Equal,
            (Bound::NegInf, _) | (_, Bound::PosInf) => Ordering::Less,
            (Bound::PosInf, _) | (_, Bound::NegInf) => Ordering::Greater,
        }
    }
}

impl From<BigRational> for Bound {
    fn from(q: BigRational) -> Self {
        Bound::Finite(q)
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Bound::int(n)
    }
}

impl From<i32> for Bound {
    fn from(n: i32) -> Self {
        Bound::int(n as i64)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-∞"),
            Bound::Finite(q) => write!(f, "{}", q),
            Bound::PosInf => write!(f, "+∞"),
        }
    }
}

/// Splits a rational into `(numer, denom)` with `denom > 0` and the pair in lowest terms.
pub fn numer_denom(q: &BigRational) -> (BigInt, BigInt) {
    // BigRational keeps itself reduced with a positive denominator.
    debug_assert!(q.denom() > &BigInt::zero());
    (q.numer().clone(), q.denom().clone())
}

/// Returns true if the rational has denominator one.
pub fn is_integer(q: &BigRational) -> bool {
    q.denom().is_one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_order() {
        assert!(Bound::NegInf < Bound::int(-100));
        assert!(Bound::int(-100) < Bound::int(3));
        assert!(Bound::ratio(5, 2) < Bound::int(3));
        assert!(Bound::int(3) < Bound::PosInf);
        assert!(Bound::NegInf < Bound::PosInf);
        assert_eq!(Bound::ratio(4, 2), Bound::int(2));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Bound::ratio(1, 2).ceil(), Bound::int(1));
        assert_eq!(Bound::ratio(27, 10).floor(), Bound::int(2));
        assert_eq!(Bound::ratio(-1, 2).ceil(), Bound::int(0));
        assert_eq!(Bound::ratio(-1, 2).floor(), Bound::int(-1));
        assert_eq!(Bound::NegInf.ceil(), Bound::NegInf);
        assert_eq!(Bound::PosInf.floor(), Bound::PosInf);
    }

    #[test]
    fn test_numer_denom() {
        let q = BigRational::new(BigInt::from(6), BigInt::from(-4));
        let (n, d) = numer_denom(&q);
        assert_eq!(n, BigInt::from(-3));
        assert_eq!(d, BigInt::from(2));
        assert!(!is_integer(&q));
        assert!(is_integer(&BigRational::from_integer(BigInt::from(7))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Bound::NegInf.to_string(), "-∞");
        assert_eq!(Bound::ratio(3, 4).to_string(), "3/4");
        assert_eq!(Bound::int(5).to_string(), "5");
    }
}
