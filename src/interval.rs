//! Intervals with exact, possibly infinite, endpoints.
//!
//! An array of intervals, one per dimension, describes an axis-aligned box.

use std::fmt;

use crate::num::Bound;

/// Closed interval `[lower, upper]`.
///
/// An infinite endpoint leaves that side unbounded. An interval with
/// `lower > upper` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Bound,
}

impl Interval {
    pub fn new(lower: impl Into<Bound>, upper: impl Into<Bound>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    /// The unbounded interval `(-∞, +∞)`.
    pub fn top() -> Self {
        Self {
            lower: Bound::NegInf,
            upper: Bound::PosInf,
        }
    }

    /// The singleton `[value, value]`.
    pub fn point(value: impl Into<Bound>) -> Self {
        let value = value.into();
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    /// `[lower, +∞)`.
    pub fn at_least(lower: impl Into<Bound>) -> Self {
        Self {
            lower: lower.into(),
            upper: Bound::PosInf,
        }
    }

    /// `(-∞, upper]`.
    pub fn at_most(upper: impl Into<Bound>) -> Self {
        Self {
            lower: Bound::NegInf,
            upper: upper.into(),
        }
    }

    pub fn is_top(&self) -> bool {
        self.lower == Bound::NegInf && self.upper == Bound::PosInf
    }

    /// Returns true for a finite singleton.
    pub fn is_point(&self) -> bool {
        !self.lower.is_infinite() && self.lower == self.upper
    }

    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Tightens both endpoints to integers without growing the interval:
    /// the lower bound rounds up, the upper bound rounds down.
    pub fn round_inward(&self) -> Interval {
        Interval {
            lower: self.lower.ceil(),
            upper: self.upper.floor(),
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::top()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower.is_infinite() { '(' } else { '[' };
        let close = if self.upper.is_infinite() { ')' } else { ']' };
        write!(f, "{}{}, {}{}", open, self.lower, self.upper, close)
    }
}
