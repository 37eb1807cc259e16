//! Canonical constructors: the empty polyhedron, the universe, and boxes.
//!
//! None of these run the double-description conversion. The bottom and top
//! polyhedra are written directly in both representations, already minimal
//! and consistent; a box only gets its constraint system and is left for the
//! conversion to canonicalize.
//!
//! # Example
//!
//! ```
//! use polka_rs::constructor::Polka;
//! use polka_rs::interval::Interval;
//! use polka_rs::types::Dimension;
//!
//! let polka = Polka::default();
//! let dim = Dimension::new(1, 1);
//!
//! let top = polka.mk_top(dim).into_inner();
//! assert_eq!(top.nbline(), 2);
//!
//! let boxed = polka.mk_box(dim, &[Interval::new(0, 3), Interval::top()]).unwrap();
//! assert!(boxed.exact && boxed.best);
//! assert_eq!(boxed.value.constraints().unwrap().nbrows(), 3);
//! ```

use log::debug;

use crate::config::PolkaConfig;
use crate::error::PolkaError;
use crate::interval::Interval;
use crate::matrix::Matrix;
use crate::num::BigInt;
use crate::poly::Polyhedron;
use crate::satmat::SatMatrix;
use crate::status::Status;
use crate::types::{Dimension, RowKind, COL_CST, COL_EPS, COL_KIND};
use crate::vector::{fill_constraint_top, set_dim_bound, BoundSide};

/// A constructed value together with its exactness report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    /// No approximation was introduced.
    pub exact: bool,
    /// The result is the best representable one.
    pub best: bool,
}

impl<T> Outcome<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            exact: true,
            best: true,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Manager for polyhedron construction.
///
/// Holds the immutable [`PolkaConfig`]; every constructor reads it and
/// allocates its own scratch space, so a `Polka` can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Polka {
    config: PolkaConfig,
}

impl Polka {
    pub fn new(config: PolkaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolkaConfig {
        &self.config
    }

    fn assert_dims(&self, dim: Dimension) {
        assert!(
            dim.total() <= self.config.max_dims,
            "Dimension {} exceeds the limit of {}",
            dim,
            self.config.max_dims
        );
    }

    /// Returns the dimension descriptor of a polyhedron.
    pub fn dimension(&self, po: &Polyhedron) -> Dimension {
        po.dimension()
    }

    /// Resets `po` to the empty polyhedron, releasing its matrices.
    ///
    /// Idempotent: calling it on an empty polyhedron is a no-op.
    pub fn set_bottom(&self, po: &mut Polyhedron) {
        po.release();
        po.status = Status::BOTTOM;
    }

    /// Creates the empty polyhedron.
    ///
    /// # Panics
    ///
    /// Panics if `dim` exceeds the configured dimension limit.
    pub fn mk_bottom(&self, dim: Dimension) -> Outcome<Polyhedron> {
        debug!("mk_bottom({})", dim);
        self.assert_dims(dim);
        let mut po = Polyhedron::alloc(dim);
        self.set_bottom(&mut po);
        Outcome::exact(po)
    }

    /// Resets `po` to the universe of its dimension, replacing any previous matrices.
    ///
    /// Constraints are the vacuous block alone. Generators are one line per
    /// dimension, then the vertex at the origin, plus in strict mode the ray
    /// along epsilon.
    pub fn set_top(&self, po: &mut Polyhedron) {
        let n = po.dim.total();
        let dec = self.config.dec();
        let nbcolumns = dec + n;
        let nbvac = dec - 1;

        let mut c = Matrix::alloc(nbvac, nbcolumns, true);
        fill_constraint_top(&self.config, &mut c, 0);

        // Line i is the unit vector in column dec + n - 1 - i, so the block is ascending.
        let mut f = Matrix::alloc(n + nbvac, nbcolumns, true);
        for i in 0..n {
            f[(i, nbcolumns - 1 - i)] = BigInt::from(1);
        }
        let mut sat_c = SatMatrix::alloc(n + nbvac, nbvac);
        let ray = BigInt::from(RowKind::Inequality.code());
        f[(n, COL_KIND)] = ray.clone();
        f[(n, COL_CST)] = BigInt::from(1);
        if self.config.strict {
            f[(n + 1, COL_KIND)] = ray;
            f[(n + 1, COL_CST)] = BigInt::from(1);
            f[(n + 1, COL_EPS)] = BigInt::from(1);
            // The vertex lies on eps = 0, the epsilon ray on 1 - eps = 0.
            sat_c.set(n, 1);
            sat_c.set(n + 1, 0);
        } else {
            sat_c.set(n, 0);
        }

        po.release();
        po.c = Some(c);
        po.f = Some(f);
        po.sat_c = Some(sat_c);
        po.nbeq = 0;
        po.nbline = n;
        po.status = Status::TOP;
        debug_assert!(po.check(&self.config));
    }

    /// Creates the universe polyhedron.
    ///
    /// # Panics
    ///
    /// Panics if `dim` exceeds the configured dimension limit.
    pub fn mk_top(&self, dim: Dimension) -> Outcome<Polyhedron> {
        debug!("mk_top({})", dim);
        self.assert_dims(dim);
        let mut po = Polyhedron::alloc(dim);
        self.set_top(&mut po);
        Outcome::exact(po)
    }

    /// Creates the box described by one interval per dimension.
    ///
    /// Only the constraint system is written; generators are left for the
    /// conversion. Integer dimensions have their bounds rounded inward when
    /// [`PolkaConfig::integer_tightening`] is set, and a dimension whose
    /// interval is empty (possibly only after rounding) makes the whole box
    /// infeasible.
    ///
    /// # Errors
    ///
    /// - [`PolkaError::DimensionMismatch`] if `intervals.len() != dim.total()`
    /// - [`PolkaError::TooManyDimensions`] if `dim` exceeds the configured limit
    /// - [`PolkaError::InfeasibleBox`] if the box is empty
    pub fn mk_box(
        &self,
        dim: Dimension,
        intervals: &[Interval],
    ) -> Result<Outcome<Polyhedron>, PolkaError> {
        debug!("mk_box({}, {} intervals)", dim, intervals.len());
        let n = dim.total();
        if n > self.config.max_dims {
            return Err(PolkaError::TooManyDimensions {
                max: self.config.max_dims,
                dim,
            });
        }
        if intervals.len() != n {
            return Err(PolkaError::DimensionMismatch {
                expected: n,
                found: intervals.len(),
            });
        }

        let dec = self.config.dec();
        let mut c = Matrix::alloc(dec - 1 + 2 * n, dec + n, false);
        fill_constraint_top(&self.config, &mut c, 0);
        let k = self.fill_constraint_box(&mut c, dec - 1, dim, intervals)?;
        c.truncate_rows(k);
        let sorted = c.is_lex_sorted();
        c.set_sorted(sorted);

        let mut po = Polyhedron::alloc(dim);
        po.nbeq = c.count_leading(RowKind::Equality);
        po.c = Some(c);
        po.status = Status::CONS_ONLY;
        debug_assert!(po.check(&self.config));
        Ok(Outcome::exact(po))
    }

    /// Like [`Polka::mk_box`], but an infeasible box becomes the empty polyhedron.
    ///
    /// # Errors
    ///
    /// The remaining errors of [`Polka::mk_box`]: a wrong number of intervals
    /// or too many dimensions.
    pub fn mk_box_or_bottom(
        &self,
        dim: Dimension,
        intervals: &[Interval],
    ) -> Result<Outcome<Polyhedron>, PolkaError> {
        match self.mk_box(dim, intervals) {
            Err(PolkaError::InfeasibleBox { dim: i }) => {
                debug!("mk_box: dimension {} is infeasible, returning bottom", i);
                Ok(self.mk_bottom(dim))
            }
            other => other,
        }
    }

    /// Writes the bound rows of the box starting at row `start`.
    ///
    /// Returns the index one past the last written row.
    fn fill_constraint_box(
        &self,
        c: &mut Matrix,
        start: usize,
        dim: Dimension,
        intervals: &[Interval],
    ) -> Result<usize, PolkaError> {
        let mut k = start;
        for (i, itv) in intervals.iter().enumerate() {
            let itv = if self.config.integer_tightening && dim.is_integer(i) {
                itv.round_inward()
            } else {
                itv.clone()
            };
            if itv.is_empty() {
                return Err(PolkaError::InfeasibleBox { dim: i });
            }
            if itv.is_point() {
                if let Some(value) = itv.lower.as_finite() {
                    set_dim_bound(&self.config, c.row_mut(k), i, value, BoundSide::Point);
                    k += 1;
                }
                continue;
            }
            if let Some(lower) = itv.lower.as_finite() {
                set_dim_bound(&self.config, c.row_mut(k), i, lower, BoundSide::Lower);
                k += 1;
            }
            if let Some(upper) = itv.upper.as_finite() {
                set_dim_bound(&self.config, c.row_mut(k), i, upper, BoundSide::Upper);
                k += 1;
            }
        }
        Ok(k)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::num::Bound;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_bottom() {
        let polka = Polka::default();
        let out = polka.mk_bottom(Dimension::new(2, 1));
        assert!(out.exact && out.best);
        let po = out.into_inner();
        assert!(po.is_bottom());
        assert!(po.sat_c().is_none() && po.sat_f().is_none());
        assert_eq!(po.nbeq(), 0);
        assert_eq!(po.nbline(), 0);
        assert_eq!(po.status(), Status::BOTTOM);
        assert!(po.check(polka.config()));
    }

    #[test]
    fn test_top_loose_layout() {
        let polka = Polka::default();
        let po = polka.mk_top(Dimension::real(2)).into_inner();

        let c = po.constraints().unwrap();
        assert_eq!(c.nbrows(), 1);
        assert_eq!(c.row(0), ints(&[1, 1, 0, 0]).as_slice());

        let f = po.generators().unwrap();
        assert_eq!(f.nbrows(), 3);
        assert_eq!(f.row(0), ints(&[0, 0, 0, 1]).as_slice());
        assert_eq!(f.row(1), ints(&[0, 0, 1, 0]).as_slice());
        assert_eq!(f.row(2), ints(&[1, 1, 0, 0]).as_slice());
        assert!(f.is_sorted());

        let sat = po.sat_c().unwrap();
        assert_eq!(sat.nbrows(), 3);
        assert_eq!(sat.nbwords(), 1);
        assert!(!sat.get(0, 0));
        assert!(!sat.get(1, 0));
        assert!(sat.get(2, 0));
        assert!(po.sat_f().is_none());
    }

    #[test]
    fn test_top_strict_layout() {
        let polka = Polka::new(PolkaConfig::default().with_strict(true));
        let po = polka.mk_top(Dimension::real(1)).into_inner();

        let c = po.constraints().unwrap();
        assert_eq!(c.nbrows(), 2);
        assert_eq!(c.row(0), ints(&[1, 0, 1, 0]).as_slice());
        assert_eq!(c.row(1), ints(&[1, 1, -1, 0]).as_slice());

        let f = po.generators().unwrap();
        assert_eq!(f.nbrows(), 3);
        assert_eq!(f.row(0), ints(&[0, 0, 0, 1]).as_slice());
        assert_eq!(f.row(1), ints(&[1, 1, 0, 0]).as_slice());
        assert_eq!(f.row(2), ints(&[1, 1, 1, 0]).as_slice());

        let sat = po.sat_c().unwrap();
        assert_eq!(sat.row(0).len(), 0);
        assert!(!sat.get(1, 0) && sat.get(1, 1));
        assert!(sat.get(2, 0) && !sat.get(2, 1));
        assert!(po.check(polka.config()));
    }

    #[test]
    fn test_top_zero_dims() {
        let polka = Polka::default();
        let po = polka.mk_top(Dimension::default()).into_inner();
        assert!(!po.is_bottom());
        assert_eq!(po.nbline(), 0);
        assert_eq!(po.generators().unwrap().nbrows(), 1);
        assert!(po.check(polka.config()));
    }

    #[test]
    fn test_set_top_replaces_box() {
        let polka = Polka::default();
        let dim = Dimension::real(1);
        let mut po = polka.mk_box(dim, &[Interval::new(0, 1)]).unwrap().into_inner();
        polka.set_top(&mut po);
        assert_eq!(po, polka.mk_top(dim).into_inner());
    }

    #[test]
    fn test_box_rows() {
        let polka = Polka::default();
        let dim = Dimension::real(2);
        let po = polka
            .mk_box(dim, &[Interval::at_least(Bound::ratio(1, 2)), Interval::at_most(3)])
            .unwrap()
            .into_inner();
        let c = po.constraints().unwrap();
        assert_eq!(c.nbrows(), 3);
        assert_eq!(c.row(0), ints(&[1, 1, 0, 0]).as_slice());
        assert_eq!(c.row(1), ints(&[1, -1, 2, 0]).as_slice());
        assert_eq!(c.row(2), ints(&[1, 3, 0, -1]).as_slice());
        assert!(po.generators().is_none());
        assert!(po.sat_c().is_none());
        assert!(!po.is_minimal());
        assert_eq!(po.status(), Status::CONS_ONLY);
    }

    #[test]
    fn test_box_sorted_flag_is_truthful() {
        let polka = Polka::default();
        let dim = Dimension::real(1);

        // [1, 1, 0] then [1, 3, -1]: ascending.
        let po = polka.mk_box(dim, &[Interval::at_most(3)]).unwrap().into_inner();
        assert!(po.constraints().unwrap().is_sorted());

        // An equality row sorts before the vacuous row.
        let po = polka.mk_box(dim, &[Interval::point(3)]).unwrap().into_inner();
        assert!(!po.constraints().unwrap().is_sorted());
        assert_eq!(po.nbeq(), 0);
    }

    #[test]
    fn test_box_real_dims_not_rounded() {
        let polka = Polka::default();
        let dim = Dimension::real(1);
        let po = polka
            .mk_box(dim, &[Interval::new(Bound::ratio(1, 2), Bound::ratio(27, 10))])
            .unwrap()
            .into_inner();
        let c = po.constraints().unwrap();
        assert_eq!(c.row(1), ints(&[1, -1, 2]).as_slice());
        assert_eq!(c.row(2), ints(&[1, 27, -10]).as_slice());
    }

    #[test]
    fn test_box_tightening_disabled() {
        let polka = Polka::new(PolkaConfig::default().with_integer_tightening(false));
        let dim = Dimension::new(1, 0);
        let po = polka
            .mk_box(dim, &[Interval::new(Bound::ratio(1, 3), Bound::ratio(2, 3))])
            .unwrap()
            .into_inner();
        assert_eq!(po.constraints().unwrap().nbrows(), 3);
    }

    #[test]
    fn test_box_errors() {
        let polka = Polka::new(PolkaConfig::default().with_max_dims(2));
        assert_eq!(
            polka.mk_box(Dimension::real(2), &[Interval::top()]).unwrap_err(),
            PolkaError::DimensionMismatch { expected: 2, found: 1 }
        );
        assert_eq!(
            polka.mk_box(Dimension::real(3), &[]).unwrap_err(),
            PolkaError::TooManyDimensions {
                max: 2,
                dim: Dimension::real(3)
            }
        );
        assert_eq!(
            polka.mk_box(Dimension::real(1), &[Interval::new(2, 1)]).unwrap_err(),
            PolkaError::InfeasibleBox { dim: 0 }
        );
    }

    #[test]
    #[should_panic(expected = "exceeds the limit")]
    fn test_top_too_many_dims() {
        let polka = Polka::new(PolkaConfig::default().with_max_dims(1));
        polka.mk_top(Dimension::real(2));
    }

    #[test]
    fn test_box_or_bottom() {
        let polka = Polka::default();
        let dim = Dimension::new(1, 0);
        let po = polka
            .mk_box_or_bottom(dim, &[Interval::point(Bound::ratio(1, 2))])
            .unwrap()
            .into_inner();
        assert!(po.is_bottom());
        assert_eq!(po, polka.mk_bottom(dim).into_inner());
    }
}
