//! The polyhedron value: a constraint system and a generator system kept side by side.
//!
//! A [`Polyhedron`] carries up to four owned parts:
//!
//! - `C`, the constraint matrix (equalities first, then inequalities),
//! - `F`, the generator matrix (lines first, then rays),
//! - `satC`, one bit row per generator over the constraints,
//! - `satF`, the transpose of `satC`.
//!
//! Any of them may be absent. The polyhedron is empty exactly when both `C`
//! and `F` are absent. Nothing is ever shared between two polyhedra.

use log::warn;
use num_traits::Zero;

use crate::config::PolkaConfig;
use crate::matrix::Matrix;
use crate::satmat::SatMatrix;
use crate::status::Status;
use crate::types::{Dimension, RowKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyhedron {
    pub(crate) dim: Dimension,
    pub(crate) c: Option<Matrix>,
    pub(crate) f: Option<Matrix>,
    pub(crate) sat_c: Option<SatMatrix>,
    pub(crate) sat_f: Option<SatMatrix>,
    pub(crate) nbeq: usize,
    pub(crate) nbline: usize,
    pub(crate) status: Status,
}

impl Polyhedron {
    /// Allocates an empty shell with no representation at all.
    pub(crate) fn alloc(dim: Dimension) -> Self {
        Self {
            dim,
            c: None,
            f: None,
            sat_c: None,
            sat_f: None,
            nbeq: 0,
            nbline: 0,
            status: Status::default(),
        }
    }

    /// Drops every matrix and resets the counters, leaving the dimension untouched.
    pub(crate) fn release(&mut self) {
        self.c = None;
        self.f = None;
        self.sat_c = None;
        self.sat_f = None;
        self.nbeq = 0;
        self.nbline = 0;
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Total number of dimensions.
    pub fn nbdims(&self) -> usize {
        self.dim.total()
    }

    /// Returns true if the polyhedron is syntactically empty (no representation at all).
    pub fn is_bottom(&self) -> bool {
        self.c.is_none() && self.f.is_none()
    }

    pub fn is_minimal(&self) -> bool {
        self.status.is_minimal()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of leading equality rows in the constraint matrix.
    pub fn nbeq(&self) -> usize {
        self.nbeq
    }

    /// Number of leading line rows in the generator matrix.
    pub fn nbline(&self) -> usize {
        self.nbline
    }

    pub fn constraints(&self) -> Option<&Matrix> {
        self.c.as_ref()
    }

    pub fn generators(&self) -> Option<&Matrix> {
        self.f.as_ref()
    }

    pub fn sat_c(&self) -> Option<&SatMatrix> {
        self.sat_c.as_ref()
    }

    pub fn sat_f(&self) -> Option<&SatMatrix> {
        self.sat_f.as_ref()
    }

    /// Derives `satF` from `satC` when only the latter is present.
    ///
    /// Returns true if `satF` is available afterwards.
    pub fn ensure_sat_f(&mut self) -> bool {
        if self.sat_f.is_none() {
            self.sat_f = self.sat_c.as_ref().map(SatMatrix::transpose);
        }
        self.sat_f.is_some()
    }

    /// Checks every internal invariant, logging the first violation.
    ///
    /// Meant for `debug_assert!`: a polyhedron failing this check is the result
    /// of a programming error and must not be used further.
    pub fn check(&self, config: &PolkaConfig) -> bool {
        match self.find_violation(config) {
            None => true,
            Some(msg) => {
                warn!("polyhedron {} is inconsistent: {}", self.dim, msg);
                false
            }
        }
    }

    fn find_violation(&self, config: &PolkaConfig) -> Option<String> {
        let nbcolumns = config.dec() + self.dim.total();

        if self.is_bottom() {
            if self.sat_c.is_some() || self.sat_f.is_some() {
                return Some("empty polyhedron with a saturation matrix".into());
            }
            if self.nbeq != 0 || self.nbline != 0 {
                return Some(format!(
                    "empty polyhedron with nbeq={} nbline={}",
                    self.nbeq, self.nbline
                ));
            }
            return None;
        }

        if let Some(c) = &self.c {
            if c.nbcolumns() != nbcolumns {
                return Some(format!(
                    "constraints have {} columns, expected {}",
                    c.nbcolumns(),
                    nbcolumns
                ));
            }
            if c.nbrows() < config.dec() - 1 {
                return Some(format!(
                    "constraints have {} rows, fewer than the vacuous block",
                    c.nbrows()
                ));
            }
            if c.is_sorted() && !c.is_lex_sorted() {
                return Some("constraints flagged sorted but are not".into());
            }
            if self.nbeq != c.count_leading(RowKind::Equality) {
                return Some(format!(
                    "nbeq={} but constraints start with {} equalities",
                    self.nbeq,
                    c.count_leading(RowKind::Equality)
                ));
            }
            if (self.status.consgauss || self.status.minimaleps)
                && c.count_kind(RowKind::Equality) != self.nbeq
            {
                return Some("equalities are not all in the leading block".into());
            }
        }

        if let Some(f) = &self.f {
            if f.nbcolumns() != nbcolumns {
                return Some(format!(
                    "generators have {} columns, expected {}",
                    f.nbcolumns(),
                    nbcolumns
                ));
            }
            if f.is_sorted() && !f.is_lex_sorted() {
                return Some("generators flagged sorted but are not".into());
            }
            if self.nbline != f.count_leading(RowKind::Equality)
                || f.count_kind(RowKind::Equality) != self.nbline
            {
                return Some(format!(
                    "nbline={} does not match the leading line block",
                    self.nbline
                ));
            }
        }

        if let Some(sat_c) = &self.sat_c {
            let (Some(c), Some(f)) = (&self.c, &self.f) else {
                return Some("satC present without both matrices".into());
            };
            if sat_c.nbrows() != f.nbrows() || sat_c.nbcolumns() != c.nbrows() {
                return Some(format!(
                    "satC is {}x{}, expected {}x{}",
                    sat_c.nbrows(),
                    sat_c.nbcolumns(),
                    f.nbrows(),
                    c.nbrows()
                ));
            }
            for (g, gen) in f.rows().enumerate() {
                for (i, cons) in c.rows().enumerate() {
                    let saturates = Matrix::scalar_product(cons, gen).is_zero();
                    if sat_c.get(g, i) == saturates {
                        return Some(format!(
                            "satC bit ({}, {}) disagrees with the scalar product",
                            g, i
                        ));
                    }
                }
            }
        }

        if let Some(sat_f) = &self.sat_f {
            let Some(sat_c) = &self.sat_c else {
                return Some("satF present without satC".into());
            };
            if *sat_f != sat_c.transpose() {
                return Some("satF is not the transpose of satC".into());
            }
        }

        None
    }
}
