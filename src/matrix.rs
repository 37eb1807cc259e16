//! Row-major matrices of exact integers.
//!
//! A [`Matrix`] holds either constraints or generators, one per row, using the
//! column layout described in [`crate::types`]. It carries a `sorted` flag that
//! later algorithms trust, so it must only be set when the rows really are in
//! non-decreasing lexicographic order.

use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::num::BigInt;
use crate::types::{RowKind, COL_CST, COL_KIND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<BigInt>,
    nbrows: usize,
    nbcolumns: usize,
    sorted: bool,
}

impl Matrix {
    /// Allocates a zero-filled matrix.
    ///
    /// The caller vouches for `sorted`: a zero matrix is trivially sorted, but
    /// the flag describes the rows the caller is about to write.
    pub fn alloc(nbrows: usize, nbcolumns: usize, sorted: bool) -> Self {
        Self {
            data: vec![BigInt::zero(); nbrows * nbcolumns],
            nbrows,
            nbcolumns,
            sorted,
        }
    }

    #[inline]
    pub fn nbrows(&self) -> usize {
        self.nbrows
    }

    #[inline]
    pub fn nbcolumns(&self) -> usize {
        self.nbcolumns
    }

    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn set_sorted(&mut self, sorted: bool) {
        self.sorted = sorted;
    }

    /// Borrows row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nbrows`.
    pub fn row(&self, i: usize) -> &[BigInt] {
        assert!(i < self.nbrows, "Row {} out of range ({} rows)", i, self.nbrows);
        &self.data[i * self.nbcolumns..(i + 1) * self.nbcolumns]
    }

    /// Mutably borrows row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nbrows`.
    pub fn row_mut(&mut self, i: usize) -> &mut [BigInt] {
        assert!(i < self.nbrows, "Row {} out of range ({} rows)", i, self.nbrows);
        &mut self.data[i * self.nbcolumns..(i + 1) * self.nbcolumns]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BigInt]> {
        // A zero-width matrix has empty storage, so the `max` only guards `chunks_exact(0)`.
        self.data.chunks_exact(self.nbcolumns.max(1))
    }

    /// Kind of row `i`, read from the kind column.
    pub fn row_kind(&self, i: usize) -> RowKind {
        RowKind::from_is_zero(self.row(i)[COL_KIND].is_zero())
    }

    /// Number of leading rows of the given kind.
    pub fn count_leading(&self, kind: RowKind) -> usize {
        (0..self.nbrows)
            .take_while(|&i| self.row_kind(i) == kind)
            .count()
    }

    /// Number of rows of the given kind, anywhere in the matrix.
    pub fn count_kind(&self, kind: RowKind) -> usize {
        (0..self.nbrows).filter(|&i| self.row_kind(i) == kind).count()
    }

    /// Shrinks the matrix to its first `nbrows` rows, keeping the allocation.
    ///
    /// # Panics
    ///
    /// Panics if `nbrows` exceeds the current row count.
    pub fn truncate_rows(&mut self, nbrows: usize) {
        assert!(
            nbrows <= self.nbrows,
            "Cannot truncate {} rows to {}",
            self.nbrows,
            nbrows
        );
        self.data.truncate(nbrows * self.nbcolumns);
        self.nbrows = nbrows;
    }

    /// Lexicographic comparison of rows `a` and `b`, over all columns.
    pub fn compare_rows(&self, a: usize, b: usize) -> Ordering {
        lex_cmp(self.row(a), self.row(b))
    }

    /// Returns true if the rows are in non-decreasing lexicographic order.
    pub fn is_lex_sorted(&self) -> bool {
        (1..self.nbrows).all(|i| self.compare_rows(i - 1, i) != Ordering::Greater)
    }

    /// Sorts the rows lexicographically and sets the `sorted` flag.
    ///
    /// Any saturation matrix built against the previous row order is stale afterwards.
    pub fn sort_rows(&mut self) {
        if self.sorted {
            return;
        }
        let mut rows: Vec<Vec<BigInt>> = self.rows().map(|r| r.to_vec()).collect();
        rows.sort_by(|a, b| lex_cmp(a, b));
        self.data = rows.into_iter().flatten().collect();
        self.sorted = true;
    }

    /// Scalar product of two rows, ignoring the kind column.
    ///
    /// For a constraint and a generator this is zero exactly when the generator
    /// saturates the constraint.
    pub fn scalar_product(constraint: &[BigInt], generator: &[BigInt]) -> BigInt {
        debug_assert_eq!(constraint.len(), generator.len());
        constraint[COL_CST..]
            .iter()
            .zip(&generator[COL_CST..])
            .fold(BigInt::zero(), |acc, (c, g)| acc + c * g)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = BigInt;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.row(i)[j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.row_mut(i)[j]
    }
}

/// Lexicographic order on rows of equal width.
pub fn lex_cmp(a: &[BigInt], b: &[BigInt]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}
