//! Saturation matrices.
//!
//! `satC` has one row per generator and one bit per constraint; `satF` is its
//! transpose. A bit is set when the generator does *not* saturate the
//! constraint, i.e. their scalar product is strictly positive.

use crate::bitset::BitSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatMatrix {
    rows: Vec<BitSet>,
    nbcolumns: usize,
}

impl SatMatrix {
    /// Allocates an all-zero saturation matrix of `nbrows` rows, each `nbcolumns` bits wide.
    pub fn alloc(nbrows: usize, nbcolumns: usize) -> Self {
        Self {
            rows: vec![BitSet::new(nbcolumns); nbrows],
            nbcolumns,
        }
    }

    #[inline]
    pub fn nbrows(&self) -> usize {
        self.rows.len()
    }

    /// Width of each row, in bits.
    #[inline]
    pub fn nbcolumns(&self) -> usize {
        self.nbcolumns
    }

    /// Number of backing words per row.
    pub fn nbwords(&self) -> usize {
        BitSet::words_for(self.nbcolumns)
    }

    pub fn row(&self, i: usize) -> &BitSet {
        &self.rows[i]
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].contains(col)
    }

    pub fn set(&mut self, row: usize, col: usize) {
        self.rows[row].insert(col);
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.rows[row].remove(col);
    }

    /// Builds the transposed matrix: `nbcolumns` rows of `nbrows` bits.
    pub fn transpose(&self) -> SatMatrix {
        let mut res = SatMatrix::alloc(self.nbcolumns, self.nbrows());
        for (i, row) in self.rows.iter().enumerate() {
            for j in row.iter() {
                res.set(j, i);
            }
        }
        res
    }
}
