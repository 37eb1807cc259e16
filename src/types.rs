//! Dimension descriptors and row layout conventions.
//!
//! Every row of a constraint or generator matrix starts with a block of
//! special columns, followed by one column per problem dimension:
//!
//! ```text
//! | kind | constant | (epsilon) | x_0 | x_1 | ... | x_{n-1} |
//! ```
//!
//! The epsilon column only exists when strict inequalities are supported.
use std::fmt;

/// Column holding the row kind (see [`RowKind`]).
pub const COL_KIND: usize = 0;

/// Column holding the constant (homogenizing) coefficient.
pub const COL_CST: usize = 1;

/// Column holding the epsilon coefficient, in strict mode only.
pub const COL_EPS: usize = 2;

/// Dimension descriptor of a polyhedron: integer dimensions first, then real ones.
///
/// # Invariants
///
/// - Dimensions `0..intd` are integer-valued
/// - Dimensions `intd..intd + reald` are real-valued
/// - The descriptor is part of the polyhedron's identity and never changes
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Dimension {
    pub intd: usize,
    pub reald: usize,
}

impl Dimension {
    pub const fn new(intd: usize, reald: usize) -> Self {
        Self { intd, reald }
    }

    /// Purely real dimensions.
    pub const fn real(reald: usize) -> Self {
        Self { intd: 0, reald }
    }

    /// Total number of dimensions.
    pub const fn total(self) -> usize {
        self.intd + self.reald
    }

    /// Returns true if dimension `i` is integer-valued.
    pub const fn is_integer(self, i: usize) -> bool {
        i < self.intd
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(int={}, real={})", self.intd, self.reald)
    }
}

impl From<(usize, usize)> for Dimension {
    fn from((intd, reald): (usize, usize)) -> Self {
        Dimension::new(intd, reald)
    }
}

/// Discriminant stored in [`COL_KIND`].
///
/// The same value serves both representations: `0` marks an equality
/// (constraints) or a line (generators), `1` an inequality or a ray.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RowKind {
    /// Equality constraint or line generator.
    Equality,
    /// Inequality constraint or ray generator.
    Inequality,
}

impl RowKind {
    /// Encoded value for the kind column.
    pub const fn code(self) -> i32 {
        match self {
            RowKind::Equality => 0,
            RowKind::Inequality => 1,
        }
    }

    /// Decodes a kind column: zero is an equality, anything else an inequality.
    pub fn from_is_zero(is_zero: bool) -> Self {
        if is_zero {
            RowKind::Equality
        } else {
            RowKind::Inequality
        }
    }
}
