//! Which normal-form properties currently hold for a polyhedron.

/// Named replacement for the representation status bitmask.
///
/// A constructor only sets the flags it can prove for the matrices it wrote.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Status {
    /// Constraints satisfy the epsilon invariant (no unbounded epsilon).
    pub conseps: bool,
    /// Constraints are in row-echelon form.
    pub consgauss: bool,
    /// Generators are in row-echelon form.
    pub gengauss: bool,
    /// Both representations are minimal with respect to epsilon.
    pub minimaleps: bool,
}

impl Status {
    /// Status of the empty polyhedron: vacuously minimal.
    pub const BOTTOM: Status = Status {
        conseps: true,
        consgauss: false,
        gengauss: false,
        minimaleps: true,
    };

    /// Status of the universe: everything holds by construction.
    pub const TOP: Status = Status {
        conseps: true,
        consgauss: true,
        gengauss: true,
        minimaleps: true,
    };

    /// Status of a freshly written constraint system awaiting conversion.
    pub const CONS_ONLY: Status = Status {
        conseps: true,
        consgauss: false,
        gengauss: false,
        minimaleps: false,
    };

    pub fn is_minimal(&self) -> bool {
        self.minimaleps
    }
}
