//! Immutable configuration for polyhedron construction.

/// Configuration shared by all constructors of a [`Polka`][crate::constructor::Polka] manager.
///
/// # Example
///
/// ```
/// use polka_rs::config::PolkaConfig;
///
/// let config = PolkaConfig::default().with_strict(true).with_max_dims(64);
/// assert_eq!(config.dec(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolkaConfig {
    /// Support strict inequalities through the epsilon column.
    pub strict: bool,
    /// Largest total dimension a polyhedron may have.
    pub max_dims: usize,
    /// Round bounds of integer dimensions inward when building boxes.
    pub integer_tightening: bool,
}

impl PolkaConfig {
    pub const DEFAULT_MAX_DIMS: usize = 1 << 16;

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_dims(mut self, max_dims: usize) -> Self {
        self.max_dims = max_dims;
        self
    }

    pub fn with_integer_tightening(mut self, integer_tightening: bool) -> Self {
        self.integer_tightening = integer_tightening;
        self
    }

    /// Number of special columns before the first dimension column:
    /// kind and constant, plus epsilon in strict mode.
    pub const fn dec(&self) -> usize {
        if self.strict {
            3
        } else {
            2
        }
    }
}

impl Default for PolkaConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_dims: Self::DEFAULT_MAX_DIMS,
            integer_tightening: true,
        }
    }
}
