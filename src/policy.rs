//! Resize policy configuration for `HashTable`

use thiserror::Error;

/// Default load factor above which an insertion grows the table
pub const DEFAULT_GROW_THRESHOLD: f64 = 0.7;
/// Default load factor below which a removal shrinks the table
pub const DEFAULT_SHRINK_THRESHOLD: f64 = 0.2;
/// Default capacity multiplier used when growing
pub const DEFAULT_GROW_FACTOR: f64 = 2.0;
/// Default capacity multiplier used when shrinking
pub const DEFAULT_SHRINK_FACTOR: f64 = 0.5;

/// Errors reported when validating a [`ResizePolicy`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PolicyError {
    /// The grow threshold must be a finite, strictly positive load factor
    #[error("grow threshold must be finite and positive, got {0}")]
    GrowThreshold(f64),

    /// The shrink threshold must lie in `[0, grow_threshold)`
    #[error("shrink threshold must be in [0, {grow}), got {shrink}")]
    ShrinkThreshold {
        /// The rejected shrink threshold
        shrink: f64,
        /// The grow threshold it was checked against
        grow: f64,
    },

    /// The grow factor must be finite and greater than 1
    #[error("grow factor must be finite and greater than 1, got {0}")]
    GrowFactor(f64),

    /// The shrink factor must lie strictly between 0 and 1
    #[error("shrink factor must be in (0, 1), got {0}")]
    ShrinkFactor(f64),
}

/// Load factor thresholds and capacity multipliers that drive resizing.
///
/// An insertion that adds a key grows the table by `grow_factor` once the load factor
/// exceeds `grow_threshold`. A removal shrinks it by `shrink_factor` once the load factor
/// drops below `shrink_threshold`. Chaining tolerates load factors above 1, so the grow
/// threshold has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    /// Load factor above which inserts trigger a grow
    grow_threshold: f64,
    /// Load factor below which removals trigger a shrink
    shrink_threshold: f64,
    /// Multiplier applied to the capacity on grow
    grow_factor: f64,
    /// Multiplier applied to the capacity on shrink
    shrink_factor: f64,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizePolicy {
    /// Creates the default policy: grow past 0.7 by 2x, shrink under 0.2 by 0.5x
    #[must_use]
    pub fn new() -> Self {
        Self {
            grow_threshold: DEFAULT_GROW_THRESHOLD,
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
            grow_factor: DEFAULT_GROW_FACTOR,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
        }
    }

    /// Sets the load factor above which inserts grow the table
    #[must_use]
    pub fn with_grow_threshold(mut self, threshold: f64) -> Self {
        self.grow_threshold = threshold;
        self
    }

    /// Sets the load factor below which removals shrink the table
    #[must_use]
    pub fn with_shrink_threshold(mut self, threshold: f64) -> Self {
        self.shrink_threshold = threshold;
        self
    }

    /// Sets the capacity multiplier used when growing
    #[must_use]
    pub fn with_grow_factor(mut self, factor: f64) -> Self {
        self.grow_factor = factor;
        self
    }

    /// Sets the capacity multiplier used when shrinking
    #[must_use]
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.shrink_factor = factor;
        self
    }

    /// Returns the grow threshold
    #[must_use]
    pub fn grow_threshold(&self) -> f64 {
        self.grow_threshold
    }

    /// Returns the shrink threshold
    #[must_use]
    pub fn shrink_threshold(&self) -> f64 {
        self.shrink_threshold
    }

    /// Returns the grow factor
    #[must_use]
    pub fn grow_factor(&self) -> f64 {
        self.grow_factor
    }

    /// Returns the shrink factor
    #[must_use]
    pub fn shrink_factor(&self) -> f64 {
        self.shrink_factor
    }

    /// Checks that the thresholds and factors describe a usable policy.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found, checking the grow threshold, the shrink
    /// threshold, the grow factor and the shrink factor in that order.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.grow_threshold.is_finite() || self.grow_threshold <= 0.0 {
            return Err(PolicyError::GrowThreshold(self.grow_threshold));
        }
        if !(0.0..self.grow_threshold).contains(&self.shrink_threshold) {
            return Err(PolicyError::ShrinkThreshold {
                shrink: self.shrink_threshold,
                grow: self.grow_threshold,
            });
        }
        if !self.grow_factor.is_finite() || self.grow_factor <= 1.0 {
            return Err(PolicyError::GrowFactor(self.grow_factor));
        }
        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(PolicyError::ShrinkFactor(self.shrink_factor));
        }
        Ok(())
    }
}
