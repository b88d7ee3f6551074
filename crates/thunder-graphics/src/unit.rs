//! Density-independent units.

/// A length in density-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts to surface pixels at the given display density.
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.factor()
    }
}

/// Display density: surface pixels per dp. Never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(f32);

impl Density {
    pub fn new(factor: f32) -> Self {
        Self(factor.max(0.0))
    }

    pub fn factor(self) -> f32 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
