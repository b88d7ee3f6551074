//! Size classes and the measurements derived from them.

use thunder_graphics::{Density, Dp};

/// Bolt bounding box, in dp, before any scaling.
pub(crate) const BASE_BOLT_WIDTH: Dp = Dp(40.0);
pub(crate) const BASE_BOLT_HEIGHT: Dp = Dp(60.0);
/// Side of the square backdrop, in dp, before any scaling.
pub(crate) const BASE_VIEW_UNIT: Dp = Dp(70.0);

/// Three-tier scale applied to every derived measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    /// Scale factor applied to the base dp measurements.
    pub fn factor(self) -> f32 {
        match self {
            SizeClass::Small => 0.5,
            SizeClass::Medium => 0.75,
            SizeClass::Large => 1.0,
        }
    }

    /// Reveal-window advance per tick, in surface pixels.
    pub fn step_size(self) -> f32 {
        match self {
            SizeClass::Small => 3.0,
            SizeClass::Medium => 5.0,
            SizeClass::Large => 7.0,
        }
    }

    /// Resolves the enumerated host attribute. Unknown indices silently fall
    /// back to [`SizeClass::Medium`].
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => SizeClass::Small,
            1 => SizeClass::Medium,
            2 => SizeClass::Large,
            _ => SizeClass::Medium,
        }
    }
}

/// Measurements derived from a size class at a given display density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub backdrop_side: f32,
    pub bolt_width: f32,
    pub bolt_height: f32,
}

impl Dimensions {
    /// Derives all measurements. Pure; call again whenever the size class or
    /// density changes.
    pub fn derive(size: SizeClass, density: Density) -> Self {
        let factor = size.factor();
        Self {
            backdrop_side: BASE_VIEW_UNIT.to_px(density) * factor,
            bolt_width: BASE_BOLT_WIDTH.to_px(density) * factor,
            bolt_height: BASE_BOLT_HEIGHT.to_px(density) * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dimensions, SizeClass};
    use thunder_graphics::Density;

    #[test]
    fn unknown_indices_fall_back_to_medium() {
        assert_eq!(SizeClass::from_index(0), SizeClass::Small);
        assert_eq!(SizeClass::from_index(1), SizeClass::Medium);
        assert_eq!(SizeClass::from_index(2), SizeClass::Large);
        assert_eq!(SizeClass::from_index(-1), SizeClass::Medium);
        assert_eq!(SizeClass::from_index(3), SizeClass::Medium);
        assert_eq!(SizeClass::default(), SizeClass::Medium);
    }

    #[test]
    fn bolt_never_exceeds_backdrop() {
        for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
            let dims = Dimensions::derive(size, Density::default());
            assert!(dims.bolt_width >= 0.0);
            assert!(dims.bolt_height >= 0.0);
            assert!(dims.bolt_width <= dims.backdrop_side, "{size:?}");
            assert!(dims.bolt_height <= dims.backdrop_side, "{size:?}");
        }
    }

    #[test]
    fn dimensions_scale_with_class_and_density() {
        let large = Dimensions::derive(SizeClass::Large, Density::default());
        assert_eq!(large.backdrop_side, 70.0);
        assert_eq!(large.bolt_width, 40.0);
        assert_eq!(large.bolt_height, 60.0);

        let medium_hidpi = Dimensions::derive(SizeClass::Medium, Density::new(2.0));
        assert_eq!(medium_hidpi.backdrop_side, 105.0);
        assert_eq!(medium_hidpi.bolt_width, 60.0);
        assert_eq!(medium_hidpi.bolt_height, 90.0);
    }
}
