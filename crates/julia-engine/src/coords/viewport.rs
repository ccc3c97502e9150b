use winit::dpi::PhysicalSize;

/// Viewport size in pixels.
///
/// Pointer math uses logical pixels, the kernel `resolution` uses physical
/// pixels. Everything derived from a viewport is a ratio against
/// [`min_side`](Self::min_side), so either basis maps to the same plane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Length of the shorter side; the kernel fits the plane to this side.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }

    /// Physical size to logical size for the given DPI scale.
    ///
    /// Non-positive or non-finite scales leave the size unchanged.
    #[inline]
    pub fn to_logical(self, scale_factor: f64) -> Self {
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return self;
        }
        let s = scale_factor as f32;
        Self::new(self.width / s, self.height / s)
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
        assert!(Viewport::new(800.0, 600.0).is_valid());
    }

    #[test]
    fn min_side_picks_shorter_axis() {
        assert_eq!(Viewport::new(1280.0, 720.0).min_side(), 720.0);
        assert_eq!(Viewport::new(300.0, 900.0).min_side(), 300.0);
    }

    #[test]
    fn logical_size_divides_by_scale() {
        let physical = Viewport::new(1600.0, 1200.0);
        assert_eq!(physical.to_logical(2.0), Viewport::new(800.0, 600.0));
        assert_eq!(physical.to_logical(1.0), physical);
        assert_eq!(physical.to_logical(0.0), physical);
        assert_eq!(physical.to_logical(f64::NAN), physical);
    }

    #[test]
    fn converts_from_physical_size() {
        let v = Viewport::from(PhysicalSize::new(1920u32, 1080u32));
        assert_eq!(v, Viewport::new(1920.0, 1080.0));
    }
}
