use julia_engine::coords::{Vec2, Viewport};
use julia_engine::input::MouseWheelDelta;

/// Zoom factor applied per wheel notch towards the user (zoom in).
pub const WHEEL_ZOOM_IN: f32 = 1.1;
/// Zoom factor applied per wheel notch away from the user (zoom out).
pub const WHEEL_ZOOM_OUT: f32 = 0.9;
/// Touchpad pixels that count as one wheel notch.
pub const WHEEL_PIXELS_PER_STEP: f32 = 50.0;

/// Maps screen positions to the fractal plane and back.
///
/// The plane point under the kernel's pixel `p` is
/// `screen_to_uv(p) / zoom + offset`, the same mapping `julia.wgsl` uses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::zero(),
        }
    }
}

impl ViewTransform {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the zoom without touching the offset; the view scales about the
    /// viewport centre. Non-finite or non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() || zoom <= 0.0 || zoom == self.zoom {
            return false;
        }
        self.zoom = zoom;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pointer position (top-left origin, +Y down) to the kernel's
    /// aspect-preserving coordinates (+Y up, shorter side spans `[-1, 1]`).
    pub fn screen_to_uv(p: Vec2, viewport: Viewport) -> Vec2 {
        let (cx, cy) = viewport.center();
        Vec2::new(p.x - cx, cy - p.y) * (2.0 / viewport.min_side())
    }

    /// Plane point currently drawn under pointer position `p`.
    pub fn screen_to_plane(&self, p: Vec2, viewport: Viewport) -> Vec2 {
        Self::screen_to_uv(p, viewport) / self.zoom + self.offset
    }

    /// Multiplies the zoom by `factor`, keeping the plane point under `p` fixed.
    ///
    /// Returns `false` (and changes nothing) for a non-finite or non-positive
    /// factor, an invalid viewport, or a result that is not a usable zoom.
    pub fn zoom_at(&mut self, p: Vec2, viewport: Viewport, factor: f32) -> bool {
        if !factor.is_finite() || factor <= 0.0 || !viewport.is_valid() {
            return false;
        }

        let new_zoom = self.zoom * factor;
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return false;
        }

        let s = Self::screen_to_uv(p, viewport);
        let new_offset = self.offset + s / self.zoom - s / new_zoom;
        if !new_offset.is_finite() {
            return false;
        }

        self.zoom = new_zoom;
        self.offset = new_offset;
        true
    }

    /// Zoom factor for one wheel event, `None` for a purely horizontal scroll.
    pub fn wheel_factor(delta: MouseWheelDelta) -> Option<f32> {
        match delta {
            MouseWheelDelta::Line { y, .. } => {
                if y > 0.0 {
                    Some(WHEEL_ZOOM_IN)
                } else if y < 0.0 {
                    Some(WHEEL_ZOOM_OUT)
                } else {
                    None
                }
            }
            MouseWheelDelta::Pixel { y, .. } => {
                if y == 0.0 || !y.is_finite() {
                    return None;
                }
                Some(WHEEL_ZOOM_IN.powf(y / WHEEL_PIXELS_PER_STEP))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec2, b: Vec2, eps: f32) -> bool {
        (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
    }

    #[test]
    fn square_viewport_maps_to_ndc() {
        let vp = Viewport::new(400.0, 400.0);
        assert!(close(ViewTransform::screen_to_uv(Vec2::new(0.0, 0.0), vp), Vec2::new(-1.0, 1.0), EPS));
        assert!(close(ViewTransform::screen_to_uv(Vec2::new(400.0, 400.0), vp), Vec2::new(1.0, -1.0), EPS));
        assert!(close(ViewTransform::screen_to_uv(Vec2::new(200.0, 200.0), vp), Vec2::zero(), EPS));
    }

    #[test]
    fn zoom_then_inverse_restores_view() {
        let vp = Viewport::new(800.0, 600.0);
        let pointers = [
            Vec2::new(610.0, 145.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(13.0, 587.0),
        ];

        for factor in [1.1, 0.9, 2.5, 1.0e-3, 1.0e3] {
            for p in pointers {
                let mut view = ViewTransform::default();
                assert!(view.zoom_at(p, vp, factor));
                assert!(view.zoom_at(p, vp, 1.0 / factor));

                assert!((view.zoom() - 1.0).abs() < 1e-4, "factor {factor} at {p:?}: zoom {}", view.zoom());
                assert!(
                    close(view.offset(), Vec2::zero(), 2e-3),
                    "factor {factor} at {p:?}: offset {:?}",
                    view.offset()
                );
            }
        }
    }

    #[test]
    fn anchor_stays_fixed_across_a_zoom_sequence() {
        let vp = Viewport::new(1024.0, 640.0);
        let mut view = ViewTransform::default();

        let steps = [
            (Vec2::new(100.0, 80.0), 1.1),
            (Vec2::new(900.0, 600.0), 1.1),
            (Vec2::new(512.0, 10.0), 0.9),
            (Vec2::new(33.0, 320.0), 1.1),
            (Vec2::new(700.0, 500.0), 2.5),
        ];

        for (p, factor) in steps {
            let before = view.screen_to_plane(p, vp);
            assert!(view.zoom_at(p, vp, factor));
            let after = view.screen_to_plane(p, vp);
            assert!(close(before, after, 1e-4), "{p:?}: {before:?} -> {after:?}");
        }
    }

    #[test]
    fn anchor_holds_for_tall_viewports() {
        let vp = Viewport::new(300.0, 900.0);
        let p = Vec2::new(20.0, 870.0);
        let mut view = ViewTransform::default();

        let before = view.screen_to_plane(p, vp);
        assert!(view.zoom_at(p, vp, 3.0));
        assert!(close(before, view.screen_to_plane(p, vp), EPS));
    }

    #[test]
    fn pointer_mapping_matches_the_kernel_at_any_dpi() {
        use julia_engine::render::julia::kernel::plane_coord;

        // A surface mid-resize: the pointer basis comes from the surface, not the window.
        let surface = Viewport::new(1600.0, 1000.0);
        let scale = 2.0;
        let logical = surface.to_logical(scale);

        let mut view = ViewTransform::default();
        view.zoom_at(Vec2::new(600.0, 120.0), logical, 3.0);

        for pointer in [Vec2::new(130.0, 70.0), Vec2::new(800.0, 500.0), Vec2::new(0.0, 250.0)] {
            // Kernel pixels are physical with a bottom-left origin.
            let pixel = Vec2::new(pointer.x * scale as f32, surface.height - pointer.y * scale as f32);
            let kernel = plane_coord(pixel, surface, view.zoom(), view.offset());
            let ours = view.screen_to_plane(pointer, logical);
            assert!(close(kernel, ours, 1e-5), "{pointer:?}: kernel {kernel:?} vs view {ours:?}");
        }
    }

    #[test]
    fn invalid_factors_are_ignored() {
        let vp = Viewport::new(800.0, 600.0);
        let p = Vec2::new(10.0, 10.0);
        let mut view = ViewTransform::default();

        for factor in [0.0, -1.1, f32::NAN, f32::INFINITY] {
            assert!(!view.zoom_at(p, vp, factor));
        }
        assert!(!view.zoom_at(p, Viewport::new(0.0, 600.0), 1.1));
        assert_eq!(view, ViewTransform::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let vp = Viewport::new(800.0, 600.0);
        let mut view = ViewTransform::default();
        view.zoom_at(Vec2::new(700.0, 100.0), vp, 4.0);
        assert_ne!(view, ViewTransform::default());

        view.reset();
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.offset(), Vec2::zero());
    }

    #[test]
    fn wheel_direction_sets_factor() {
        assert_eq!(ViewTransform::wheel_factor(MouseWheelDelta::Line { x: 0.0, y: 1.0 }), Some(1.1));
        assert_eq!(ViewTransform::wheel_factor(MouseWheelDelta::Line { x: 0.0, y: -3.0 }), Some(0.9));
        assert_eq!(ViewTransform::wheel_factor(MouseWheelDelta::Line { x: 2.0, y: 0.0 }), None);

        let one_notch = ViewTransform::wheel_factor(MouseWheelDelta::Pixel { x: 0.0, y: WHEEL_PIXELS_PER_STEP });
        assert!((one_notch.unwrap_or_default() - 1.1).abs() < EPS);
        let out = ViewTransform::wheel_factor(MouseWheelDelta::Pixel { x: 0.0, y: -10.0 });
        assert!(out.is_some_and(|f| f < 1.0));
    }
}
