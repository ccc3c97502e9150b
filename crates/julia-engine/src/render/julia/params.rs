use std::mem::{offset_of, size_of};
use std::ops::Range;

use bytemuck::{Pod, Zeroable};

/// Uniform block consumed by `julia.wgsl` (`KernelParams`, group 0 binding 0).
///
/// Field order and types must match the WGSL struct; all members are 4-byte
/// scalars or `vec2<f32>`, so the Rust layout is the WGSL uniform layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct KernelParams {
    /// Render target size in physical pixels.
    pub resolution: [f32; 2],
    /// Plane translation, added after scaling.
    pub offset: [f32; 2],
    /// Animation time, already wrapped to the Julia-constant period.
    pub time: f32,
    /// Plane scale; the screen-to-plane mapping divides by this. Always > 0.
    pub zoom: f32,
    pub max_iterations: u32,
    /// Palette base hue in degrees, `[0, 360)`.
    pub base_hue: f32,
}

impl KernelParams {
    pub const SIZE: u64 = size_of::<KernelParams>() as u64;

    /// Fields that differ from `previous`; everything when there is none.
    pub fn diff(&self, previous: Option<&KernelParams>) -> ParamDirty {
        let Some(prev) = previous else {
            return ParamDirty::all();
        };
        ParamDirty {
            resolution: self.resolution != prev.resolution,
            offset: self.offset != prev.offset,
            time: self.time != prev.time,
            zoom: self.zoom != prev.zoom,
            max_iterations: self.max_iterations != prev.max_iterations,
            base_hue: self.base_hue != prev.base_hue,
        }
    }

    /// Byte ranges of the fields flagged in `dirty`, in layout order.
    pub fn dirty_ranges(dirty: ParamDirty) -> Vec<Range<usize>> {
        let fields = [
            (dirty.resolution, offset_of!(KernelParams, resolution), size_of::<[f32; 2]>()),
            (dirty.offset, offset_of!(KernelParams, offset), size_of::<[f32; 2]>()),
            (dirty.time, offset_of!(KernelParams, time), size_of::<f32>()),
            (dirty.zoom, offset_of!(KernelParams, zoom), size_of::<f32>()),
            (dirty.max_iterations, offset_of!(KernelParams, max_iterations), size_of::<u32>()),
            (dirty.base_hue, offset_of!(KernelParams, base_hue), size_of::<f32>()),
        ];

        fields
            .into_iter()
            .filter(|(is_dirty, _, _)| *is_dirty)
            .map(|(_, start, len)| start..start + len)
            .collect()
    }
}

/// Which kernel parameters changed since the last upload.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ParamDirty {
    pub resolution: bool,
    pub offset: bool,
    pub time: bool,
    pub zoom: bool,
    pub max_iterations: bool,
    pub base_hue: bool,
}

impl ParamDirty {
    pub const fn all() -> Self {
        Self {
            resolution: true,
            offset: true,
            time: true,
            zoom: true,
            max_iterations: true,
            base_hue: true,
        }
    }

    pub fn any(&self) -> bool {
        self.resolution || self.offset || self.time || self.zoom || self.max_iterations || self.base_hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> KernelParams {
        KernelParams {
            resolution: [800.0, 600.0],
            offset: [0.0, 0.0],
            time: 0.0,
            zoom: 1.0,
            max_iterations: 500,
            base_hue: 120.0,
        }
    }

    #[test]
    fn uniform_block_is_32_bytes() {
        assert_eq!(KernelParams::SIZE, 32);
        assert_eq!(KernelParams::SIZE % 16, 0);
    }

    #[test]
    fn first_upload_is_fully_dirty() {
        assert_eq!(params().diff(None), ParamDirty::all());
    }

    #[test]
    fn diff_flags_only_changed_fields() {
        let a = params();
        let mut b = a;
        b.zoom = 1.1;
        b.offset = [0.01, -0.02];

        let dirty = b.diff(Some(&a));
        assert!(dirty.zoom && dirty.offset);
        assert!(!dirty.time && !dirty.resolution && !dirty.max_iterations && !dirty.base_hue);
        assert!(!a.diff(Some(&a)).any());
    }

    #[test]
    fn dirty_ranges_match_wgsl_offsets() {
        let ranges = KernelParams::dirty_ranges(ParamDirty::all());
        assert_eq!(ranges, vec![0..8, 8..16, 16..20, 20..24, 24..28, 28..32]);

        let only_zoom = ParamDirty { zoom: true, ..ParamDirty::default() };
        assert_eq!(KernelParams::dirty_ranges(only_zoom), vec![20..24]);
    }
}
