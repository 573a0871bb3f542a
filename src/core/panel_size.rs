use crate::math::Pixel;

/// Size of the viewport panel's content region in physical pixels
///
/// Both dimensions are always at least 1. Interactive dock resizing can
/// report zero or negative regions for a frame; every constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PanelSize {
    /// Smallest size a panel can have
    pub const MIN: PanelSize = PanelSize { width: 1, height: 1 };

    /// Create size, clamping each dimension up to 1
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Create size from signed values, clamping anything below 1
    pub fn clamped(width: i64, height: i64) -> Self {
        Self {
            width: width.clamp(1, u32::MAX as i64) as u32,
            height: height.clamp(1, u32::MAX as i64) as u32,
        }
    }

    /// Convert an available UI region in points into physical pixels
    ///
    /// Fractional pixels are truncated. NaN is treated as an empty region.
    pub fn from_points(available: egui::Vec2, pixels_per_point: f32) -> Self {
        let to_pixels = |points: f32| {
            let pixels = points * pixels_per_point;
            if pixels.is_nan() { 0 } else { pixels as i64 }
        };
        Self::clamped(to_pixels(available.x), to_pixels(available.y))
    }

    /// Extent of this size in UI points
    pub fn to_points(&self, pixels_per_point: f32) -> egui::Vec2 {
        egui::vec2(
            self.width as f32 / pixels_per_point,
            self.height as f32 / pixels_per_point,
        )
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes of an RGBA32F buffer
    pub fn byte_size(&self) -> usize {
        self.pixel_count() * Pixel::BYTES
    }

    pub fn to_extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}

impl Default for PanelSize {
    fn default() -> Self {
        Self::MIN
    }
}

impl std::fmt::Display for PanelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_positive_dimensions() {
        let size = PanelSize::new(1920, 1080);
        assert_eq!(size.width, 1920);
        assert_eq!(size.height, 1080);
    }

    #[test]
    fn test_new_clamps_zero() {
        assert_eq!(PanelSize::new(0, 0), PanelSize::MIN);
        assert_eq!(PanelSize::new(0, 7), PanelSize::new(1, 7));
    }

    #[test]
    fn test_clamped_negative() {
        assert_eq!(PanelSize::clamped(-5, 10), PanelSize::new(1, 10));
        assert_eq!(PanelSize::clamped(640, -480), PanelSize::new(640, 1));
        assert_eq!(PanelSize::clamped(i64::MIN, i64::MIN), PanelSize::MIN);
    }

    #[test]
    fn test_from_points_scales_and_truncates() {
        let size = PanelSize::from_points(egui::vec2(400.7, 300.2), 2.0);
        assert_eq!(size, PanelSize::new(801, 600));
    }

    #[test]
    fn test_from_points_clamps_degenerate_regions() {
        assert_eq!(PanelSize::from_points(egui::vec2(0.0, 0.0), 1.0), PanelSize::MIN);
        assert_eq!(PanelSize::from_points(egui::vec2(-12.0, 50.0), 1.0), PanelSize::new(1, 50));
        assert_eq!(PanelSize::from_points(egui::vec2(f32::NAN, 0.4), 1.0), PanelSize::MIN);
    }

    #[test]
    fn test_to_points_inverts_scale() {
        let points = PanelSize::new(800, 600).to_points(2.0);
        assert_eq!(points, egui::vec2(400.0, 300.0));
    }

    #[test]
    fn test_pixel_count_and_bytes() {
        let size = PanelSize::new(800, 600);
        assert_eq!(size.pixel_count(), 480_000);
        assert_eq!(size.byte_size(), 480_000 * 16);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(PanelSize::new(1024, 768).to_string(), "1024x768");
    }
}
