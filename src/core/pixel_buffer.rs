use super::panel_size::PanelSize;
use crate::math::Pixel;

/// CPU-side row-major color buffer mirrored into the viewport texture
///
/// The pixel count always equals `width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
    size: PanelSize,
}

impl PixelBuffer {
    /// Create buffer filled with opaque black
    pub fn new(size: PanelSize) -> Self {
        Self {
            pixels: vec![Pixel::default(); size.pixel_count()],
            size,
        }
    }

    /// Reallocate for a new size. Previous contents are discarded.
    pub fn resize(&mut self, size: PanelSize) {
        self.pixels.clear();
        self.pixels.resize(size.pixel_count(), Pixel::default());
        self.size = size;
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.size.width, self.size.height)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<&Pixel> {
        self.index(x, y).map(|idx| &self.pixels[idx])
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Pixel> {
        match self.index(x, y) {
            Some(idx) => Some(&mut self.pixels[idx]),
            None => None,
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Raw RGBA32F bytes, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Rows of pixels, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.size.width as usize)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.size.width && y < self.size.height {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }
}
