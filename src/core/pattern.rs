use super::pixel_buffer::PixelBuffer;
use crate::math::Pixel;

/// Paint the placeholder gradient into a buffer
///
/// Green ramps with the column, blue with the row. Red and alpha are left
/// as they are.
pub fn fill(buffer: &mut PixelBuffer) {
    let (width, height) = buffer.dimensions();
    fill_pixels(buffer.pixels_mut(), width, height);
}

/// Slice form of [`fill`]. `pixels` must hold `width * height` entries.
pub fn fill_pixels(pixels: &mut [Pixel], width: u32, height: u32) {
    debug_assert_eq!(pixels.len(), width as usize * height as usize);

    for (y, row) in pixels.chunks_exact_mut(width as usize).enumerate() {
        let blue = y as f32 / height as f32;
        for (x, pixel) in row.iter_mut().enumerate() {
            pixel.g = x as f32 / width as f32;
            pixel.b = blue;
        }
    }
}
