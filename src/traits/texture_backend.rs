use crate::core::PixelBuffer;
use crate::error::TextureError;

/// GPU texture operations used by the viewport render target
///
/// Every allocation and upload reports failure instead of leaving a
/// half-built texture behind.
pub trait TextureBackend {
    /// Live texture owned by the caller until passed to `destroy_texture`
    type Handle;

    /// Allocate a texture matching the buffer's size and upload its contents
    fn create_texture(&mut self, buffer: &PixelBuffer) -> Result<Self::Handle, TextureError>;

    /// Overwrite an existing texture with the buffer's contents
    fn upload(&mut self, handle: &Self::Handle, buffer: &PixelBuffer) -> Result<(), TextureError>;

    /// Release the texture
    fn destroy_texture(&mut self, handle: Self::Handle);
}
