use log::debug;

use super::panel_size::PanelSize;
use super::pattern;
use super::pixel_buffer::PixelBuffer;
use crate::error::TextureError;
use crate::math::Pixel;
use crate::traits::TextureBackend;

/// Keeps the viewport's pixel buffer and GPU texture sized to its panel
///
/// Driven once per frame through [`RenderTargetManager::on_frame`]. A size
/// change reallocates the buffer, repaints it and recreates the texture.
/// A content change at the same size uploads into the existing texture.
/// Calling `on_frame` with an unchanged size touches nothing.
pub struct RenderTargetManager<H> {
    size: Option<PanelSize>,
    buffer: PixelBuffer,
    target: Option<H>,
    needs_fill: bool,
    needs_upload: bool,
    needs_refresh: bool,
    textures_created: u64,
    uploads: u64,
}

impl<H> RenderTargetManager<H> {
    pub fn new() -> Self {
        Self {
            size: None,
            buffer: PixelBuffer::new(PanelSize::MIN),
            target: None,
            needs_fill: true,
            needs_upload: true,
            needs_refresh: false,
            textures_created: 0,
            uploads: 0,
        }
    }

    /// Bring buffer and texture in line with `requested` and return the
    /// texture to draw this frame
    ///
    /// On allocation failure no texture is held; the next call retries.
    pub fn on_frame<B>(&mut self, requested: PanelSize, backend: &mut B) -> Result<&H, TextureError>
    where
        B: TextureBackend<Handle = H>,
    {
        if self.size != Some(requested) {
            debug!("Viewport resized: {:?} -> {}", self.size, requested);
            self.size = Some(requested);
            self.buffer.resize(requested);
            self.needs_fill = true;
            self.needs_upload = true;
        }

        if self.target.is_none() || self.needs_fill {
            pattern::fill(&mut self.buffer);
            self.needs_fill = false;
        }

        if self.needs_upload || self.target.is_none() {
            if let Some(old) = self.target.take() {
                backend.destroy_texture(old);
            }
            self.target = Some(backend.create_texture(&self.buffer)?);
            self.textures_created += 1;
            self.uploads += 1;
            self.needs_upload = false;
            self.needs_refresh = false;
            debug!("Created viewport texture #{} ({})", self.textures_created, requested);
        } else if self.needs_refresh {
            if let Some(target) = &self.target {
                backend.upload(target, &self.buffer)?;
                self.uploads += 1;
            }
            self.needs_refresh = false;
        }

        match &self.target {
            Some(target) => Ok(target),
            None => Err(TextureError::allocation(requested, "no texture after upload")),
        }
    }

    /// Repaint the placeholder pattern and refresh the texture next frame
    pub fn request_fill(&mut self) {
        self.needs_fill = true;
        self.needs_refresh = true;
    }

    /// Modify pixels in place; the texture is refreshed next frame
    ///
    /// The closure sees the row-major pixels and their size but cannot
    /// resize the buffer; only `on_frame` changes dimensions.
    pub fn edit_buffer<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut [Pixel], PanelSize),
    {
        let size = self.buffer.size();
        edit(self.buffer.pixels_mut(), size);
        self.needs_refresh = true;
    }

    /// Size of the current buffer and texture, `None` before the first frame
    pub fn size(&self) -> Option<PanelSize> {
        self.size
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn target(&self) -> Option<&H> {
        self.target.as_ref()
    }

    /// Number of textures allocated so far
    pub fn textures_created(&self) -> u64 {
        self.textures_created
    }

    /// Number of content uploads, including those done at creation
    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}

impl<H> Default for RenderTargetManager<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingBackend {
        next_id: u32,
        live: Vec<u32>,
        uploads: usize,
    }

    impl TextureBackend for CountingBackend {
        type Handle = (u32, PanelSize);

        fn create_texture(&mut self, buffer: &PixelBuffer) -> Result<Self::Handle, TextureError> {
            self.next_id += 1;
            self.live.push(self.next_id);
            Ok((self.next_id, buffer.size()))
        }

        fn upload(&mut self, _handle: &Self::Handle, _buffer: &PixelBuffer) -> Result<(), TextureError> {
            self.uploads += 1;
            Ok(())
        }

        fn destroy_texture(&mut self, handle: Self::Handle) {
            self.live.retain(|id| *id != handle.0);
        }
    }

    #[test]
    fn test_first_frame_creates_texture() {
        let mut manager = RenderTargetManager::new();
        let mut backend = CountingBackend::default();

        let handle = *manager.on_frame(PanelSize::new(8, 4), &mut backend).unwrap();
        assert_eq!(handle, (1, PanelSize::new(8, 4)));
        assert_eq!(manager.buffer().len(), 32);
        assert_eq!(manager.textures_created(), 1);
    }

    #[test]
    fn test_resize_replaces_texture() {
        let mut manager = RenderTargetManager::new();
        let mut backend = CountingBackend::default();

        manager.on_frame(PanelSize::new(8, 4), &mut backend).unwrap();
        let handle = *manager.on_frame(PanelSize::new(2, 2), &mut backend).unwrap();

        assert_eq!(handle, (2, PanelSize::new(2, 2)));
        assert_eq!(backend.live, vec![2]);
    }

    #[test]
    fn test_same_size_is_noop() {
        let mut manager = RenderTargetManager::new();
        let mut backend = CountingBackend::default();

        manager.on_frame(PanelSize::new(8, 4), &mut backend).unwrap();
        manager.on_frame(PanelSize::new(8, 4), &mut backend).unwrap();

        assert_eq!(manager.textures_created(), 1);
        assert_eq!(manager.uploads(), 1);
        assert_eq!(backend.uploads, 0);
    }

    #[test]
    fn test_request_fill_refreshes_in_place() {
        let mut manager = RenderTargetManager::new();
        let mut backend = CountingBackend::default();

        manager.on_frame(PanelSize::new(8, 4), &mut backend).unwrap();
        manager.request_fill();
        manager.on_frame(PanelSize::new(8, 4), &mut backend).unwrap();

        assert_eq!(manager.textures_created(), 1);
        assert_eq!(backend.uploads, 1);
    }
}
