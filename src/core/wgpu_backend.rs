use log::debug;
use wgpu::{Device, Queue, Texture, TextureFormat, TextureView};

use super::panel_size::PanelSize;
use super::pixel_buffer::PixelBuffer;
use crate::error::TextureError;
use crate::traits::TextureBackend;

/// Viewport texture registered with the egui renderer
pub struct RenderTarget {
    texture: Texture,
    // Kept alive for as long as egui samples it
    _view: TextureView,
    id: egui::TextureId,
    size: PanelSize,
}

impl RenderTarget {
    /// Id to hand to egui's image painter
    pub fn id(&self) -> egui::TextureId {
        self.id
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    pub fn format(&self) -> TextureFormat {
        self.texture.format()
    }
}

/// Pick the texel format for viewport textures on this device
///
/// egui samples with a filtering sampler, and 32-bit float formats are
/// only filterable with `FLOAT32_FILTERABLE`.
pub fn viewport_texture_format(features: wgpu::Features) -> TextureFormat {
    if features.contains(wgpu::Features::FLOAT32_FILTERABLE) {
        TextureFormat::Rgba32Float
    } else {
        TextureFormat::Rgba16Float
    }
}

/// Sampler for the viewport: linear minify, nearest magnify, no tiling
pub fn viewport_sampler_descriptor() -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("Viewport Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    }
}

/// Texture backend on wgpu, registering each texture with egui-wgpu
///
/// Borrowed for the duration of one frame.
pub struct WgpuTextureBackend<'a> {
    device: &'a Device,
    queue: &'a Queue,
    egui_renderer: &'a mut egui_wgpu::Renderer,
    format: TextureFormat,
}

impl<'a> WgpuTextureBackend<'a> {
    pub fn new(
        device: &'a Device,
        queue: &'a Queue,
        egui_renderer: &'a mut egui_wgpu::Renderer,
        format: TextureFormat,
    ) -> Self {
        Self {
            device,
            queue,
            egui_renderer,
            format,
        }
    }

    fn allocate(&self, size: PanelSize) -> Result<Texture, TextureError> {
        let max = self.device.limits().max_texture_dimension_2d;
        if size.width > max || size.height > max {
            return Err(TextureError::allocation(
                size,
                format!("exceeds max_texture_dimension_2d ({})", max),
            ));
        }

        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Viewport Texture"),
            size: size.to_extent(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let validation = pollster::block_on(self.device.pop_error_scope());
        let out_of_memory = pollster::block_on(self.device.pop_error_scope());

        match validation.or(out_of_memory) {
            Some(err) => {
                texture.destroy();
                Err(TextureError::allocation(size, err.to_string()))
            }
            None => Ok(texture),
        }
    }

    fn write(&self, texture: &Texture, buffer: &PixelBuffer) {
        let size = buffer.size();
        match self.format {
            TextureFormat::Rgba32Float => self.write_rows(texture, size, buffer.as_bytes(), 16),
            _ => {
                let halves: Vec<[half::f16; 4]> =
                    buffer.pixels().iter().map(|p| p.to_f16()).collect();
                self.write_rows(texture, size, bytemuck::cast_slice(&halves), 8);
            }
        }
    }

    fn write_rows(&self, texture: &Texture, size: PanelSize, bytes: &[u8], bytes_per_pixel: u32) {
        self.queue.write_texture(
            texture.as_image_copy(),
            bytes,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_pixel * size.width),
                rows_per_image: Some(size.height),
            },
            size.to_extent(),
        );
    }
}

impl TextureBackend for WgpuTextureBackend<'_> {
    type Handle = RenderTarget;

    fn create_texture(&mut self, buffer: &PixelBuffer) -> Result<RenderTarget, TextureError> {
        let size = buffer.size();
        let texture = self.allocate(size)?;
        self.write(&texture, buffer);

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let id = self.egui_renderer.register_native_texture_with_sampler_options(
            self.device,
            &view,
            viewport_sampler_descriptor(),
        );
        debug!("Registered {:?} texture {} as {:?}", self.format, size, id);

        Ok(RenderTarget {
            texture,
            _view: view,
            id,
            size,
        })
    }

    fn upload(&mut self, handle: &RenderTarget, buffer: &PixelBuffer) -> Result<(), TextureError> {
        if handle.size != buffer.size() {
            return Err(TextureError::UploadSizeMismatch {
                expected: handle.size,
                actual: buffer.size(),
            });
        }
        self.write(&handle.texture, buffer);
        Ok(())
    }

    fn destroy_texture(&mut self, handle: RenderTarget) {
        debug!("Releasing texture {} ({:?})", handle.size, handle.id);
        self.egui_renderer.free_texture(&handle.id);
        handle.texture.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prefers_rgba32_when_filterable() {
        assert_eq!(
            viewport_texture_format(wgpu::Features::FLOAT32_FILTERABLE),
            TextureFormat::Rgba32Float
        );
    }

    #[test]
    fn test_format_falls_back_to_half_float() {
        assert_eq!(
            viewport_texture_format(wgpu::Features::empty()),
            TextureFormat::Rgba16Float
        );
    }

    #[test]
    fn test_sampler_clamps_and_filters() {
        let desc = viewport_sampler_descriptor();
        assert_eq!(desc.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(desc.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(desc.address_mode_v, wgpu::AddressMode::ClampToEdge);
    }
}
