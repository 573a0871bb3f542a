pub mod clock;
pub mod panel_size;
pub mod pattern;
pub mod pixel_buffer;
pub mod render_target;
pub mod wgpu_backend;

pub use clock::FrameClock;
pub use panel_size::PanelSize;
pub use pixel_buffer::PixelBuffer;
pub use render_target::RenderTargetManager;
pub use wgpu_backend::{RenderTarget, WgpuTextureBackend};
