use thiserror::Error;

use crate::core::PanelSize;

/// Failures of GPU texture operations behind the viewport
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture allocation failed for {size}: {reason}")]
    TextureAllocationFailed { size: PanelSize, reason: String },

    #[error("upload of {actual} pixels into a {expected} texture")]
    UploadSizeMismatch { expected: PanelSize, actual: PanelSize },
}

impl TextureError {
    pub fn allocation(size: PanelSize, reason: impl Into<String>) -> Self {
        Self::TextureAllocationFailed {
            size,
            reason: reason.into(),
        }
    }
}

/// Errors that stop the shell from starting or rendering
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find appropriate adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error(transparent)]
    Texture(#[from] TextureError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_message_names_size() {
        let err = TextureError::allocation(PanelSize::new(800, 600), "out of memory");
        assert_eq!(
            err.to_string(),
            "texture allocation failed for 800x600: out of memory"
        );
    }

    #[test]
    fn test_texture_error_converts_to_shell_error() {
        let err: ShellError = TextureError::UploadSizeMismatch {
            expected: PanelSize::new(2, 2),
            actual: PanelSize::new(3, 3),
        }
        .into();
        assert_eq!(err.to_string(), "upload of 3x3 pixels into a 2x2 texture");
    }
}
