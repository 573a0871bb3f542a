pub mod cli;
pub mod core;
pub mod error;
pub mod math;
pub mod renderer;
pub mod traits;
pub mod ui;

pub use crate::core::{PanelSize, PixelBuffer, RenderTargetManager};
pub use crate::error::{ShellError, TextureError};
pub use crate::math::Pixel;
