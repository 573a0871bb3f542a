pub mod demo;
pub mod dock;

pub use demo::DemoPanel;
pub use dock::{DockLayout, DockOutcome, Pane, VIEWPORT_UV};
