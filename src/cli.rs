// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "gputopia")]
#[command(about = "Dockable GPU viewport shell", long_about = None)]
pub struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "GPUtopia")]
    pub title: String,

    /// Start with the demo panel hidden
    #[arg(long = "no-demo", default_value = "false")]
    pub no_demo: bool,

    /// Present without waiting for vertical sync
    #[arg(long = "no-vsync", default_value = "false")]
    pub no_vsync: bool,
}

impl Cli {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.no_vsync {
            wgpu::PresentMode::AutoNoVsync
        } else {
            wgpu::PresentMode::Fifo
        }
    }

    pub fn window_size(&self) -> winit::dpi::LogicalSize<u32> {
        winit::dpi::LogicalSize::new(self.width.max(1), self.height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gputopia"]).unwrap();
        assert_eq!((cli.width, cli.height), (1280, 720));
        assert_eq!(cli.title, "GPUtopia");
        assert!(!cli.no_demo);
        assert_eq!(cli.present_mode(), wgpu::PresentMode::Fifo);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "gputopia", "--width", "800", "--height", "600", "--no-demo", "--no-vsync",
        ])
        .unwrap();
        assert_eq!(cli.window_size(), winit::dpi::LogicalSize::new(800, 600));
        assert!(cli.no_demo);
        assert_eq!(cli.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn test_zero_window_size_is_clamped() {
        let cli = Cli::try_parse_from(["gputopia", "--width", "0"]).unwrap();
        assert_eq!(cli.window_size().width, 1);
    }
}
