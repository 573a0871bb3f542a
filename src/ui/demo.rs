use crate::core::{PanelSize, RenderTarget, RenderTargetManager};

/// Small widget panel next to the viewport
///
/// Shows render target statistics and lets the user poke the buffer.
#[derive(Debug)]
pub struct DemoPanel {
    red: f32,
    /// Viewport size the red channel was last written at
    applied_size: Option<PanelSize>,
    show_stats: bool,
    note: String,
}

impl Default for DemoPanel {
    fn default() -> Self {
        Self {
            red: 0.0,
            applied_size: None,
            show_stats: true,
            note: String::from("Hello from the demo panel"),
        }
    }
}

impl DemoPanel {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        viewport: &mut RenderTargetManager<RenderTarget>,
        fps: f32,
    ) {
        self.sync_red(viewport);

        ui.heading(
            egui::RichText::new(format!("{:.0} FPS", fps))
                .size(24.0)
                .color(egui::Color32::from_rgb(74, 158, 255)),
        );
        let frame_time_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };
        ui.label(
            egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                .size(14.0)
                .color(egui::Color32::GRAY),
        );

        ui.add_space(5.0);
        ui.separator();
        ui.checkbox(&mut self.show_stats, "Show render target stats");

        if self.show_stats {
            let size = viewport
                .size()
                .map_or_else(|| "-".to_string(), |s| s.to_string());
            ui.monospace(format!("Size: {}", size));
            ui.monospace(format!("Pixels: {}", viewport.buffer().len()));
            ui.monospace(format!("Textures created: {}", viewport.textures_created()));
            ui.monospace(format!("Uploads: {}", viewport.uploads()));
            if let Some(target) = viewport.target() {
                ui.monospace(format!("Format: {:?}", target.format()));
            }
        }

        ui.add_space(5.0);
        ui.separator();

        if ui
            .add(egui::Slider::new(&mut self.red, 0.0..=1.0).text("Red"))
            .changed()
        {
            self.apply_red(viewport);
        }

        if ui.button("Repaint pattern").clicked() {
            viewport.request_fill();
        }

        ui.add_space(5.0);
        ui.separator();
        ui.text_edit_singleline(&mut self.note);
        ui.label(self.note.as_str());
    }

    /// Re-apply the slider after the viewport was resized, since a resize
    /// resets the buffer
    fn sync_red<H>(&mut self, viewport: &mut RenderTargetManager<H>) {
        if viewport.size() == self.applied_size {
            return;
        }
        if self.red > 0.0 {
            self.apply_red(viewport);
        } else {
            self.applied_size = viewport.size();
        }
    }

    fn apply_red<H>(&mut self, viewport: &mut RenderTargetManager<H>) {
        let red = self.red;
        viewport.edit_buffer(|pixels, _| {
            for pixel in pixels {
                pixel.r = red;
            }
        });
        self.applied_size = viewport.size();
    }
}
