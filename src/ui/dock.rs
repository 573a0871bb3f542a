use egui_tiles::{Linear, LinearDir, SimplificationOptions, TileId, Tiles, Tree, UiResponse};

use super::demo::DemoPanel;
use crate::core::{PanelSize, RenderTarget, RenderTargetManager, WgpuTextureBackend};
use crate::error::TextureError;

/// Texture UVs for the viewport image, flipped vertically so buffer row 0
/// lands at the bottom of the panel
pub const VIEWPORT_UV: egui::Rect = egui::Rect {
    min: egui::pos2(0.0, 1.0),
    max: egui::pos2(1.0, 0.0),
};

const VIEWPORT_SHARE: f32 = 3.0;
const DEMO_SHARE: f32 = 1.0;

/// Content of a dock tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Viewport,
    Demo,
}

impl Pane {
    pub fn title(&self) -> &'static str {
        match self {
            Pane::Viewport => "MainView",
            Pane::Demo => "Demo",
        }
    }
}

/// Result of one frame of the dock layout
#[derive(Debug, Default)]
pub struct DockOutcome {
    pub quit_requested: bool,
    pub texture_error: Option<TextureError>,
}

/// Dockable workspace: a viewport pane and a demo pane side by side
pub struct DockLayout {
    tree: Tree<Pane>,
    demo_tile: TileId,
    show_demo: bool,
    demo: DemoPanel,
}

impl DockLayout {
    pub fn new(show_demo: bool) -> Self {
        let mut tiles = Tiles::default();
        let viewport_tile = tiles.insert_pane(Pane::Viewport);
        let demo_tile = tiles.insert_pane(Pane::Demo);

        let mut split = Linear::new(LinearDir::Horizontal, vec![viewport_tile, demo_tile]);
        split.shares.set_share(viewport_tile, VIEWPORT_SHARE);
        split.shares.set_share(demo_tile, DEMO_SHARE);
        let root = tiles.insert_container(split);

        Self {
            tree: Tree::new("gputopia_dock", root, tiles),
            demo_tile,
            show_demo,
            demo: DemoPanel::default(),
        }
    }

    pub fn show_demo(&self) -> bool {
        self.show_demo
    }

    /// Lay out menu bar and dock tree for this frame
    ///
    /// The viewport pane drives the render target; a texture failure is
    /// reported back instead of drawing a stale image.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        viewport: &mut RenderTargetManager<RenderTarget>,
        backend: &mut WgpuTextureBackend<'_>,
        fps: f32,
    ) -> DockOutcome {
        let mut outcome = DockOutcome::default();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        outcome.quit_requested = true;
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_demo, "Demo panel");
                });
            });
        });

        self.tree.tiles.set_visible(self.demo_tile, self.show_demo);

        let mut behavior = ShellBehavior {
            viewport,
            backend,
            demo: &mut self.demo,
            fps,
            texture_error: None,
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.tree.ui(&mut behavior, ui));

        outcome.texture_error = behavior.texture_error;
        outcome
    }
}

struct ShellBehavior<'a, 'b> {
    viewport: &'a mut RenderTargetManager<RenderTarget>,
    backend: &'a mut WgpuTextureBackend<'b>,
    demo: &'a mut DemoPanel,
    fps: f32,
    texture_error: Option<TextureError>,
}

impl ShellBehavior<'_, '_> {
    fn viewport_ui(&mut self, ui: &mut egui::Ui) {
        let pixels_per_point = ui.ctx().pixels_per_point();
        let size = PanelSize::from_points(ui.available_size(), pixels_per_point);

        match self.viewport.on_frame(size, &mut *self.backend) {
            Ok(target) => {
                let (rect, _) =
                    ui.allocate_exact_size(size.to_points(pixels_per_point), egui::Sense::hover());
                ui.painter()
                    .image(target.id(), rect, VIEWPORT_UV, egui::Color32::WHITE);
            }
            Err(err) => self.texture_error = Some(err),
        }
    }
}

impl egui_tiles::Behavior<Pane> for ShellBehavior<'_, '_> {
    fn tab_title_for_pane(&mut self, pane: &Pane) -> egui::WidgetText {
        pane.title().into()
    }

    fn pane_ui(&mut self, ui: &mut egui::Ui, _tile_id: TileId, pane: &mut Pane) -> UiResponse {
        match pane {
            Pane::Viewport => self.viewport_ui(ui),
            Pane::Demo => self.demo.ui(ui, &mut *self.viewport, self.fps),
        }
        UiResponse::None
    }

    fn simplification_options(&self) -> SimplificationOptions {
        SimplificationOptions {
            all_panes_must_have_tabs: true,
            ..Default::default()
        }
    }
}
