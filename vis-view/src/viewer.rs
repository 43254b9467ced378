//! Interactive tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the tree being shown, the
//! configuration and the [`Renderer`], and implements [`eframe::App`] to
//! lay out and paint the tree once per frame.

use crate::{surface::EguiSurface, watch::WatchedTree};
use eframe::App;
use rand::rng;
use std::path::PathBuf;
use tracing::{info, warn};
use vis_core::{
    config::{EdgeStyle, MAX_DEPTH_LIMIT, VisConfig},
    error::TreeError,
    render::{FrameStats, Renderer, Surface},
    tree::Tree,
};

/// Where the displayed tree comes from.
#[derive(Debug)]
pub enum TreeInput {
    /// The built-in demo tree.
    Sample,
    /// A randomly generated tree, replaced on "Randomize".
    Random(Tree),
    /// A TOML document, reloaded when it changes on disk.
    File(WatchedTree),
}

impl TreeInput {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TreeError> {
        WatchedTree::open(path).map(TreeInput::File)
    }

    fn label(&self) -> String {
        match self {
            TreeInput::Sample => "sample".to_owned(),
            TreeInput::Random(_) => "random".to_owned(),
            TreeInput::File(w) => w.path().display().to_string(),
        }
    }
}

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions (source switching, config edits).
/// 2. Refresh a file-backed tree if the document changed.
/// 3. Lay out the tree and paint it into the central panel.
///
/// ### Fields
/// - `input` - Source of the displayed tree.
/// - `sample` - Cached demo tree used by [`TreeInput::Sample`].
/// - `cfg` - Configuration as edited in the side panel.
/// - `renderer` - Renderer built from the last valid `cfg`.
///
/// - `rng` - Random number generator used for "Randomize".
/// - `random_depth` / `random_fanout` - Shape limits of random trees.
///
/// - `last_stats` - Statistics of the last painted frame.
/// - `tree_error` - Error of the last failed document load, until a reload
///   succeeds.
/// - `config_error` - Why the edited `cfg` was rejected, until a valid one
///   is applied.
/// - `frame_error` - Layout error of the last frame, if it was skipped.
pub struct Viewer {
    input: TreeInput,
    sample: Tree,
    cfg: VisConfig,
    renderer: Renderer,

    rng: rand::rngs::ThreadRng,
    random_depth: usize,
    random_fanout: usize,

    last_stats: Option<FrameStats>,
    tree_error: Option<String>,
    config_error: Option<String>,
    frame_error: Option<String>,
}

impl Viewer {
    /// Creates a viewer for `input` with a renderer built from `renderer`'s
    /// configuration.
    pub fn new(input: TreeInput, renderer: Renderer) -> Self {
        let cfg = VisConfig {
            layout: *renderer.engine().config(),
            style: *renderer.style(),
        };
        Self {
            input,
            sample: Tree::sample(),
            cfg,
            renderer,
            rng: rng(),
            random_depth: 5,
            random_fanout: 4,
            last_stats: None,
            tree_error: None,
            config_error: None,
            frame_error: None,
        }
    }

    fn tree(&self) -> &Tree {
        match &self.input {
            TreeInput::Sample => &self.sample,
            TreeInput::Random(tree) => tree,
            TreeInput::File(watched) => watched.tree(),
        }
    }

    /// Replaces the displayed tree with a freshly generated random one.
    fn randomize(&mut self) {
        let tree = Tree::random(&mut self.rng, self.random_depth, self.random_fanout);
        info!(nodes = tree.len(), "generated random tree");
        self.input = TreeInput::Random(tree);
    }

    fn reload(&mut self) {
        if let TreeInput::File(watched) = &mut self.input {
            self.tree_error = watched.reload().err().map(|e| e.to_string());
        }
    }

    /// Rebuilds the renderer if the edited configuration changed.
    ///
    /// An invalid configuration leaves the previous renderer in place.
    fn apply_config(&mut self) {
        let current = VisConfig {
            layout: *self.renderer.engine().config(),
            style: *self.renderer.style(),
        };
        if current == self.cfg {
            return;
        }
        match Renderer::new(self.cfg) {
            Ok(renderer) => {
                self.renderer = renderer;
                self.config_error = None;
            }
            Err(e) => {
                let msg = e.to_string();
                if self.config_error.as_deref() != Some(msg.as_str()) {
                    warn!(error = %e, "ignoring config change");
                }
                self.config_error = Some(msg);
            }
        }
    }

    /// Runs one frame: refreshes the tree source and paints the tree.
    ///
    /// Errors are recorded for the status bar; the next frame tries again.
    fn draw(&mut self, surface: &mut impl Surface) {
        if let TreeInput::File(watched) = &mut self.input {
            match watched.refresh() {
                Ok(true) => self.tree_error = None,
                Ok(false) => {}
                Err(e) => self.tree_error = Some(e.to_string()),
            }
        }

        let tree = self.tree();
        match self.renderer.render_frame(tree, tree.root(), surface) {
            Ok(stats) => {
                self.last_stats = Some(stats);
                self.frame_error = None;
            }
            Err(e) => {
                let msg = e.to_string();
                if self.frame_error.as_deref() != Some(msg.as_str()) {
                    warn!(error = %e, "layout failed");
                }
                self.last_stats = None;
                self.frame_error = Some(msg);
            }
        }
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (tree source and edge style).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(matches!(self.input, TreeInput::Sample), "Sample")
                    .clicked()
                {
                    self.input = TreeInput::Sample;
                }

                if ui.button("Randomize").clicked() {
                    self.randomize();
                }

                let is_file = matches!(self.input, TreeInput::File(_));
                if ui.add_enabled(is_file, egui::Button::new("Reload")).clicked() {
                    self.reload();
                }

                ui.separator();
                ui.label("Edges:");
                ui.radio_value(&mut self.cfg.style.edge_style, EdgeStyle::Straight, "straight");
                ui.radio_value(&mut self.cfg.style.edge_style, EdgeStyle::Bezier, "curved");
            });
        });
    }

    /// Builds the bottom status bar (source, counts, pending errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("source = {}", self.input.label()));
                ui.separator();
                if let Some(stats) = self.last_stats {
                    ui.label(format!("nodes = {}", stats.nodes));
                    ui.label(format!("edges = {}", stats.edges));
                    ui.label(format!("origin = ({:.0}, {:.0})", stats.origin.x, stats.origin.y));
                }
                let errors = [&self.frame_error, &self.tree_error, &self.config_error];
                for err in errors.into_iter().flatten() {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Layout");
                let layout = &mut self.cfg.layout;
                Self::labeled_drag_f32(
                    ui,
                    "initial_spacing:",
                    &mut layout.initial_spacing,
                    1.0..=1000.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "vertical_step:",
                    &mut layout.vertical_step,
                    1.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "base_radius:",
                    &mut layout.base_radius,
                    0.0..=50.0,
                    0.2,
                );
                Self::labeled_drag_usize(
                    ui,
                    "max_depth:",
                    &mut layout.max_depth,
                    1..=MAX_DEPTH_LIMIT,
                    1.0,
                );

                ui.separator();
                ui.label("Decay per level");
                Self::labeled_drag_f32(
                    ui,
                    "spacing:",
                    &mut layout.spacing_decay,
                    0.05..=0.95,
                    0.01,
                );
                Self::labeled_drag_f32(ui, "radius:", &mut layout.radius_decay, 0.05..=1.0, 0.01);
                Self::labeled_drag_f32(ui, "step:", &mut layout.step_decay, 0.05..=1.0, 0.01);

                ui.separator();
                ui.label("Style");
                let style = &mut self.cfg.style;
                Self::labeled_drag_f32(
                    ui,
                    "line_thickness:",
                    &mut style.line_thickness,
                    0.5..=10.0,
                    0.1,
                );
                Self::labeled_drag_f32(ui, "origin_x:", &mut style.origin_x, 0.0..=1.0, 0.01);
                Self::labeled_drag_f32(ui, "origin_y:", &mut style.origin_y, 0.0..=1.0, 0.01);

                ui.separator();
                ui.label("Random trees");
                Self::labeled_drag_usize(ui, "depth:", &mut self.random_depth, 1..=10, 1.0);
                Self::labeled_drag_usize(ui, "fanout:", &mut self.random_fanout, 0..=9, 1.0);

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = VisConfig::default();
                }
            });
    }

    /// Builds the central panel where the tree is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let mut surface = EguiSurface::new(&painter, response.rect);
                self.draw(&mut surface);
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// The tree is laid out from scratch every frame, so a repaint is
    /// always requested.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.apply_config();
        self.ui_central_panel(ctx);
        ctx.request_repaint();
    }
}
