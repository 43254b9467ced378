//! Turning a layout pass into draw calls.
//!
//! A frame is laid out completely into a [`Scene`] first and only then
//! painted, so a pass that fails halfway draws nothing but the cleared
//! background.

use crate::{
    config::{EdgeStyle, RenderStyle, VisConfig},
    error::{ConfigError, LayoutError},
    layout::{LayoutEngine, LayoutVisitor, PlacedNode},
    tree::TreeSource,
    types::Rgba,
};
use glam::Vec2;
use tracing::{debug, instrument, trace};

/// Something the renderer can draw onto.
///
/// Coordinates are in surface space: `(0, 0)` is the top-left corner and
/// `viewport()` the bottom-right one.
pub trait Surface {
    fn viewport(&self) -> Vec2;

    fn begin_frame(&mut self) {}

    fn end_frame(&mut self) {}

    fn clear(&mut self, color: Rgba);

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, thickness: f32);

    /// Cubic bezier through `points[0]` and `points[3]`.
    fn bezier(&mut self, points: [Vec2; 4], color: Rgba, thickness: f32);

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        thickness: f32,
    },
    Bezier {
        points: [Vec2; 4],
        color: Rgba,
        thickness: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

impl Primitive {
    pub fn paint<F: Surface + ?Sized>(&self, surface: &mut F) {
        match *self {
            Primitive::Line {
                from,
                to,
                color,
                thickness,
            } => surface.line(from, to, color, thickness),
            Primitive::Bezier {
                points,
                color,
                thickness,
            } => surface.bezier(points, color, thickness),
            Primitive::Circle {
                center,
                radius,
                color,
            } => surface.circle(center, radius, color),
        }
    }
}

/// Control points of the curved edge from `from` to `to`.
///
/// The curve leaves the parent heading down, bends halfway across and
/// enters the child from above.
pub fn bezier_points(from: Vec2, to: Vec2) -> [Vec2; 4] {
    let d = to - from;
    [
        from,
        from + Vec2::new(d.x / 2.0, d.y * 0.75),
        from + Vec2::new(d.x / 2.0, d.y * 0.25),
        to,
    ]
}

/// Draw list of one frame, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub nodes: usize,
    pub edges: usize,
}

impl Scene {
    pub fn paint<F: Surface + ?Sized>(&self, surface: &mut F) {
        for p in &self.primitives {
            p.paint(surface);
        }
    }
}

struct SceneBuilder<'a> {
    style: &'a RenderStyle,
    scene: Scene,
}

impl<N> LayoutVisitor<N> for SceneBuilder<'_> {
    fn edge(&mut self, parent: &PlacedNode<N>, child: &PlacedNode<N>) {
        let (from, to) = (parent.ctx.position, child.ctx.position);
        let color = self.style.line_color;
        let thickness = self.style.line_thickness;
        self.scene.primitives.push(match self.style.edge_style {
            EdgeStyle::Straight => Primitive::Line {
                from,
                to,
                color,
                thickness,
            },
            EdgeStyle::Bezier => Primitive::Bezier {
                points: bezier_points(from, to),
                color,
                thickness,
            },
        });
        self.scene.edges += 1;
    }

    fn node(&mut self, placed: &PlacedNode<N>) {
        self.scene.primitives.push(Primitive::Circle {
            center: placed.ctx.position,
            radius: placed.ctx.radius,
            color: self.style.palette.color(placed.kind),
        });
        self.scene.nodes += 1;
    }
}

/// Summary of a painted frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub origin: Vec2,
    pub nodes: usize,
    pub edges: usize,
}

/// Drives one layout pass per frame and paints the result.
///
/// Holds only configuration; every frame starts from the tree it is given.
#[derive(Clone, Debug)]
pub struct Renderer {
    engine: LayoutEngine,
    style: RenderStyle,
}

impl Renderer {
    pub fn new(cfg: VisConfig) -> Result<Self, ConfigError> {
        cfg.style.validate()?;
        Ok(Self {
            engine: LayoutEngine::new(cfg.layout)?,
            style: cfg.style,
        })
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Root position for a viewport of the given size.
    pub fn origin(&self, viewport: Vec2) -> Vec2 {
        Vec2::new(
            viewport.x * self.style.origin_x,
            viewport.y * self.style.origin_y,
        )
    }

    /// Lays out the tree under `root` for a viewport of the given size.
    pub fn build_scene<S>(
        &self,
        source: &S,
        root: S::Node,
        viewport: Vec2,
    ) -> Result<Scene, LayoutError>
    where
        S: TreeSource + ?Sized,
    {
        let mut builder = SceneBuilder {
            style: &self.style,
            scene: Scene::default(),
        };
        let ctx = self.engine.root_context(self.origin(viewport));
        self.engine.walk(source, root, ctx, &mut builder)?;
        Ok(builder.scene)
    }

    /// Clears `surface` and draws the tree under `root` onto it.
    ///
    /// If the layout fails, the frame is left cleared and the error is
    /// returned so the caller can report it and try again next frame.
    #[instrument(level = "trace", skip_all)]
    pub fn render_frame<S, F>(
        &self,
        source: &S,
        root: S::Node,
        surface: &mut F,
    ) -> Result<FrameStats, LayoutError>
    where
        S: TreeSource + ?Sized,
        F: Surface + ?Sized,
    {
        let viewport = surface.viewport();
        surface.begin_frame();
        surface.clear(self.style.background);

        let result = self.build_scene(source, root, viewport);
        if let Ok(scene) = &result {
            scene.paint(surface);
        }
        surface.end_frame();

        match result {
            Ok(scene) => {
                trace!(nodes = scene.nodes, edges = scene.edges, "frame painted");
                Ok(FrameStats {
                    origin: self.origin(viewport),
                    nodes: scene.nodes,
                    edges: scene.edges,
                })
            }
            Err(e) => {
                debug!(error = %e, "skipping frame");
                Err(e)
            }
        }
    }
}
