//! [`Surface`] implementation backed by an [`egui::Painter`].

use egui::epaint::CubicBezierShape;
use glam::Vec2;
use vis_core::{render::Surface, types::Rgba};

/// Paints into `rect` of an egui painter.
///
/// Surface coordinates are relative to the top-left corner of `rect`,
/// so the layout does not need to know where the panel sits on screen.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }
}

/// Maps a surface-space point to a screen position inside `rect`.
pub fn to_pos2(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    rect.min + egui::vec2(p.x, p.y)
}

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), c.a())
}

impl Surface for EguiSurface<'_> {
    fn viewport(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, color: Rgba) {
        self.painter.rect_filled(self.rect, 0.0, color32(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, thickness: f32) {
        self.painter.line_segment(
            [to_pos2(self.rect, from), to_pos2(self.rect, to)],
            egui::Stroke::new(thickness, color32(color)),
        );
    }

    fn bezier(&mut self, points: [Vec2; 4], color: Rgba, thickness: f32) {
        let points = points.map(|p| to_pos2(self.rect, p));
        self.painter.add(CubicBezierShape::from_points_stroke(
            points,
            false,
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(thickness, color32(color)),
        ));
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(to_pos2(self.rect, center), radius, color32(color));
    }
}
