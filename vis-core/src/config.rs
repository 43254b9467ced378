//! Layout and rendering parameters.
//!
//! Everything here has a compiled default; a TOML file only needs to name
//! the values it changes.

use crate::{error::ConfigError, types::NodeKind, types::Rgba};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Largest accepted [`LayoutConfig::max_depth`]. Every level is one native
/// stack frame of the layout pass.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Geometry of the recursive layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal offset unit between the root and its children.
    pub initial_spacing: f32,
    /// Vertical distance from the root to its children.
    pub vertical_step: f32,
    /// Marker radius of the root.
    pub base_radius: f32,
    /// Multiplier applied to the spacing at every level. Must be in `(0, 1)`.
    pub spacing_decay: f32,
    /// Multiplier applied to the marker radius at every level.
    pub radius_decay: f32,
    /// Multiplier applied to the vertical step at every level.
    pub step_decay: f32,
    /// Deepest level a pass may reach before it is aborted. At most
    /// [`MAX_DEPTH_LIMIT`], and the spacing must stay positive down to it.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initial_spacing: 200.0,
            vertical_step: 100.0,
            base_radius: 10.0,
            spacing_decay: 0.5,
            radius_decay: 0.9,
            step_decay: 1.0,
            max_depth: 128,
        }
    }
}

impl LayoutConfig {
    /// Spacing available to the children of a node at `depth`.
    pub fn spacing_at_depth(&self, depth: usize) -> f32 {
        (0..depth).fold(self.initial_spacing, |s, _| s * self.spacing_decay)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("layout.initial_spacing", self.initial_spacing)?;
        finite("layout.vertical_step", self.vertical_step)?;
        finite("layout.base_radius", self.base_radius)?;
        if self.base_radius < 0.0 {
            return Err(invalid("layout.base_radius", "must not be negative"));
        }
        finite("layout.spacing_decay", self.spacing_decay)?;
        if !(self.spacing_decay > 0.0 && self.spacing_decay < 1.0) {
            return Err(invalid(
                "layout.spacing_decay",
                format!("must be in (0, 1), got {}", self.spacing_decay),
            ));
        }
        unit_interval("layout.radius_decay", self.radius_decay)?;
        unit_interval("layout.step_decay", self.step_decay)?;
        if !(1..=MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            return Err(invalid(
                "layout.max_depth",
                format!("must be in 1..={MAX_DEPTH_LIMIT}, got {}", self.max_depth),
            ));
        }
        self.shrinks_to_max_depth()
    }

    /// Checks that the spacing stays positive and keeps shrinking on every
    /// level down to `max_depth`.
    fn shrinks_to_max_depth(&self) -> Result<(), ConfigError> {
        let mut spacing = self.initial_spacing;
        for depth in 1..=self.max_depth {
            let next = spacing * self.spacing_decay;
            if !(next > 0.0 && next < spacing) {
                return Err(invalid(
                    "layout.max_depth",
                    format!(
                        "spacing_decay {} stops shrinking the spacing at depth {depth}",
                        self.spacing_decay
                    ),
                ));
            }
            spacing = next;
        }
        Ok(())
    }
}

/// How an edge between two markers is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    Straight,
    #[default]
    Bezier,
}

/// Marker color per node category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub declaration: Rgba,
    pub function: Rgba,
    pub statement: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            declaration: Rgba::BLUE,
            function: Rgba::PURPLE,
            statement: Rgba::RED,
        }
    }
}

impl Palette {
    pub fn color(&self, kind: NodeKind) -> Rgba {
        match kind {
            NodeKind::Declaration => self.declaration,
            NodeKind::Function => self.function,
            NodeKind::Statement => self.statement,
        }
    }
}

/// Presentation settings of the render driver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub edge_style: EdgeStyle,
    pub line_thickness: f32,
    pub line_color: Rgba,
    pub background: Rgba,
    /// Root position as a fraction of the viewport width.
    pub origin_x: f32,
    /// Root position as a fraction of the viewport height.
    pub origin_y: f32,
    pub palette: Palette,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            edge_style: EdgeStyle::default(),
            line_thickness: 2.0,
            line_color: Rgba::GRAY,
            background: Rgba::BLACK,
            origin_x: 0.5,
            origin_y: 0.25,
            palette: Palette::default(),
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("style.line_thickness", self.line_thickness)?;
        fraction("style.origin_x", self.origin_x)?;
        fraction("style.origin_y", self.origin_y)?;
        Ok(())
    }
}

/// Complete configuration file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisConfig {
    pub layout: LayoutConfig,
    pub style: RenderStyle,
}

impl VisConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let cfg: VisConfig = toml::from_str(input)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&input)?;
        debug!(?cfg, "loaded config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.style.validate()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {v}")))
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    finite(field, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {v}")))
    }
}

fn unit_interval(field: &'static str, v: f32) -> Result<(), ConfigError> {
    finite(field, v)?;
    if v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be in (0, 1], got {v}")))
    }
}

fn fraction(field: &'static str, v: f32) -> Result<(), ConfigError> {
    finite(field, v)?;
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(invalid(field, format!("must be in [0, 1], got {v}")))
    }
}
