use serde::{Deserialize, Serialize};

/// Identifier for a node in a [`crate::tree::Tree`].
///
/// This is an index into `Tree::nodes`, and is only meaningful within
/// the lifetime of a given `Tree` instance.
pub type NodeId = usize;

/// Category of a tree element, used only to pick a marker color.
///
/// The layout never looks at the kind; it is carried alongside each
/// placed node so the renderer can tell declarations from statements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Declaration,
    /// A declaration that owns a body.
    Function,
    Statement,
}

/// An 8-bit RGBA color.
///
/// Serialized as a plain `[r, g, b, a]` array so config files stay short.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const GRAY: Rgba = Rgba([130, 130, 130, 255]);
    pub const BLUE: Rgba = Rgba([0, 121, 241, 255]);
    pub const RED: Rgba = Rgba([230, 41, 55, 255]);
    pub const PURPLE: Rgba = Rgba([200, 122, 255, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    pub const fn r(self) -> u8 {
        self.0[0]
    }

    pub const fn g(self) -> u8 {
        self.0[1]
    }

    pub const fn b(self) -> u8 {
        self.0[2]
    }

    pub const fn a(self) -> u8 {
        self.0[3]
    }
}
