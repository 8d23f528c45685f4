//! Element model for the canvas.

use crate::hit_test::{TEXT_CHAR_ADVANCE, TEXT_HEIGHT};
use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Serializable color representation (RGBA8).
///
/// The core never interprets colors; they pass through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for elements, passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke color.
    pub stroke_color: Rgba,
    /// Fill color for closed shapes.
    pub background_color: Rgba,
    /// Hand-drawn roughness parameter (rendering collaborator's concern).
    pub roughness: f64,
}

impl ElementStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the background color as a peniko Color.
    pub fn background(&self) -> Color {
        self.background_color.into()
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            background_color: Rgba::transparent(),
            roughness: 1.0,
        }
    }
}

/// The closed set of drawable element kinds.
///
/// Adding a kind is a compile-time exercise: every dispatch site matches
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    /// Directed segment from the anchor to `(x + width, y + height)`.
    Arrow,
    /// Single-line text label anchored at its top-left corner.
    Text { content: String },
}

/// One drawable element with position, extent, style, and version.
///
/// `width`/`height` are signed: for arrows they encode the segment direction,
/// for rectangles and ellipses negative extents are legal and only normalized
/// inside geometry tests, never at storage time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    pub kind: ElementKind,
    /// Anchor x (top-left corner, or segment start for arrows).
    pub x: f64,
    /// Anchor y.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: ElementStyle,
    pub(crate) version: u64,
    pub(crate) is_deleted: bool,
}

impl Element {
    /// Create a new element with a fresh id and default style.
    pub fn new(kind: ElementKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            width,
            height,
            style: ElementStyle::default(),
            version: 1,
            is_deleted: false,
        }
    }

    /// Create a rectangle element.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementKind::Rectangle, x, y, width, height)
    }

    /// Create an ellipse element from its bounding box.
    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementKind::Ellipse, x, y, width, height)
    }

    /// Create an arrow element from its start point and extent.
    pub fn arrow(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementKind::Arrow, x, y, width, height)
    }

    /// Create a text element anchored at `(x, y)`.
    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self::new(
            ElementKind::Text {
                content: content.into(),
            },
            x,
            y,
            0.0,
            0.0,
        )
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the version. Starts at 1, incremented on every store mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether this element has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Get the anchor position.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the anchor, keeping the extent (an arrow translates rigidly).
    pub fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    /// Get the normalized bounding box in canvas coordinates.
    ///
    /// Text uses the same approximate metrics as its hit box.
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ElementKind::Text { content } => {
                let width = content.chars().count() as f64 * TEXT_CHAR_ADVANCE;
                Rect::new(self.x, self.y, self.x + width, self.y + TEXT_HEIGHT)
            }
            _ => Rect::from_points(
                self.anchor(),
                Point::new(self.x + self.width, self.y + self.height),
            ),
        }
    }
}
