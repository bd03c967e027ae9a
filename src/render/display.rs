/// Display-list model shared by the painter and the render engine.
use tiny_skia::{Color, Transform};

/// Geometry of a single draw command, in design-grid coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Convex polygon given by its vertices in order.
    Polygon(Vec<(i32, i32)>),
    /// Axis-aligned rectangle.
    Rect { x: i32, y: i32, w: i32, h: i32 },
    /// Ellipse inscribed in the given bounding box.
    Ellipse { x: i32, y: i32, w: i32, h: i32 },
    /// Straight segment.
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// One retained draw operation: a shape, the transform that was current
/// when it was emitted, and how to paint it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub shape: Shape,
    pub transform: Transform,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

/// An ordered frame's worth of draw commands. Rebuilt from scratch every
/// frame; equality is structural, so identical renders compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}
