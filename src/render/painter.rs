/// Retained-mode painter — a transform stack plus brush/pen state,
/// emitting draw commands instead of touching pixels.
use tiny_skia::{Color, Transform};

use crate::render::display::{DisplayList, DrawCmd, Shape};

pub struct Painter {
    list: DisplayList,
    transform: Transform,
    saved: Vec<Transform>,
    brush: Option<Color>,
    pen: Option<Color>,
}

impl Painter {
    pub fn new() -> Self {
        Self {
            list: DisplayList::default(),
            transform: Transform::identity(),
            saved: Vec::new(),
            brush: None,
            pen: None,
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    /// Rotate the current frame clockwise by `degrees`.
    pub fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform.pre_concat(Transform::from_rotate(degrees));
    }

    /// Push the current transform onto the stack.
    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Pop the last saved transform. Restoring past the outermost save
    /// resets to identity.
    pub fn restore(&mut self) {
        self.transform = self.saved.pop().unwrap_or_default();
    }

    pub fn set_brush(&mut self, color: Option<Color>) {
        self.brush = color;
    }

    pub fn set_pen(&mut self, color: Option<Color>) {
        self.pen = color;
    }

    /// Fill a convex polygon with the current brush. Polygons never take
    /// a pen outline.
    pub fn fill_convex_polygon(&mut self, points: &[(i32, i32)]) {
        self.push(Shape::Polygon(points.to_vec()), self.brush, None);
    }

    /// Fill with the current brush, outlined with the pen when one is set.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.push(Shape::Rect { x, y, w, h }, self.brush, self.pen);
    }

    pub fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.push(Shape::Ellipse { x, y, w, h }, self.brush, None);
    }

    /// Stroke a segment with the current pen. No-op while the pen is unset.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if self.pen.is_none() {
            return;
        }
        self.push(Shape::Line { x1, y1, x2, y2 }, None, self.pen);
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }

    fn push(&mut self, shape: Shape, fill: Option<Color>, stroke: Option<Color>) {
        self.list.commands.push(DrawCmd {
            shape,
            transform: self.transform,
            fill,
            stroke,
        });
    }
}
