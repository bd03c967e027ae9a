/// Rendering engine — rasterizes display lists onto a framebuffer using
/// tiny-skia.
use anyhow::Result;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke};

use crate::render::display::{DisplayList, Shape};

pub struct RenderEngine {
    framebuffer: Pixmap,
    background: Color,
}

impl RenderEngine {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let framebuffer = Pixmap::new(width, height)
            .ok_or_else(|| anyhow::anyhow!("Invalid framebuffer size: {}x{}", width, height))?;
        Ok(Self {
            framebuffer,
            background,
        })
    }

    /// Rasterize one frame: clear to the background color, then execute
    /// every command in list order, anti-aliased.
    pub fn render_frame(&mut self, list: &DisplayList) -> &[u8] {
        self.framebuffer.fill(self.background);

        let mut paint = Paint::default();
        paint.anti_alias = true;

        for cmd in &list.commands {
            let Some(path) = shape_path(&cmd.shape) else {
                continue;
            };
            if let Some(color) = cmd.fill {
                paint.set_color(color);
                self.framebuffer
                    .fill_path(&path, &paint, FillRule::Winding, cmd.transform, None);
            }
            if let Some(color) = cmd.stroke {
                paint.set_color(color);
                let stroke = Stroke {
                    width: 1.0,
                    ..Stroke::default()
                };
                self.framebuffer
                    .stroke_path(&path, &paint, &stroke, cmd.transform, None);
            }
        }

        self.framebuffer.data()
    }

    pub fn pixels(&self) -> &[u8] {
        self.framebuffer.data()
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.framebuffer
            .save_png(path)
            .map_err(|e| anyhow::anyhow!("Failed to save PNG: {}", e))
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }
}

/// Build the tiny-skia path for a shape. Degenerate geometry yields None
/// and the command is skipped.
fn shape_path(shape: &Shape) -> Option<tiny_skia::Path> {
    match shape {
        Shape::Polygon(points) => {
            let (&(x0, y0), rest) = points.split_first()?;
            let mut pb = PathBuilder::new();
            pb.move_to(x0 as f32, y0 as f32);
            for &(x, y) in rest {
                pb.line_to(x as f32, y as f32);
            }
            pb.close();
            pb.finish()
        }
        Shape::Rect { x, y, w, h } => {
            let rect = Rect::from_xywh(*x as f32, *y as f32, *w as f32, *h as f32)?;
            let mut pb = PathBuilder::new();
            pb.push_rect(rect);
            pb.finish()
        }
        Shape::Ellipse { x, y, w, h } => {
            let rect = Rect::from_xywh(*x as f32, *y as f32, *w as f32, *h as f32)?;
            let mut pb = PathBuilder::new();
            pb.push_oval(rect);
            pb.finish()
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let mut pb = PathBuilder::new();
            pb.move_to(*x1 as f32, *y1 as f32);
            pb.line_to(*x2 as f32, *y2 as f32);
            pb.finish()
        }
    }
}
