//! `Canvas` backend that collects triangles for the GPU

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, rgba};
use crate::sim::Color;
use crate::ui::Canvas;

/// One frame's worth of coloured triangles in logical pixel space
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    /// Logical screen size in pixels
    pub size: (i32, i32),
    pub vertices: Vec<Vertex>,
}

impl VertexCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: (width, height),
            vertices: Vec::with_capacity(4096),
        }
    }
}

fn to_vec2(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

impl Canvas for VertexCanvas {
    /// Starts a new frame with the whole logical screen filled
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        let (w, h) = self.size;
        self.vertices
            .extend(shapes::rect(Vec2::ZERO, to_vec2(w, h), rgba(color)));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.vertices
            .extend(shapes::rect(to_vec2(x, y), to_vec2(w, h), rgba(color)));
    }

    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.vertices
            .extend(shapes::rect_outline(to_vec2(x, y), to_vec2(w, h), rgba(color)));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.vertices
            .extend(shapes::text(to_vec2(x, y), text, rgba(color)));
    }
}
