//! Shape generation for 2D primitives
//!
//! All shapes are built in logical pixel space (origin top-left, y down);
//! the pipeline maps them to NDC at upload time.

use glam::Vec2;

use super::font;
use super::vertex::Vertex;

/// Two triangles covering `[min, min + size)`
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let max = min + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// One-pixel border along the inside edge of the rectangle
pub fn rect_outline(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let max = min + size;

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom rows span the full width
    vertices.extend(rect(min, Vec2::new(size.x, 1.0), color));
    vertices.extend(rect(Vec2::new(min.x, max.y - 1.0), Vec2::new(size.x, 1.0), color));
    // Side columns fill the rows in between
    let inner = size.y - 2.0;
    vertices.extend(rect(Vec2::new(min.x, min.y + 1.0), Vec2::new(1.0, inner), color));
    vertices.extend(rect(
        Vec2::new(max.x - 1.0, min.y + 1.0),
        Vec2::new(1.0, inner),
        color,
    ));
    vertices
}

/// One unit quad per lit font pixel
pub fn text(origin: Vec2, text: &str, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let cell = origin + Vec2::new((i as i32 * font::ADVANCE) as f32, 0.0);
        for (col, row) in font::glyph_pixels(c) {
            let pixel = cell + Vec2::new(col as f32, row as f32);
            vertices.extend(rect(pixel, Vec2::ONE, color));
        }
    }
    vertices
}
