//! WebGPU rendering module
//!
//! The draw pass emits rectangles and bitmap text into a `VertexCanvas`;
//! `RenderState` scales that to the surface and draws it as one triangle list.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::VertexCanvas;
pub use pipeline::{RenderState, Viewport};
pub use vertex::Vertex;
