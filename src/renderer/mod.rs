//! Rendering module
//!
//! `scene` paints the animation onto any [`Canvas`]; `tessellate` turns those
//! draw calls into triangles and `pipeline` presents them with wgpu.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod tessellate;
pub mod vertex;

pub use canvas::Canvas;
pub use pipeline::RenderState;
pub use scene::render;
pub use tessellate::Tessellator;
pub use vertex::Vertex;
