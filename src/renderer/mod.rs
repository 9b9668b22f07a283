//! Rendering module
//!
//! The game draws through the [`DrawSurface`] trait; the WebGPU pipeline
//! consumes the tessellated [`ShapeBatch`].

pub mod pipeline;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pipeline::RenderState;
pub use surface::{DrawSurface, ShapeBatch, draw_frame, power_up_color};
pub use vertex::{Vertex, colors};
