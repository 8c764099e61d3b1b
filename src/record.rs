//! The audio record: model, assembly and diagnostic rendering.

mod build;
mod model;
mod render;

pub use build::RecordBuilder;
pub use model::*;
pub use render::render;
