mod error;
mod geometry;
mod mesh;

pub use error::*;
pub use geometry::*;
pub use mesh::*;
