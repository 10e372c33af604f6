//! Reader and writer for ASCII encoded PLY ("Polygon File Format") meshes.
//!
//! Only the geometry of a mesh is understood: one `vertex` element with `x y z`
//! positions followed by one `face` element of triangles. See [`HeaderStateMachine`]
//! for the accepted grammar.

mod error;
mod reader;
mod state;
mod tokens;
mod writer;

pub use error::*;
pub use reader::*;
pub use state::*;
pub use tokens::*;
pub use writer::*;
