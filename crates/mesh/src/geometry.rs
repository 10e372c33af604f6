pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// Vertex indices of a single triangular face.
///
/// The points here are only indices into the vertex list of the owning mesh. A face
/// with an index past the end of that list is representable; it is only rejected
/// when the face is resolved into a [`Triangle`].
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[repr(C)]
pub struct Face {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

static_assertions::assert_eq_size!(Face, [u32; 3]);

impl Face {
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }
}

impl From<[u32; 3]> for Face {
    fn from([p0, p1, p2]: [u32; 3]) -> Self {
        Self { p0, p1, p2 }
    }
}

/// A face resolved into the positions of its three vertices.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}
