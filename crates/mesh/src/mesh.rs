use crate::error::{MeshError, MeshResult};
use crate::geometry::{Face, Triangle, Vector3};

/// Indexed triangle mesh.
///
/// Geometry is stored as a list of vertex positions and a list of faces that refer to
/// those positions by index. The length of both lists is declared once, when the mesh is
/// created, and storage for exactly that many entries is reserved up front. Entries are
/// then filled in order and the lists never grow past their declared length. Storage for
/// both is released together when the mesh is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vector3>,
    faces: Vec<Face>,
    num_v: usize,
    num_f: usize,
}

/// Reserves room for exactly `len` entries without touching them.
///
/// Reservation is fallible so that a bogus count in a file header surfaces as an error
/// instead of aborting the process.
fn alloc_slots<T>(kind: &'static str, len: usize) -> MeshResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| MeshError::Allocation {
            kind,
            requested: len,
        })?;
    Ok(v)
}

// Writes `value` to slot `index`, which must be filled already or be the next one.
fn fill_slot<T>(
    slots: &mut Vec<T>,
    declared: usize,
    kind: &'static str,
    index: usize,
    value: T,
) -> MeshResult<()> {
    if index < slots.len() {
        slots[index] = value;
    } else if index == slots.len() && index < declared {
        slots.push(value);
    } else {
        return Err(MeshError::IndexOutOfRange {
            kind,
            index,
            len: declared,
        });
    }
    Ok(())
}

impl Mesh {
    /// Creates a mesh with room for exactly `num_v` vertices and `num_f` faces.
    ///
    /// No entry is written here. Callers fill the vertices and faces front to back with
    /// [`Mesh::set_vertex`] and [`Mesh::set_face`] and check [`Mesh::is_complete`]
    /// before handing the mesh out.
    ///
    /// # Arguments
    ///
    /// * `num_v` - The number of vertices in the mesh.
    /// * `num_f` - The number of faces in the mesh.
    pub fn create(num_v: usize, num_f: usize) -> MeshResult<Self> {
        let vertices = alloc_slots("vertices", num_v)?;
        // If this fails `vertices` is dropped on the way out.
        let faces = alloc_slots("faces", num_f)?;
        Ok(Self {
            vertices,
            faces,
            num_v,
            num_f,
        })
    }

    /// Creates a mesh that takes ownership of already populated vertex and face lists.
    pub fn from_parts(vertices: Vec<Vector3>, faces: Vec<Face>) -> Self {
        Self {
            num_v: vertices.len(),
            num_f: faces.len(),
            vertices,
            faces,
        }
    }

    /// The vertices written so far.
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// The faces written so far.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Declared number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.num_v
    }

    /// Declared number of faces.
    pub fn face_count(&self) -> usize {
        self.num_f
    }

    /// Returns true once every declared vertex and face has been written.
    pub fn is_complete(&self) -> bool {
        self.vertices.len() == self.num_v && self.faces.len() == self.num_f
    }

    pub fn set_vertex(&mut self, index: usize, v: Vector3) -> MeshResult<()> {
        fill_slot(&mut self.vertices, self.num_v, "vertex", index, v)
    }

    pub fn set_face(&mut self, index: usize, f: Face) -> MeshResult<()> {
        fill_slot(&mut self.faces, self.num_f, "face", index, f)
    }

    fn vertex(&self, index: u32) -> MeshResult<Vector3> {
        self.vertices
            .get(index as usize)
            .copied()
            .ok_or(MeshError::IndexOutOfRange {
                kind: "vertex",
                index: index as usize,
                len: self.vertices.len(),
            })
    }

    /// Resolves face `index` into the positions of its vertices.
    ///
    /// Faces are not validated when they are stored, so this is where a face that
    /// references a vertex past the end of the vertex list is reported.
    pub fn triangle(&self, index: usize) -> MeshResult<Triangle> {
        let face = self.faces.get(index).ok_or(MeshError::IndexOutOfRange {
            kind: "face",
            index,
            len: self.faces.len(),
        })?;
        Ok(Triangle {
            p0: self.vertex(face.p0)?,
            p1: self.vertex(face.p1)?,
            p2: self.vertex(face.p2)?,
        })
    }

    /// Returns an iterator over every face resolved into a [`Triangle`], in face order.
    pub fn triangles(&self) -> impl Iterator<Item = MeshResult<Triangle>> + '_ {
        (0..self.faces.len()).map(move |i| self.triangle(i))
    }

    /// Returns the axis-aligned bounding box of the vertices as `(min, max)`.
    ///
    /// Returns `None` if the mesh has no vertices.
    pub fn bounds(&self) -> Option<(Vector3, Vector3)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(rest.iter().fold((*first, *first), |(min, max), v| {
            (
                Vector3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z)),
                Vector3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z)),
            )
        }))
    }
}
