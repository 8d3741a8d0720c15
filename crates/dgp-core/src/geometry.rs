//! Geometry nodes: indexed face sets and indexed line sets.

use glam::Vec3;

use crate::errors::{Result, SceneError};
use crate::faces::Faces;

/// How the normal buffer of an `IndexedFaceSet` maps onto the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalBinding {
    /// No normals.
    None,
    /// One normal per vertex, addressed by vertex index.
    PerVertex,
    /// One normal per face, addressed by face index.
    PerFace,
    /// One normal per face, addressed through `normal_index`.
    PerFaceIndexed,
    /// One normal per face corner, addressed through `normal_index`.
    PerCorner,
}

/// A geometry node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// Polygon mesh.
    IndexedFaceSet(IndexedFaceSet),
    /// Polyline set.
    IndexedLineSet(IndexedLineSet),
}

impl Geometry {
    pub fn is_indexed_face_set(&self) -> bool {
        matches!(self, Geometry::IndexedFaceSet(_))
    }

    pub fn as_indexed_face_set(&self) -> Option<&IndexedFaceSet> {
        match self {
            Geometry::IndexedFaceSet(ifs) => Some(ifs),
            _ => None,
        }
    }

    /// Node type name, as written in VRML.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::IndexedFaceSet(_) => "IndexedFaceSet",
            Geometry::IndexedLineSet(_) => "IndexedLineSet",
        }
    }
}

impl From<IndexedFaceSet> for Geometry {
    fn from(ifs: IndexedFaceSet) -> Self {
        Geometry::IndexedFaceSet(ifs)
    }
}

impl From<IndexedLineSet> for Geometry {
    fn from(ils: IndexedLineSet) -> Self {
        Geometry::IndexedLineSet(ils)
    }
}

/// A polygon mesh stored as flat buffers.
///
/// `coord` holds 3 floats per vertex. `coord_index` lists the vertex
/// references of each face, faces separated by `-1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexedFaceSet {
    /// Optional node name (`DEF` name).
    pub name: String,
    pub coord: Vec<f32>,
    pub coord_index: Vec<i32>,
    pub normal: Vec<f32>,
    pub normal_index: Vec<i32>,
    pub normal_per_vertex: bool,
    pub ccw: bool,
    pub convex: bool,
    pub solid: bool,
    pub crease_angle: f32,
}

impl Default for IndexedFaceSet {
    fn default() -> Self {
        Self {
            name: String::new(),
            coord: Vec::new(),
            coord_index: Vec::new(),
            normal: Vec::new(),
            normal_index: Vec::new(),
            normal_per_vertex: true,
            ccw: true,
            convex: true,
            solid: true,
            crease_angle: 0.0,
        }
    }
}

impl IndexedFaceSet {
    /// Create an empty face set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a face set from coordinates and a `-1` separated index buffer.
    pub fn from_buffers(coord: Vec<f32>, coord_index: Vec<i32>) -> Self {
        Self {
            coord,
            coord_index,
            ..Self::default()
        }
    }

    /// Set the node name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach one normal per face.
    pub fn with_face_normals(mut self, normal: Vec<f32>) -> Self {
        self.normal = normal;
        self.normal_index.clear();
        self.normal_per_vertex = false;
        self
    }

    /// Attach one normal per vertex.
    pub fn with_vertex_normals(mut self, normal: Vec<f32>) -> Self {
        self.normal = normal;
        self.normal_index.clear();
        self.normal_per_vertex = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> &[f32] {
        &self.coord
    }

    pub fn coord_index(&self) -> &[i32] {
        &self.coord_index
    }

    pub fn normal(&self) -> &[f32] {
        &self.normal
    }

    pub fn normal_index(&self) -> &[i32] {
        &self.normal_index
    }

    /// Number of vertices, i.e. complete coordinate triples.
    pub fn number_of_coord(&self) -> usize {
        self.coord.len() / 3
    }

    /// Number of faces encoded in `coord_index`.
    pub fn number_of_faces(&self) -> usize {
        self.faces().number_of_faces()
    }

    /// Face view over `coord_index`.
    pub fn faces(&self) -> Faces<'_> {
        Faces::new(self.number_of_coord(), &self.coord_index)
    }

    pub fn normal_binding(&self) -> NormalBinding {
        if self.normal.is_empty() {
            NormalBinding::None
        } else if self.normal_per_vertex {
            if self.normal_index.is_empty() {
                NormalBinding::PerVertex
            } else {
                NormalBinding::PerCorner
            }
        } else if self.normal_index.is_empty() {
            NormalBinding::PerFace
        } else {
            NormalBinding::PerFaceIndexed
        }
    }

    /// True if the mesh has at least one face and every face is a triangle.
    pub fn is_triangle_mesh(&self) -> bool {
        self.faces().all_faces_have_size(3)
    }

    /// Position of vertex `index`.
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        let xyz = self.coord.get(3 * index..3 * index + 3)?;
        Some(Vec3::new(xyz[0], xyz[1], xyz[2]))
    }

    /// Normal of face `face` under per-face binding.
    pub fn face_normal(&self, face: usize) -> Option<Vec3> {
        let xyz = self.normal.get(3 * face..3 * face + 3)?;
        Some(Vec3::new(xyz[0], xyz[1], xyz[2]))
    }

    /// Check that every vertex reference resolves to a full coordinate triple.
    pub fn check_coord_index(&self) -> Result<()> {
        if self.coord.len() % 3 != 0 {
            return Err(SceneError::RaggedCoord {
                len: self.coord.len(),
            });
        }
        let count = self.number_of_coord();
        let faces = self.faces();
        for (face, refs) in faces.iter().enumerate() {
            if let Some(&vertex) = refs.iter().find(|&&v| v < 0 || v as usize >= count) {
                return Err(SceneError::VertexOutOfRange { face, vertex, count });
            }
        }
        Ok(())
    }

    /// Check that the normal buffer holds one normal for every face.
    pub fn check_face_normals(&self) -> Result<()> {
        let n_faces = self.number_of_faces();
        if self.normal.len() < 3 * n_faces {
            return Err(SceneError::NormalOutOfRange {
                face: self.normal.len() / 3,
                len: self.normal.len(),
            });
        }
        Ok(())
    }
}

/// A set of polylines stored as flat buffers.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexedLineSet {
    pub name: String,
    pub coord: Vec<f32>,
    pub coord_index: Vec<i32>,
    pub color: Vec<f32>,
    pub color_per_vertex: bool,
}

impl IndexedLineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_coord(&self) -> usize {
        self.coord.len() / 3
    }

    /// Number of polylines.
    pub fn number_of_polylines(&self) -> usize {
        Faces::new(self.number_of_coord(), &self.coord_index).number_of_faces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_pair() -> IndexedFaceSet {
        IndexedFaceSet::from_buffers(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            vec![0, 1, 2, -1, 0, 2, 3, -1],
        )
    }

    #[test]
    fn test_triangle_mesh_detection() {
        assert!(quad_pair().is_triangle_mesh());

        let quad = IndexedFaceSet::from_buffers(
            vec![0.0; 12],
            vec![0, 1, 2, 3, -1],
        );
        assert!(!quad.is_triangle_mesh());

        assert!(!IndexedFaceSet::new().is_triangle_mesh());
    }

    #[test]
    fn test_normal_binding() {
        let mesh = quad_pair();
        assert_eq!(mesh.normal_binding(), NormalBinding::None);

        let per_face = quad_pair().with_face_normals(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(per_face.normal_binding(), NormalBinding::PerFace);

        let per_vertex = quad_pair().with_vertex_normals(vec![0.0; 12]);
        assert_eq!(per_vertex.normal_binding(), NormalBinding::PerVertex);

        let mut indexed = per_face.clone();
        indexed.normal_index = vec![0, 1];
        assert_eq!(indexed.normal_binding(), NormalBinding::PerFaceIndexed);

        let mut corners = per_vertex.clone();
        corners.normal_index = vec![0, 1, 2, -1, 0, 2, 3, -1];
        assert_eq!(corners.normal_binding(), NormalBinding::PerCorner);
    }

    #[test]
    fn test_vertex_and_face_normal_access() {
        let mesh = quad_pair().with_face_normals(vec![0.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
        assert_eq!(mesh.vertex(2), Some(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(mesh.vertex(4), None);
        assert_eq!(mesh.face_normal(1), Some(Vec3::new(0.0, 0.0, -1.0)));
        assert_eq!(mesh.face_normal(2), None);
    }

    #[test]
    fn test_check_coord_index() {
        assert!(quad_pair().check_coord_index().is_ok());

        let mut bad = quad_pair();
        bad.coord_index = vec![0, 1, 9, -1];
        assert_eq!(
            bad.check_coord_index(),
            Err(SceneError::VertexOutOfRange { face: 0, vertex: 9, count: 4 })
        );

        let mut ragged = quad_pair();
        ragged.coord.pop();
        assert_eq!(ragged.check_coord_index(), Err(SceneError::RaggedCoord { len: 11 }));
    }

    #[test]
    fn test_check_face_normals() {
        let short = quad_pair().with_face_normals(vec![0.0, 0.0, 1.0]);
        assert_eq!(
            short.check_face_normals(),
            Err(SceneError::NormalOutOfRange { face: 1, len: 3 })
        );
        let full = quad_pair().with_face_normals(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert!(full.check_face_normals().is_ok());
    }

    #[test]
    fn test_line_set_counts() {
        let mut lines = IndexedLineSet::new();
        lines.coord = vec![0.0; 9];
        lines.coord_index = vec![0, 1, -1, 1, 2];
        assert_eq!(lines.number_of_coord(), 3);
        assert_eq!(lines.number_of_polylines(), 2);
    }
}
