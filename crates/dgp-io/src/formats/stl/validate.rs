//! Preconditions a scene must meet before it is written as STL.

use dgp_core::{Faces, IndexedFaceSet, NormalBinding, SceneGraph};

use crate::error::{Result, SaveError};

/// A triangle mesh that passed every precondition of the STL saver.
#[derive(Debug, Clone)]
pub struct ValidatedMesh<'a> {
    /// The mesh geometry.
    pub mesh: &'a IndexedFaceSet,
    /// Faces of `mesh`, all triangles.
    pub faces: Faces<'a>,
}

impl<'a> ValidatedMesh<'a> {
    /// Number of facets that will be written.
    pub fn facet_count(&self) -> usize {
        self.faces.number_of_faces()
    }
}

/// Check that `scene` can be written to `filename` as STL.
///
/// The checks run in order and stop at the first failure:
/// 1. the destination is not empty;
/// 2. the scene has exactly one child;
/// 3. that child is a Shape;
/// 4. whose geometry is an IndexedFaceSet;
/// 5. which is a triangle mesh;
/// 6. with normals bound per face;
/// 7. and coordinate and normal buffers long enough for every face.
pub fn validate<'a>(filename: &str, scene: &'a SceneGraph) -> Result<ValidatedMesh<'a>> {
    if filename.is_empty() {
        return Err(SaveError::InvalidArgument);
    }

    if scene.number_of_children() != 1 {
        return Err(SaveError::ChildCount(scene.number_of_children()));
    }

    let node = &scene[0];
    let shape = node
        .as_shape()
        .ok_or(SaveError::NotShape(node.type_name()))?;

    let mesh = match shape.geometry() {
        Some(geometry) => geometry
            .as_indexed_face_set()
            .ok_or(SaveError::NotIndexedFaceSet(geometry.type_name()))?,
        None => return Err(SaveError::NotIndexedFaceSet("missing")),
    };

    let faces = mesh.faces();
    if !faces.all_faces_have_size(3) {
        return Err(SaveError::NotTriangleMesh);
    }

    let binding = mesh.normal_binding();
    if binding != NormalBinding::PerFace {
        return Err(SaveError::NormalBinding(binding));
    }

    mesh.check_coord_index()?;
    mesh.check_face_normals()?;

    Ok(ValidatedMesh { mesh, faces })
}
