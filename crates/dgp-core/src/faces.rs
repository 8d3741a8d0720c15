//! Face enumeration over an indexed-face-set index buffer.
//!
//! An index buffer lists, face after face, the vertex references of every
//! face corner, with `-1` closing each face:
//!
//! ```text
//! coord_index: [0, 1, 2, -1, 2, 1, 3, -1]
//!               └─ face 0 ─┘  └─ face 1 ─┘
//! ```
//!
//! The terminator after the last face is optional.

use std::ops::Range;

/// Face terminator in an index buffer.
pub const FACE_SEPARATOR: i32 = -1;

/// Read-only view of the faces encoded in an index buffer.
///
/// The view borrows the buffer it was built from, so it lives no longer
/// than the mesh it describes.
#[derive(Debug, Clone)]
pub struct Faces<'a> {
    n_vertices: usize,
    coord_index: &'a [i32],
    /// Corner range of each face within `coord_index`.
    corners: Vec<Range<usize>>,
}

impl<'a> Faces<'a> {
    /// Build the view for a mesh with `n_vertices` vertices.
    pub fn new(n_vertices: usize, coord_index: &'a [i32]) -> Self {
        let mut corners = Vec::new();
        let mut start = 0;

        for (i, &index) in coord_index.iter().enumerate() {
            if index == FACE_SEPARATOR {
                corners.push(start..i);
                start = i + 1;
            }
        }
        if start < coord_index.len() {
            corners.push(start..coord_index.len());
        }

        Self {
            n_vertices,
            coord_index,
            corners,
        }
    }

    /// Number of vertices the index buffer may reference.
    pub fn number_of_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Number of faces.
    pub fn number_of_faces(&self) -> usize {
        self.corners.len()
    }

    /// Number of corners of face `face`, or 0 if there is no such face.
    pub fn face_size(&self, face: usize) -> usize {
        self.corners.get(face).map_or(0, |r| r.len())
    }

    /// Position in the index buffer of the first corner of `face`.
    pub fn face_first_corner(&self, face: usize) -> Option<usize> {
        self.corners.get(face).map(|r| r.start)
    }

    /// Vertex referenced by corner `corner` of face `face`.
    ///
    /// Returns `None` for a face or corner out of range, or for a
    /// reference that is negative or not below the vertex count.
    pub fn face_vertex(&self, face: usize, corner: usize) -> Option<usize> {
        let range = self.corners.get(face)?;
        if corner >= range.len() {
            return None;
        }
        let index = self.coord_index[range.start + corner];
        usize::try_from(index).ok().filter(|&v| v < self.n_vertices)
    }

    /// Raw references of face `face`, in corner order.
    pub fn face(&self, face: usize) -> &'a [i32] {
        let coord_index = self.coord_index;
        match self.corners.get(face) {
            Some(range) => &coord_index[range.clone()],
            None => &[],
        }
    }

    /// Iterate over the faces in face-index order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [i32]> + '_ {
        let coord_index = self.coord_index;
        self.corners.iter().map(move |r| &coord_index[r.clone()])
    }

    /// True if every face has exactly `size` corners and there is at least one face.
    pub fn all_faces_have_size(&self, size: usize) -> bool {
        !self.corners.is_empty() && self.corners.iter().all(|r| r.len() == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_triangles() {
        let index = [0, 1, 2, -1, 2, 1, 3, -1];
        let faces = Faces::new(4, &index);

        assert_eq!(faces.number_of_faces(), 2);
        assert_eq!(faces.face_size(0), 3);
        assert_eq!(faces.face_size(1), 3);
        assert_eq!(faces.face_vertex(1, 0), Some(2));
        assert_eq!(faces.face_vertex(1, 2), Some(3));
        assert_eq!(faces.face_first_corner(1), Some(4));
        assert!(faces.all_faces_have_size(3));
    }

    #[test]
    fn test_missing_final_separator() {
        let index = [0, 1, 2, -1, 0, 2, 3, 4];
        let faces = Faces::new(5, &index);

        assert_eq!(faces.number_of_faces(), 2);
        assert_eq!(faces.face(1), &[0, 2, 3, 4]);
        assert!(!faces.all_faces_have_size(3));
    }

    #[test]
    fn test_empty_face_is_counted() {
        let index = [0, 1, 2, -1, -1];
        let faces = Faces::new(3, &index);

        assert_eq!(faces.number_of_faces(), 2);
        assert_eq!(faces.face_size(1), 0);
        assert!(!faces.all_faces_have_size(3));
    }

    #[test]
    fn test_out_of_range_queries() {
        let index = [0, 1, 7, -1];
        let faces = Faces::new(3, &index);

        assert_eq!(faces.face_vertex(0, 2), None);
        assert_eq!(faces.face_vertex(0, 3), None);
        assert_eq!(faces.face_vertex(4, 0), None);
        assert_eq!(faces.face_size(4), 0);
        assert!(faces.face(4).is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let faces = Faces::new(0, &[]);
        assert_eq!(faces.number_of_faces(), 0);
        assert!(!faces.all_faces_have_size(3));
        assert_eq!(faces.iter().count(), 0);
    }
}
