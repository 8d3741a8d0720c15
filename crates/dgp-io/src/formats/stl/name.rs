//! Solid name resolution.

use dgp_core::IndexedFaceSet;

/// Name written after `solid` in the STL header.
///
/// Uses the mesh name when it is set, and otherwise the destination file
/// name without its directory and extension.
pub fn solid_name(filename: &str, mesh: &IndexedFaceSet) -> String {
    if mesh.name().is_empty() {
        name_from_path(filename).to_string()
    } else {
        mesh.name().to_string()
    }
}

/// Strip the directory prefix (up to the last `/` or `\`) and everything
/// from the first `.` of what remains.
pub fn name_from_path(filename: &str) -> &str {
    let base = filename
        .rfind(|c: char| c == '/' || c == '\\')
        .map_or(filename, |i| &filename[i + 1..]);
    base.find('.').map_or(base, |dot| &base[..dot])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_name_wins() {
        let mesh = IndexedFaceSet::new().named("bunny");
        assert_eq!(solid_name("/tmp/models/cube.stl", &mesh), "bunny");
    }

    #[test]
    fn test_name_from_path() {
        assert_eq!(name_from_path("/tmp/models/cube.stl"), "cube");
        assert_eq!(name_from_path("C:\\models\\cube.stl"), "cube");
        assert_eq!(name_from_path("mixed\\dir/part.stl"), "part");
        assert_eq!(name_from_path("cube.stl"), "cube");
        assert_eq!(name_from_path("mesh"), "mesh");
        assert_eq!(name_from_path("/tmp/mesh"), "mesh");
    }

    #[test]
    fn test_first_dot_of_basename() {
        assert_eq!(name_from_path("/tmp/part.v2.stl"), "part");
        assert_eq!(name_from_path("./out/v1.0/part.stl"), "part");
        assert_eq!(name_from_path("/tmp/.stl"), "");
        assert_eq!(name_from_path("/tmp/models/"), "");
    }

    #[test]
    fn test_unnamed_mesh_uses_path() {
        let mesh = IndexedFaceSet::new();
        assert_eq!(solid_name("/tmp/models/cube.stl", &mesh), "cube");
    }
}
