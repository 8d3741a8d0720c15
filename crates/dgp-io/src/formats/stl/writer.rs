//! ASCII STL serialization.
//!
//! ```text
//! solid <name>
//! facet normal <nx> <ny> <nz>
//!   outer loop
//!     vertex <x> <y> <z>
//!     vertex <x> <y> <z>
//!     vertex <x> <y> <z>
//!   endloop
//! endfacet
//! ...
//! ```
//!
//! Scalars use C `%e` notation: six fractional digits and a signed
//! exponent of at least two digits (`1.234500e+00`).

use std::fmt;
use std::io::Write;

use dgp_core::SceneError;

use super::validate::ValidatedMesh;
use crate::error::Result;
use crate::registry::SaveOptions;

/// A scalar displayed in `%e` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific(pub f32);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = f64::from(self.0);
        if value.is_nan() {
            return f.write_str(if value.is_sign_negative() { "-nan" } else { "nan" });
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }

        let formatted = format!("{value:.6e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
                let sign = if exponent < 0 { '-' } else { '+' };
                write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
            }
            None => f.write_str(&formatted),
        }
    }
}

/// Format a scalar the way the STL writer does.
pub fn format_scalar(value: f32) -> String {
    Scientific(value).to_string()
}

/// Write `mesh` as an ASCII STL solid called `name`.
pub fn write_ascii<W: Write>(
    out: &mut W,
    mesh: &ValidatedMesh<'_>,
    name: &str,
    options: &SaveOptions,
) -> Result<()> {
    writeln!(out, "solid {name}")?;

    let count = mesh.mesh.number_of_coord();
    for face in 0..mesh.faces.number_of_faces() {
        let normal = mesh.mesh.face_normal(face).ok_or(SceneError::NormalOutOfRange {
            face,
            len: mesh.mesh.normal().len(),
        })?;

        writeln!(
            out,
            "facet normal {} {} {}",
            Scientific(normal.x),
            Scientific(normal.y),
            Scientific(normal.z)
        )?;
        writeln!(out, "  outer loop")?;

        for (corner, &reference) in mesh.faces.face(face).iter().enumerate() {
            let vertex = mesh
                .faces
                .face_vertex(face, corner)
                .and_then(|v| mesh.mesh.vertex(v))
                .ok_or(SceneError::VertexOutOfRange {
                    face,
                    vertex: reference,
                    count,
                })?;

            writeln!(
                out,
                "    vertex {} {} {}",
                Scientific(vertex.x),
                Scientific(vertex.y),
                Scientific(vertex.z)
            )?;
        }

        writeln!(out, "  endloop")?;
        writeln!(out, "endfacet")?;
    }

    if options.emit_endsolid {
        writeln!(out, "endsolid {name}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(0.0), "0.000000e+00");
        assert_eq!(format_scalar(1.0), "1.000000e+00");
        assert_eq!(format_scalar(1.2345), "1.234500e+00");
        assert_eq!(format_scalar(-2.5), "-2.500000e+00");
        assert_eq!(format_scalar(1500.0), "1.500000e+03");
        assert_eq!(format_scalar(0.03125), "3.125000e-02");
        assert_eq!(format_scalar(-0.0), "-0.000000e+00");
    }

    #[test]
    fn test_format_scalar_wide_exponents() {
        assert_eq!(format_scalar(1.0e-30), "1.000000e-30");
        assert_eq!(format_scalar(f32::MAX), "3.402823e+38");
        assert_eq!(format_scalar(1.0e-40), "9.999946e-41");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_scalar(f32::NAN), "nan");
        assert_eq!(format_scalar(f32::INFINITY), "inf");
        assert_eq!(format_scalar(f32::NEG_INFINITY), "-inf");
    }
}
