//! Plain-text polygon files.
//!
//! Format: one vertex per line, two floating-point fields (easting, northing)
//! separated by a delimiter (default `,`). No header, no vertex count.
//! Whitespace around fields is ignored and blank lines are skipped.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub const DEFAULT_DELIMITER: char = ',';

/// Parse polygon vertices from text.
pub fn parse_polygon(text: &str, delimiter: char) -> Result<Vec<Vector2<f64>>> {
    let mut vertices = Vec::new();
    for (k, raw) in text.lines().enumerate() {
        let line = k + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = raw.split(delimiter).map(str::trim).collect();
        if fields.len() != 2 {
            return Err(Error::Parse {
                line,
                reason: format!("expected 2 fields separated by {delimiter:?}, got {}", fields.len()),
            });
        }
        let parse = |s: &str| {
            s.parse::<f64>().map_err(|e| Error::Parse {
                line,
                reason: format!("{s:?}: {e}"),
            })
        };
        vertices.push(Vector2::new(parse(fields[0])?, parse(fields[1])?));
    }
    Ok(vertices)
}

/// Read polygon vertices from a file.
pub fn read_polygon<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Vector2<f64>>> {
    let text = fs::read_to_string(path)?;
    parse_polygon(&text, delimiter)
}

/// Write vertices as `x, y` lines with six decimals.
pub fn write_polygon<P: AsRef<Path>>(path: P, vertices: &[Vector2<f64>]) -> Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for v in vertices {
        writeln!(out, "{:.6}, {:.6}", v.x, v.y)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use tempfile::tempdir;

    #[test]
    fn parses_default_and_custom_delimiters() {
        let v = parse_polygon("0,0\n1.5, 0\n\n1 ,2e1\n", DEFAULT_DELIMITER).unwrap();
        assert_eq!(v, vec![vector![0.0, 0.0], vector![1.5, 0.0], vector![1.0, 20.0]]);
        let v = parse_polygon("3;4\n-1;-2", ';').unwrap();
        assert_eq!(v, vec![vector![3.0, 4.0], vector![-1.0, -2.0]]);
    }

    #[test]
    fn reports_offending_line() {
        match parse_polygon("0,0\n1,2,3\n", ',') {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
        match parse_polygon("0,0\n\nx,1\n", ',') {
            Err(Error::Parse { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("\"x\""));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn write_then_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.csv");
        let verts = vec![vector![0.0, 0.0], vector![10.25, 0.0], vector![10.25, 3.5]];
        write_polygon(&path, &verts).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().next().unwrap(), "0.000000, 0.000000");
        assert_eq!(read_polygon(&path, ',').unwrap(), verts);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = read_polygon(dir.path().join("nope.csv"), ',').unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
