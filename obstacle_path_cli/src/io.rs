//! Reading and writing obstacle outlines as CSV.
//!
//! Each line holds one `x,y` vertex; a blank line ends the current polygon.

use std::io::{self, Write};

use obstacle_path::{Point, Polygon};

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Parses an `x,y` pair.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected x,y but got '{}'", s));
    }
    let x: f64 = parts[0].trim().parse().map_err(|e| format!("{}: {}", s, e))?;
    let y: f64 = parts[1].trim().parse().map_err(|e| format!("{}: {}", s, e))?;
    Ok(Point::new(x, y))
}

/// Parses polygon outlines separated by blank lines.
pub fn parse_polygons_csv(contents: &str) -> io::Result<Vec<Vec<Point>>> {
    let mut polygons = Vec::new();
    let mut current = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                polygons.push(std::mem::take(&mut current));
            }
            continue;
        }
        let p = parse_point(line).map_err(|e| invalid(format!("line {}: {}", idx + 1, e)))?;
        current.push(p);
    }
    if !current.is_empty() {
        polygons.push(current);
    }
    Ok(polygons)
}

/// Reads polygon outlines from a CSV file.
pub fn read_polygons_csv(path: &str) -> io::Result<Vec<Vec<Point>>> {
    let contents = std::fs::read_to_string(path)?;
    parse_polygons_csv(&contents)
}

/// Writes polygons as CSV, separated by blank lines.
pub fn write_polygons_csv(path: &str, polygons: &[Polygon]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for (i, poly) in polygons.iter().enumerate() {
        for v in &poly.vertices {
            writeln!(file, "{},{}", v.x, v.y)?;
        }
        if i + 1 < polygons.len() {
            writeln!(file)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blank_line_separated_polygons() {
        let polys = parse_polygons_csv("0,0\n1,0\n1,1\n\n\n3,0\n4,0\n4,1\n").unwrap();
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[1][2], Point::new(4.0, 1.0));
    }

    #[test]
    fn reports_bad_line_number() {
        let err = parse_polygons_csv("0,0\n1;0\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn parses_points_with_spaces() {
        assert_eq!(parse_point(" 1.5, -2 ").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
