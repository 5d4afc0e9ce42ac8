//! Plain-text packing tables.
//!
//! Coordinate files hold one circle per line, `index x y`; only the last
//! two columns are used. Radius files hold `num_circles radius` pairs.

use std::path::Path;

use tracing::warn;

use crate::error::{DobbleError, DobbleResult};

fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> DobbleError {
    DobbleError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

fn parse_float(token: &str, path: &Path, line: usize) -> DobbleResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| malformed(path, line, format!("'{}' is not a number", token)))
}

/// Parses a coordinate file. `path` is only used for error reporting.
pub fn parse_coordinates(text: &str, path: &Path) -> DobbleResult<Vec<(f64, f64)>> {
    let mut coords = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 3 {
            return Err(malformed(
                path,
                line_no,
                format!("expected 3 columns, found {}", tokens.len()),
            ));
        }
        let x = parse_float(tokens[1], path, line_no)?;
        let y = parse_float(tokens[2], path, line_no)?;
        coords.push((x, y));
    }
    Ok(coords)
}

/// Finds the largest-circle radius for `num_circles` in a radius file.
///
/// Returns `Ok(None)` if the file has no entry for that count. Lines that
/// are not two columns wide are skipped.
pub fn find_radius(text: &str, path: &Path, num_circles: usize) -> DobbleResult<Option<f64>> {
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 {
            warn!(path = %path.display(), line = line_no, "skipping radius line with {} columns", tokens.len());
            continue;
        }
        let count: usize = tokens[0].parse().map_err(|_| {
            malformed(path, line_no, format!("'{}' is not a circle count", tokens[0]))
        })?;
        if count != num_circles {
            continue;
        }
        let radius = parse_float(tokens[1], path, line_no)?;
        if !(radius > 0.0 && radius <= 1.0) {
            return Err(malformed(
                path,
                line_no,
                format!("radius {} is outside (0, 1]", radius),
            ));
        }
        return Ok(Some(radius));
    }
    Ok(None)
}
