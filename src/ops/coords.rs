use crate::error::{DobbleError, DobbleResult};

/// Maps relative coordinates in [-1, 1]² onto a square image of `image_size`
/// pixels.
///
/// `(0, 0)` is the image center, `(-1, -1)` and `(1, 1)` the two opposite
/// corners. Each axis maps through `floor((rel / 2 + 0.5) * image_size)`.
///
/// ```
/// use dobble_layout::ops::coords_to_pixels;
///
/// assert_eq!(coords_to_pixels((-0.5, 0.75), 512).unwrap(), (128, 448));
/// assert_eq!(coords_to_pixels((0.25, 0.5), 256).unwrap(), (160, 192));
/// ```
pub fn coords_to_pixels(rel_coords: (f64, f64), image_size: u32) -> DobbleResult<(u32, u32)> {
    let (x, y) = rel_coords;
    if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
        return Err(DobbleError::invalid(format!(
            "relative coordinates must be in the range of [-1, 1], got ({}, {})",
            x, y
        )));
    }
    let size = image_size as f64;
    let to_pixel = |rel: f64| ((rel / 2.0 + 0.5) * size).floor() as u32;
    Ok((to_pixel(x), to_pixel(y)))
}

/// Converts a relative radius in [0, 1] to a pixel length on a square
/// background of `bg_size` pixels.
///
/// ```
/// use dobble_layout::ops::radius_to_pixels;
///
/// assert_eq!(radius_to_pixels(0.5, 512).unwrap(), 256);
/// ```
pub fn radius_to_pixels(rel_radius: f64, bg_size: u32) -> DobbleResult<u32> {
    if !(0.0..=1.0).contains(&rel_radius) {
        return Err(DobbleError::invalid(format!(
            "relative radius must be in the range of [0, 1], got {}",
            rel_radius
        )));
    }
    Ok((rel_radius * bg_size as f64).floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_coords_corners() {
        for size in [1u32, 7, 256, 512, 1000] {
            assert_eq!(coords_to_pixels((-1.0, -1.0), size).unwrap(), (0, 0));
            assert_eq!(coords_to_pixels((1.0, 1.0), size).unwrap(), (size, size));
            assert_eq!(coords_to_pixels((0.0, 0.0), size).unwrap(), (size / 2, size / 2));
        }
    }

    #[test]
    fn test_coords_documented_cases() {
        assert_eq!(coords_to_pixels((-0.5, 0.75), 512).unwrap(), (128, 448));
        assert_eq!(coords_to_pixels((0.25, 0.5), 256).unwrap(), (160, 192));
    }

    #[test]
    fn test_coords_out_of_range() {
        for bad in [(1.0001, 0.0), (0.0, -1.5), (f64::NAN, 0.0), (0.0, f64::INFINITY)] {
            let err = coords_to_pixels(bad, 512).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_radius_to_pixels() {
        assert_eq!(radius_to_pixels(0.0, 512).unwrap(), 0);
        assert_eq!(radius_to_pixels(1.0, 512).unwrap(), 512);
        assert_eq!(radius_to_pixels(0.5, 512).unwrap(), 256);
        assert_eq!(radius_to_pixels(0.333, 100).unwrap(), 33);
    }

    #[test]
    fn test_radius_out_of_range() {
        for bad in [-0.01, 1.01, f64::NAN] {
            let err = radius_to_pixels(bad, 512).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}
