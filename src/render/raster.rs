use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::{check_rotation, Renderer};
use crate::error::DobbleResult;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Squared distance from the center of pixel `(x, y)` to `(cx, cy)`.
fn dist_sq(x: u32, y: u32, cx: f64, cy: f64) -> f64 {
    let dx = x as f64 + 0.5 - cx;
    let dy = y as f64 + 0.5 - cy;
    dx * dx + dy * dy
}

/// Rotates counter-clockwise about the image center, keeping the size.
/// Nearest-neighbour sampling; uncovered pixels become transparent.
pub fn rotate_same_size(img: &RgbaImage, angle_deg: f64) -> RgbaImage {
    let (w, h) = img.dimensions();
    if angle_deg == 0.0 || w == 0 || h == 0 {
        return img.clone();
    }
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);

    RgbaImage::from_fn(w, h, |x, y| {
        let dx = x as f64 + 0.5 - cx;
        let dy = y as f64 + 0.5 - cy;
        // y grows downwards, so a visual counter-clockwise turn samples here
        let sx = (cos * dx - sin * dy + cx - 0.5).round();
        let sy = (sin * dx + cos * dy + cy - 0.5).round();
        if sx < 0.0 || sy < 0.0 || sx >= w as f64 || sy >= h as f64 {
            TRANSPARENT
        } else {
            *img.get_pixel(sx as u32, sy as u32)
        }
    })
}

/// Compositing on `image::RgbaImage`.
#[derive(Debug, Clone, Copy)]
pub struct RasterRenderer {
    filter: FilterType,
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self {
            filter: FilterType::CatmullRom,
        }
    }
}

impl RasterRenderer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Outline (or disc when `filled`) of a circle, used to inspect packings.
    pub fn draw_circle(
        &self,
        card: &mut RgbaImage,
        center: (u32, u32),
        diameter: u32,
        filled: bool,
        color: Rgba<u8>,
    ) {
        let r = (diameter / 2) as f64;
        let (cx, cy) = (center.0 as f64, center.1 as f64);
        let (w, h) = card.dimensions();
        let x0 = (cx - r - 1.0).max(0.0) as u32;
        let y0 = (cy - r - 1.0).max(0.0) as u32;
        let x1 = ((cx + r + 1.0) as u32).min(w);
        let y1 = ((cy + r + 1.0) as u32).min(h);

        for y in y0..y1 {
            for x in x0..x1 {
                let d = dist_sq(x, y, cx, cy).sqrt();
                let hit = if filled { d <= r } else { (d - r).abs() <= 0.5 };
                if hit {
                    card.put_pixel(x, y, color);
                }
            }
        }
    }
}

impl Renderer for RasterRenderer {
    type Card = RgbaImage;

    fn blank_card(&self, card_size: u32) -> RgbaImage {
        let c = card_size as f64 / 2.0;
        let r_sq = c * c;
        RgbaImage::from_fn(card_size, card_size, |x, y| {
            if dist_sq(x, y, c, c) <= r_sq {
                WHITE
            } else {
                TRANSPARENT
            }
        })
    }

    fn place_symbol(
        &self,
        card: &mut RgbaImage,
        symbol: &RgbaImage,
        center: (u32, u32),
        diameter: u32,
        rotation: f64,
    ) -> DobbleResult<()> {
        check_rotation(rotation)?;
        if diameter == 0 || symbol.width() == 0 || symbol.height() == 0 {
            return Ok(());
        }
        let resized = imageops::resize(symbol, diameter, diameter, self.filter);
        let rotated = rotate_same_size(&resized, rotation);
        let left = center.0 as i64 - (diameter / 2) as i64;
        let top = center.1 as i64 - (diameter / 2) as i64;
        imageops::overlay(card, &rotated, left, top);
        Ok(())
    }

    fn rotate_card(&self, card: &mut RgbaImage, angle: f64) -> DobbleResult<()> {
        check_rotation(angle)?;
        *card = rotate_same_size(card, angle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_blank_card_is_white_disc() {
        let card = RasterRenderer::default().blank_card(64);
        assert_eq!(card.dimensions(), (64, 64));
        assert_eq!(*card.get_pixel(32, 32), WHITE);
        assert_eq!(*card.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*card.get_pixel(63, 63), TRANSPARENT);
        assert_eq!(*card.get_pixel(32, 1), WHITE);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut img = RgbaImage::from_pixel(4, 4, TRANSPARENT);
        img.put_pixel(3, 1, RED);
        let rotated = rotate_same_size(&img, 90.0);
        assert_eq!(*rotated.get_pixel(1, 0), RED);
        assert_eq!(rotated.pixels().filter(|p| **p == RED).count(), 1);

        let back = rotate_same_size(&rotate_same_size(&rotated, 90.0), 180.0);
        assert_eq!(back, img);
    }

    #[test]
    fn test_rotate_keeps_bounds() {
        let img = RgbaImage::from_pixel(10, 6, RED);
        let rotated = rotate_same_size(&img, 45.0);
        assert_eq!(rotated.dimensions(), (10, 6));
        // 45도 회전하면 모서리는 비게 됨
        assert_eq!(*rotated.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*rotated.get_pixel(5, 3), RED);
    }

    #[test]
    fn test_place_symbol_centers_image() {
        let renderer = RasterRenderer::new(FilterType::Nearest);
        let mut card = RgbaImage::from_pixel(40, 40, TRANSPARENT);
        let symbol = RgbaImage::from_pixel(8, 8, RED);
        renderer
            .place_symbol(&mut card, &symbol, (20, 20), 10, 0.0)
            .unwrap();
        assert_eq!(*card.get_pixel(15, 15), RED);
        assert_eq!(*card.get_pixel(24, 24), RED);
        assert_eq!(*card.get_pixel(14, 20), TRANSPARENT);
        assert_eq!(*card.get_pixel(25, 20), TRANSPARENT);
    }

    #[test]
    fn test_place_symbol_rejects_bad_rotation() {
        let renderer = RasterRenderer::default();
        let mut card = renderer.blank_card(16);
        let symbol = RgbaImage::from_pixel(4, 4, RED);
        assert!(renderer
            .place_symbol(&mut card, &symbol, (8, 8), 4, 360.0)
            .is_err());
        assert!(renderer.rotate_card(&mut card, -5.0).is_err());
    }

    #[test]
    fn test_draw_circle_outline() {
        let renderer = RasterRenderer::default();
        let mut card = RgbaImage::from_pixel(21, 21, TRANSPARENT);
        renderer.draw_circle(&mut card, (10, 10), 10, false, RED);
        assert_eq!(*card.get_pixel(10, 10), TRANSPARENT);
        assert!(card.pixels().any(|p| *p == RED));

        renderer.draw_circle(&mut card, (10, 10), 10, true, RED);
        assert_eq!(*card.get_pixel(10, 10), RED);
    }
}
