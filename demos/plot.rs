//! Render a point cloud and both solver answers into a PNG.
//!
//! Points are drawn as dark dots over a white canvas; the exact answer is
//! outlined in red, the approximate answer in blue. Writes `k_enclose.png`
//! into the working directory.

use image::{Rgb, RgbImage};
use krect::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CANVAS: u32 = 800;
const MARGIN: u32 = 40;
const NUM_POINTS: usize = 400;
const SEED: u64 = 7;

const POINT_COLOR: Rgb<u8> = Rgb([40, 40, 40]);
const EXACT_COLOR: Rgb<u8> = Rgb([200, 30, 30]);
const APPROX_COLOR: Rgb<u8> = Rgb([30, 60, 200]);

/// Maps a unit-square coordinate onto the canvas, y pointing up
fn to_pixel(x: f64, y: f64) -> (u32, u32) {
    let span = (CANVAS - 2 * MARGIN) as f64;
    #[expect(clippy::cast_possible_truncation, reason = "clamped into the canvas before the cast")]
    let px = MARGIN + (x.clamp(0.0, 1.0) * span) as u32;
    #[expect(clippy::cast_possible_truncation, reason = "clamped into the canvas before the cast")]
    let py = CANVAS - MARGIN - (y.clamp(0.0, 1.0) * span) as u32;
    (px, py)
}

/// Draws a filled square dot centered on a canvas position
fn draw_dot(img: &mut RgbImage, cx: u32, cy: u32, color: Rgb<u8>) {
    for px in cx.saturating_sub(1)..=(cx + 1).min(CANVAS - 1) {
        for py in cy.saturating_sub(1)..=(cy + 1).min(CANVAS - 1) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Outlines a rectangle given in unit-square coordinates
fn draw_rect(img: &mut RgbImage, rect: &Rect, color: Rgb<u8>) {
    let (x0, y1) = to_pixel(rect.min_x, rect.min_y);
    let (x1, y0) = to_pixel(rect.max_x, rect.max_y);
    for px in x0..=x1 {
        img.put_pixel(px, y0, color);
        img.put_pixel(px, y1, color);
    }
    for py in y0..=y1 {
        img.put_pixel(x0, py, color);
        img.put_pixel(x1, py, color);
    }
}

fn main() -> Result<(), image::ImageError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut set = PointSet::with_capacity(NUM_POINTS);
    for _ in 0..NUM_POINTS {
        set.add(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
    }
    let k = NUM_POINTS * 8 / 10;

    let exact = set.enclose_exact(k).expect("k is 80% of n");
    let approx = set.enclose_approx(k).expect("k is 80% of n");

    let mut img = RgbImage::from_pixel(CANVAS, CANVAS, Rgb([255, 255, 255]));
    for point in set.points() {
        let (px, py) = to_pixel(point.x, point.y);
        draw_dot(&mut img, px, py, POINT_COLOR);
    }
    draw_rect(&mut img, &exact.rect, EXACT_COLOR);
    draw_rect(&mut img, &approx.rect, APPROX_COLOR);

    img.save("k_enclose.png")?;
    println!(
        "wrote k_enclose.png: exact area {:.6} (red, covers {}), approx area {:.6} (blue, covers {})",
        exact.area,
        set.count_in_rect(&exact.rect),
        approx.area,
        set.count_in_rect(&approx.rect)
    );
    Ok(())
}
