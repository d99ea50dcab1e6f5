//! Synthetic mailbox-wall rasters for the simulation runner and tests.
//!
//! Renders the wall the capacity thresholds were calibrated against, with
//! configurable framing shift and injected noise. This is a test-fixture
//! producer, not part of the classification core.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::Rng;

/// Geometry of a synthetic mailbox wall.
#[derive(Debug, Clone)]
pub struct WallLayout {
    pub canvas_w: u32,
    pub canvas_h: u32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub box_width: u32,
    pub margin: u32,
    /// Nominal box height per row, top to bottom.
    pub row_heights: Vec<u32>,
    pub columns: u32,
    /// Cut the wall off after this many boxes (rows fill left to right).
    pub max_boxes: Option<usize>,
}

impl Default for WallLayout {
    /// The calibrated wall: four rows of three on an 800x600 canvas, row
    /// heights 80/120/120/160, cut off after eleven boxes.
    fn default() -> Self {
        Self {
            canvas_w: 800,
            canvas_h: 600,
            origin_x: 50,
            origin_y: 50,
            box_width: 150,
            margin: 10,
            row_heights: vec![80, 120, 120, 160],
            columns: 3,
            max_boxes: Some(11),
        }
    }
}

impl WallLayout {
    /// Single-column wall with one box of each calibrated capacity height,
    /// top to bottom: 80 (Low), 120 (Standard), 160 (High).
    pub fn calibration_column() -> Self {
        Self {
            row_heights: vec![80, 120, 160],
            columns: 1,
            max_boxes: None,
            ..Self::default()
        }
    }

    /// Single-column wall with the given box heights.
    pub fn column(heights: &[u32]) -> Self {
        Self {
            row_heights: heights.to_vec(),
            columns: 1,
            max_boxes: None,
            ..Self::default()
        }
    }

    /// Number of boxes the layout draws.
    pub fn box_count(&self) -> usize {
        let full = self.row_heights.len() * self.columns as usize;
        match self.max_boxes {
            Some(cap) => full.min(cap),
            None => full,
        }
    }
}

/// Render one photograph of the wall.
///
/// `shift_x`/`shift_y` translate the whole wall (camera framing jitter).
/// `noise` drives two perturbations: each box height is jittered uniformly
/// within +-(100 * noise) px, and every pixel's luminance is shifted
/// uniformly within +-(25 * noise), saturating at the value range.
pub fn render_wall(
    layout: &WallLayout,
    shift_x: i32,
    shift_y: i32,
    noise: f64,
    rng: &mut StdRng,
) -> GrayImage {
    let mut img = GrayImage::from_pixel(layout.canvas_w, layout.canvas_h, Luma([255u8]));

    let max_boxes = layout.box_count();
    let mut drawn = 0usize;
    let mut y = layout.origin_y + shift_y;

    'rows: for &row_height in &layout.row_heights {
        let mut x = layout.origin_x + shift_x;
        for _ in 0..layout.columns {
            if drawn >= max_boxes {
                break 'rows;
            }
            drawn += 1;

            let jitter = if noise > 0.0 {
                let amplitude = 100.0 * noise;
                rng.gen_range(-amplitude..=amplitude).round() as i32
            } else {
                0
            };
            let height = (row_height as i32 + jitter).max(4) as u32;

            draw_box_outline(&mut img, x, y, layout.box_width, height);
            x += (layout.box_width + layout.margin) as i32;
        }
        y += (row_height + layout.margin) as i32;
    }

    if noise > 0.0 {
        let amplitude = 25.0 * noise;
        for pixel in img.pixels_mut() {
            let delta = rng.gen_range(-amplitude..=amplitude).round() as i32;
            pixel[0] = (pixel[0] as i32 + delta).clamp(0, 255) as u8;
        }
    }

    img
}

/// Two nested hollow rectangles give the 2 px outline stroke.
fn draw_box_outline(img: &mut GrayImage, x: i32, y: i32, width: u32, height: u32) {
    draw_hollow_rect_mut(img, Rect::at(x, y).of_size(width, height), Luma([0u8]));
    if width > 2 && height > 2 {
        draw_hollow_rect_mut(
            img,
            Rect::at(x + 1, y + 1).of_size(width - 2, height - 2),
            Luma([0u8]),
        );
    }
}
