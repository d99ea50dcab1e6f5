use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};
use std::collections::HashMap;

use crate::models::Contour;

/// Extract connected foreground regions from a binary image as bounding
/// boxes, sorted into reading order: top coordinate first, then left.
/// The top-to-bottom order must match the physical stacking order of the
/// photographed mailbox wall; the left tie-break keeps same-row boxes
/// deterministic.
pub fn find_contours(binary: &GrayImage) -> Vec<Contour> {
    // Label connected components (white pixels = foreground strokes)
    let labeled = connected_components(binary, Connectivity::Eight, Luma([0]));

    let mut regions: HashMap<u32, (u32, u32, u32, u32, u32)> = HashMap::new();

    for (x, y, label) in labeled.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue; // Skip background
        }

        regions
            .entry(label_val)
            .and_modify(|(min_x, min_y, max_x, max_y, count)| {
                *min_x = (*min_x).min(x);
                *min_y = (*min_y).min(y);
                *max_x = (*max_x).max(x);
                *max_y = (*max_y).max(y);
                *count += 1;
            })
            .or_insert((x, y, x, y, 1));
    }

    let mut contours: Vec<Contour> = regions
        .into_iter()
        .map(|(label, (min_x, min_y, max_x, max_y, count))| Contour {
            label,
            min_x,
            min_y,
            max_x,
            max_y,
            pixel_count: count,
        })
        .collect();

    contours.sort_by_key(|c| (c.top(), c.left()));
    contours
}
