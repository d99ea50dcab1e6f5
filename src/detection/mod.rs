pub mod contours;
pub mod preprocessing;

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::warn;

use crate::models::{CapacityClass, Observation};

/// Calibration constants for the contour classifier.
///
/// The height cutoffs are tied to a known camera distance/lens combination
/// and are configuration, never derived from the image. Defaults reproduce
/// the values the capacity model was calibrated with.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Luma values at or below this read as outline strokes.
    pub luminance_threshold: u8,
    /// Regions with a bounding box narrower than this are stroke artifacts,
    /// not mailboxes.
    pub min_box_width: u32,
    /// Regions with a bounding box shorter than this are stroke artifacts.
    pub min_box_height: u32,
    /// Bounding-box heights at or above this classify as Standard.
    pub standard_height: u32,
    /// Bounding-box heights at or above this classify as High.
    pub high_height: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            luminance_threshold: 200,
            min_box_width: 20,
            min_box_height: 20,
            standard_height: 100,
            high_height: 140,
        }
    }
}

/// Turns one raster image into an ordered list of per-position capacity
/// observations.
pub struct CapacityClassifier {
    config: ClassifierConfig,
}

impl CapacityClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify every mailbox outline in the image. Pure function of the
    /// image contents.
    ///
    /// Surviving contours are read top-to-bottom (left-to-right within a
    /// row) and assigned sequential local ids "PK-1", "PK-2", ... in that
    /// order.
    pub fn classify(&self, img: &DynamicImage) -> Vec<Observation> {
        let gray = preprocessing::to_grayscale(img);
        let binary = preprocessing::binarize(&gray, self.config.luminance_threshold);

        let mut observations = Vec::new();
        let mut position = 0usize;

        for contour in contours::find_contours(&binary) {
            if contour.width() < self.config.min_box_width
                || contour.height() < self.config.min_box_height
            {
                continue; // Noise filter
            }

            position += 1;
            observations.push(Observation {
                local_id: format!("PK-{position}"),
                capacity_class: self.classify_height(contour.height()),
            });
        }

        observations
    }

    /// Map a bounding-box height in pixels to a capacity class.
    pub fn classify_height(&self, height: u32) -> CapacityClass {
        if height < self.config.standard_height {
            CapacityClass::Low
        } else if height < self.config.high_height {
            CapacityClass::Standard
        } else {
            CapacityClass::High
        }
    }

    /// Classify an image file. An unreadable or undecodable file is a soft
    /// failure: it is logged and returns zero detections, so callers treat
    /// "unreadable" and "nothing detected" identically and the batch never
    /// aborts.
    pub fn classify_file(&self, path: &Path) -> Vec<Observation> {
        let decoded = match ImageReader::open(path) {
            Ok(reader) => reader.decode(),
            Err(e) => {
                warn!("failed to open image {}: {e}", path.display());
                return Vec::new();
            }
        };

        match decoded {
            Ok(img) => self.classify(&img),
            Err(e) => {
                warn!("failed to decode image {}: {e}", path.display());
                Vec::new()
            }
        }
    }
}

impl Default for CapacityClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
