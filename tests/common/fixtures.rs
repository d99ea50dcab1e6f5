use image::DynamicImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;

use parcelfit::models::{CapacityClass, Mailbox, Observation, Parcel, VolumeClass};
use parcelfit::synth::{render_wall, WallLayout};

/// Render a clean (zero-noise, zero-shift) photo of the given wall.
pub fn clean_photo(layout: &WallLayout) -> DynamicImage {
    let mut rng = StdRng::seed_from_u64(0);
    DynamicImage::ImageLuma8(render_wall(layout, 0, 0, 0.0, &mut rng))
}

/// Render a noisy photo of the given wall with a fixed seed.
pub fn noisy_photo(layout: &WallLayout, noise: f64, seed: u64) -> DynamicImage {
    let mut rng = StdRng::seed_from_u64(seed);
    DynamicImage::ImageLuma8(render_wall(layout, 0, 0, noise, &mut rng))
}

pub fn observation(local_id: &str, capacity: CapacityClass) -> Observation {
    Observation {
        local_id: local_id.to_string(),
        capacity_class: capacity,
    }
}

pub fn mailbox(id: &str, capacity: CapacityClass) -> Mailbox {
    Mailbox {
        id: id.to_string(),
        entrance_id: "ENT-1".to_string(),
        capacity_class: capacity,
        last_verified: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn parcel(id: &str, volume: VolumeClass, recipient: &str) -> Parcel {
    Parcel {
        id: id.to_string(),
        volume_class: volume,
        recipient_mailbox_id: recipient.to_string(),
    }
}
