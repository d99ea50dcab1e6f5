//! End-to-end scenario runner: synthesize a ground-truth topology and a
//! parcel batch, photograph every entrance, aggregate the observations into
//! a capacity map, then route the batch against it.

use image::DynamicImage;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::aggregate::{aggregate_images, hydrate_entrance};
use crate::delivery::{simulate_route, RouteSummary};
use crate::detection::CapacityClassifier;
use crate::models::{global_mailbox_id, Entrance, Mailbox, Parcel, VolumeClass};
use crate::synth::{render_wall, WallLayout};

/// One named simulation scenario. The wall layout is the single source of
/// truth for how many mailboxes an entrance has; expected ids derive from it.
#[derive(Debug, Clone)]
pub struct ScenarioSpec {
    pub name: String,
    pub entrance_count: usize,
    pub parcel_count: usize,
    /// Injected-noise intensity handed to the wall generator.
    pub noise: f64,
    pub photos_per_entrance: usize,
    pub layout: WallLayout,
}

/// Ground-truth topology for one entrance, before hydration.
#[derive(Debug, Clone)]
pub struct EntranceConfig {
    pub id: String,
    pub expected_mailbox_ids: Vec<String>,
}

/// One CSV/table row of scenario results.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub noise: f64,
    pub entrance_count: usize,
    pub parcel_count: usize,
    pub direct: usize,
    pub pickup: usize,
    pub direct_pct: f64,
}

/// Full result of one scenario run.
pub struct ScenarioOutcome {
    pub summary: ScenarioSummary,
    pub route: RouteSummary,
    pub entrances: Vec<Entrance>,
}

/// Synthesize entrance configs and a parcel batch with uniformly random
/// recipient assignment and volume class. Recipient ids are composed with
/// [`global_mailbox_id`], the same function hydration uses.
pub fn generate_routes(spec: &ScenarioSpec, rng: &mut StdRng) -> (Vec<EntranceConfig>, Vec<Parcel>) {
    let mut configs = Vec::with_capacity(spec.entrance_count);
    let mut all_ids = Vec::new();

    for i in 1..=spec.entrance_count {
        let id = format!("ENT-{i}");
        let expected: Vec<String> = (1..=spec.layout.box_count())
            .map(|j| global_mailbox_id(&id, &format!("PK-{j}")))
            .collect();
        all_ids.extend(expected.iter().cloned());
        configs.push(EntranceConfig {
            id,
            expected_mailbox_ids: expected,
        });
    }

    let mut parcels = Vec::with_capacity(spec.parcel_count);
    for k in 0..spec.parcel_count {
        if all_ids.is_empty() {
            break;
        }
        let recipient = all_ids[rng.gen_range(0..all_ids.len())].clone();
        let volume = VolumeClass::ALL[rng.gen_range(0..VolumeClass::ALL.len())];
        parcels.push(Parcel {
            id: format!("PKG-{:03}", k + 1),
            volume_class: volume,
            recipient_mailbox_id: recipient,
        });
    }

    (configs, parcels)
}

/// Run one scenario end to end. Different seeds are expected to produce
/// different numbers; that spread is what the noise/photo-count sensitivity
/// analysis measures.
pub fn run_scenario(
    spec: &ScenarioSpec,
    classifier: &CapacityClassifier,
    rng: &mut StdRng,
) -> ScenarioOutcome {
    info!(
        "scenario {}: {} entrances, {} parcels, noise {}, {} photos/entrance",
        spec.name, spec.entrance_count, spec.parcel_count, spec.noise, spec.photos_per_entrance
    );

    let (configs, parcels) = generate_routes(spec, rng);

    // Vision phase: photograph, aggregate and hydrate every entrance
    // independently.
    let mut entrances = Vec::with_capacity(configs.len());
    for config in &configs {
        let images: Vec<DynamicImage> = (0..spec.photos_per_entrance)
            .map(|_| {
                let sx = rng.gen_range(-5..=5);
                let sy = rng.gen_range(-5..=5);
                DynamicImage::ImageLuma8(render_wall(&spec.layout, sx, sy, spec.noise, rng))
            })
            .collect();

        let resolved = aggregate_images(classifier, &images, &config.id);
        entrances.push(hydrate_entrance(&config.id, &resolved, OffsetDateTime::now_utc()));
    }

    // Delivery phase: route the whole batch against the pooled capacity map.
    let mailboxes: Vec<Mailbox> = entrances
        .iter()
        .flat_map(|e| e.mailboxes.iter().cloned())
        .collect();
    let route = simulate_route(&parcels, &mailboxes);

    let direct_pct = if route.total > 0 {
        route.direct as f64 / route.total as f64 * 100.0
    } else {
        0.0
    };

    ScenarioOutcome {
        summary: ScenarioSummary {
            name: spec.name.clone(),
            noise: spec.noise,
            entrance_count: spec.entrance_count,
            parcel_count: route.total,
            direct: route.direct,
            pickup: route.pickup,
            direct_pct,
        },
        route,
        entrances,
    }
}
