use std::collections::HashMap;

use image::DynamicImage;
use time::OffsetDateTime;
use tracing::info;

use crate::detection::CapacityClassifier;
use crate::models::{global_mailbox_id, CapacityClass, Entrance, Mailbox, Observation};

/// One mailbox position after merging every observation of it from a round
/// of photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCapacity {
    pub local_id: String,
    pub capacity_class: CapacityClass,
    pub observation_count: usize,
    pub was_ambiguous: bool,
}

/// Numeric suffix of a local position id, so "PK-2" orders before "PK-10".
fn local_id_index(local_id: &str) -> u32 {
    local_id
        .rsplit('-')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

/// Merge observations of one entrance into one capacity decision per
/// position. Disagreement between observations of the same position resolves
/// to the maximum ordinal seen; `was_ambiguous` records that the round
/// disagreed. A group only exists if at least one observation created it, so
/// positions never observed are simply absent from the output.
pub fn resolve_observations(observations: Vec<Observation>) -> Vec<ResolvedCapacity> {
    let mut groups: HashMap<String, Vec<CapacityClass>> = HashMap::new();
    for Observation { local_id, capacity_class } in observations {
        groups.entry(local_id).or_default().push(capacity_class);
    }

    let mut resolved: Vec<ResolvedCapacity> = groups
        .into_iter()
        .filter_map(|(local_id, classes)| {
            let first = *classes.first()?;
            let mut resolved_class = first;
            let mut min_ordinal = first.ordinal();
            for class in &classes {
                if class.ordinal() > resolved_class.ordinal() {
                    resolved_class = *class;
                }
                min_ordinal = min_ordinal.min(class.ordinal());
            }
            Some(ResolvedCapacity {
                local_id,
                capacity_class: resolved_class,
                observation_count: classes.len(),
                was_ambiguous: resolved_class.ordinal() != min_ordinal,
            })
        })
        .collect();

    resolved.sort_by_key(|r| local_id_index(&r.local_id));
    resolved
}

/// Run the classifier independently over every photo of one entrance, pool
/// the observations and resolve them. Photos that decode to zero detections
/// contribute nothing; they never abort the round.
pub fn aggregate_images(
    classifier: &CapacityClassifier,
    images: &[DynamicImage],
    entrance_id: &str,
) -> Vec<ResolvedCapacity> {
    info!("aggregating {} photos for entrance {entrance_id}", images.len());

    let mut pooled = Vec::new();
    for img in images {
        pooled.extend(classifier.classify(img));
    }

    resolve_observations(pooled)
}

/// Build the owned mailbox collection for an entrance from a round of
/// resolved capacities. Every mailbox gets the round's verification
/// timestamp; ids are composed with [`global_mailbox_id`] so they line up
/// with parcel recipient ids.
pub fn hydrate_entrance(
    entrance_id: &str,
    resolved: &[ResolvedCapacity],
    verified_at: OffsetDateTime,
) -> Entrance {
    let mailboxes = resolved
        .iter()
        .map(|r| Mailbox {
            id: global_mailbox_id(entrance_id, &r.local_id),
            entrance_id: entrance_id.to_string(),
            capacity_class: r.capacity_class,
            last_verified: verified_at,
        })
        .collect();

    Entrance {
        id: entrance_id.to_string(),
        mailboxes,
    }
}
