use std::collections::HashMap;

use serde::Serialize;

use crate::models::{CapacityClass, Mailbox, Parcel, VolumeClass};

/// Per-parcel routing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    DeliveredDirect,
    EscalatedPickup,
    UnknownRecipient,
}

impl Outcome {
    pub fn tag(self) -> &'static str {
        match self {
            Outcome::DeliveredDirect => "DELIVERED_DIRECT",
            Outcome::EscalatedPickup => "ESCALATED_PICKUP",
            Outcome::UnknownRecipient => "UNKNOWN_RECIPIENT",
        }
    }
}

/// One auditable entry of the decision log.
/// `capacity` is None when the recipient mailbox is not in the capacity map.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRecord {
    pub parcel_id: String,
    pub volume: VolumeClass,
    pub mailbox_id: String,
    pub capacity: Option<CapacityClass>,
    pub outcome: Outcome,
}

/// Batch result: counters plus the full decision log in input parcel order.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub total: usize,
    pub direct: usize,
    pub pickup: usize,
    pub log: Vec<DeliveryRecord>,
}

/// True iff the parcel fits the mailbox directly: capacity ordinal at least
/// the volume ordinal. Total order comparison, no rounding or tolerance.
pub fn decide(mailbox: &Mailbox, parcel: &Parcel) -> bool {
    mailbox.capacity_class.fits(parcel.volume_class)
}

/// Route a batch of parcels against the current capacity map. A parcel whose
/// recipient id has no entry in the map always escalates to pickup with the
/// `UnknownRecipient` tag; that is a fail-safe default, never an error.
/// Mutates neither mailboxes nor parcels.
pub fn simulate_route(parcels: &[Parcel], mailboxes: &[Mailbox]) -> RouteSummary {
    let by_id: HashMap<&str, &Mailbox> =
        mailboxes.iter().map(|m| (m.id.as_str(), m)).collect();

    let mut summary = RouteSummary {
        total: parcels.len(),
        direct: 0,
        pickup: 0,
        log: Vec::with_capacity(parcels.len()),
    };

    for parcel in parcels {
        let record = match by_id.get(parcel.recipient_mailbox_id.as_str()) {
            Some(mailbox) => {
                let outcome = if decide(mailbox, parcel) {
                    summary.direct += 1;
                    Outcome::DeliveredDirect
                } else {
                    summary.pickup += 1;
                    Outcome::EscalatedPickup
                };
                DeliveryRecord {
                    parcel_id: parcel.id.clone(),
                    volume: parcel.volume_class,
                    mailbox_id: parcel.recipient_mailbox_id.clone(),
                    capacity: Some(mailbox.capacity_class),
                    outcome,
                }
            }
            None => {
                summary.pickup += 1;
                DeliveryRecord {
                    parcel_id: parcel.id.clone(),
                    volume: parcel.volume_class,
                    mailbox_id: parcel.recipient_mailbox_id.clone(),
                    capacity: None,
                    outcome: Outcome::UnknownRecipient,
                }
            }
        };
        summary.log.push(record);
    }

    summary
}
