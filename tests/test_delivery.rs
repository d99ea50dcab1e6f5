//! Integration tests for the delivery decision engine.
//!
//! Tests cover:
//! - The full capacity/volume fit table (9 pairs)
//! - Unknown-recipient fail-safe routing
//! - Decision-log ordering and counter invariants

mod common;

use common::*;
use parcelfit::delivery::{decide, simulate_route, Outcome};

#[test]
fn test_fit_table_is_exact() {
    // Low fits Small only; Standard fits Small and Medium; High fits all.
    let table = [
        (CapacityClass::Low, VolumeClass::Small, true),
        (CapacityClass::Low, VolumeClass::Medium, false),
        (CapacityClass::Low, VolumeClass::Large, false),
        (CapacityClass::Standard, VolumeClass::Small, true),
        (CapacityClass::Standard, VolumeClass::Medium, true),
        (CapacityClass::Standard, VolumeClass::Large, false),
        (CapacityClass::High, VolumeClass::Small, true),
        (CapacityClass::High, VolumeClass::Medium, true),
        (CapacityClass::High, VolumeClass::Large, true),
    ];

    for (capacity, volume, expected) in table {
        let mb = mailbox("ENT-1-PK-1", capacity);
        let p = parcel("PKG-001", volume, "ENT-1-PK-1");
        assert_eq!(
            decide(&mb, &p),
            expected,
            "{} / {}",
            capacity.name(),
            volume.name()
        );
        assert_eq!(decide(&mb, &p), capacity.ordinal() >= volume.ordinal());
    }
}

#[test]
fn test_large_parcel_to_low_mailbox_always_escalates() {
    let mailboxes = vec![mailbox("ENT-1-PK-1", CapacityClass::Low)];
    let parcels = vec![parcel("PKG-001", VolumeClass::Large, "ENT-1-PK-1")];

    let summary = simulate_route(&parcels, &mailboxes);

    assert_eq!(summary.pickup, 1);
    assert_eq!(summary.direct, 0);
    assert_eq!(summary.log[0].outcome, Outcome::EscalatedPickup);
    assert_eq!(summary.log[0].capacity, Some(CapacityClass::Low));
}

#[test]
fn test_unknown_recipient_is_failsafe_pickup() {
    let mailboxes = vec![mailbox("ENT-1-PK-1", CapacityClass::High)];
    let parcels = vec![parcel("PKG-001", VolumeClass::Small, "ENT-9-PK-4")];

    let summary = simulate_route(&parcels, &mailboxes);

    assert_eq!(summary.pickup, 1);
    assert_eq!(summary.direct, 0);
    assert_eq!(summary.log[0].outcome, Outcome::UnknownRecipient);
    assert_eq!(summary.log[0].capacity, None);
    assert_eq!(summary.log[0].mailbox_id, "ENT-9-PK-4");
}

#[test]
fn test_log_preserves_input_order_and_counters_add_up() {
    let mailboxes = vec![
        mailbox("ENT-1-PK-1", CapacityClass::Low),
        mailbox("ENT-1-PK-2", CapacityClass::Standard),
        mailbox("ENT-1-PK-3", CapacityClass::High),
    ];
    let parcels = vec![
        parcel("PKG-001", VolumeClass::Large, "ENT-1-PK-3"),
        parcel("PKG-002", VolumeClass::Medium, "ENT-1-PK-1"),
        parcel("PKG-003", VolumeClass::Small, "ENT-1-PK-1"),
        parcel("PKG-004", VolumeClass::Small, "ENT-2-PK-1"),
        parcel("PKG-005", VolumeClass::Large, "ENT-1-PK-2"),
    ];

    let summary = simulate_route(&parcels, &mailboxes);

    let logged_ids: Vec<&str> = summary.log.iter().map(|r| r.parcel_id.as_str()).collect();
    assert_eq!(
        logged_ids,
        vec!["PKG-001", "PKG-002", "PKG-003", "PKG-004", "PKG-005"]
    );

    assert_eq!(summary.total, 5);
    assert_eq!(summary.direct + summary.pickup, summary.total);
    assert_eq!(summary.direct, 2); // PKG-001, PKG-003
    assert_eq!(summary.pickup, 3);

    let unknown = summary
        .log
        .iter()
        .filter(|r| r.outcome == Outcome::UnknownRecipient)
        .count();
    assert_eq!(unknown, 1);

    let outcomes: Vec<Outcome> = summary.log.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::DeliveredDirect,
            Outcome::EscalatedPickup,
            Outcome::DeliveredDirect,
            Outcome::UnknownRecipient,
            Outcome::EscalatedPickup,
        ]
    );
}

#[test]
fn test_empty_batch() {
    let summary = simulate_route(&[], &[mailbox("ENT-1-PK-1", CapacityClass::Low)]);

    assert_eq!(summary.total, 0);
    assert_eq!(summary.direct, 0);
    assert_eq!(summary.pickup, 0);
    assert!(summary.log.is_empty());
}

#[test]
fn test_outcome_tags() {
    assert_eq!(Outcome::DeliveredDirect.tag(), "DELIVERED_DIRECT");
    assert_eq!(Outcome::EscalatedPickup.tag(), "ESCALATED_PICKUP");
    assert_eq!(Outcome::UnknownRecipient.tag(), "UNKNOWN_RECIPIENT");
}
