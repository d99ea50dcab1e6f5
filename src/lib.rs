pub mod aggregate;
pub mod delivery;
pub mod detection;
pub mod models;
pub mod report;
pub mod simulation;
pub mod synth;

pub use aggregate::{aggregate_images, hydrate_entrance, resolve_observations, ResolvedCapacity};
pub use delivery::{decide, simulate_route, DeliveryRecord, Outcome, RouteSummary};
pub use detection::{CapacityClassifier, ClassifierConfig};
pub use models::{
    global_mailbox_id, CapacityClass, Contour, Entrance, Mailbox, Observation, Parcel, VolumeClass,
};
pub use simulation::{run_scenario, ScenarioOutcome, ScenarioSpec, ScenarioSummary};
pub use synth::{render_wall, WallLayout};
