mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from parcelfit for tests
pub use parcelfit::{
    CapacityClass, CapacityClassifier, Mailbox, Observation, Parcel, VolumeClass, WallLayout,
};
