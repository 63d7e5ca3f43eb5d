//! Follow a user through a three-movement exercise routine from per-frame
//! skeleton joints, counting repetitions and producing on-screen guidance.

pub mod classify;
pub mod config;
pub mod error;
pub mod feedback;
pub mod frame;
pub mod joint;
pub mod markers;
pub mod predicates;
pub mod projection;
pub mod replay;
pub mod report;
pub mod routine;
pub mod snapshot;
pub mod tracker;

#[cfg(test)]
mod fixtures;

pub use classify::{Geometric, PoseClassifier};
pub use config::Thresholds;
pub use error::Error;
pub use joint::{Confidence, JointId, JointSample, Side, Vec3};
pub use routine::{ExerciseState, Session, Step};
pub use snapshot::Snapshot;
pub use tracker::{SharedSession, Tracker};
