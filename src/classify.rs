use crate::{
    config::Thresholds,
    predicates::{
        ankles_under_hips, arms_horizontal, arms_vertical, feet_wider_than_shoulders,
        knees_bent, knees_straight, wrists_above_shoulders, wrists_below_shoulders,
    },
    routine::ExerciseState,
    snapshot::Snapshot,
};

pub trait PoseClassifier {
    /// Return whether `snapshot` satisfies the pose awaited in `state`.
    fn matches(&self, state: ExerciseState, snapshot: &Snapshot) -> bool;
}

/// Stance shared by every pose: feet wider than the shoulders, each ankle
/// under its hip.
fn stance(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    feet_wider_than_shoulders(snapshot) && ankles_under_hips(snapshot, thresholds)
}

/// Legs apart and straight, arms hanging by the trunk.
pub fn is_rest_pose(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    stance(snapshot, thresholds)
        && arms_vertical(snapshot, thresholds)
        && wrists_below_shoulders(snapshot)
        && knees_straight(snapshot, thresholds)
}

/// Knees bent, arms stretched sideways at shoulder height.
pub fn is_arms_out_pose(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    stance(snapshot, thresholds)
        && arms_horizontal(snapshot, thresholds)
        && knees_bent(snapshot, thresholds)
}

/// Knees bent, arms straight up with the wrists above the shoulders.
pub fn is_arms_overhead_pose(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    stance(snapshot, thresholds)
        && arms_vertical(snapshot, thresholds)
        && wrists_above_shoulders(snapshot)
        && knees_bent(snapshot, thresholds)
}

/// Classifier built from the joint-geometry predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometric {
    pub thresholds: Thresholds,
}

impl Geometric {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }
}

impl PoseClassifier for Geometric {
    fn matches(&self, state: ExerciseState, snapshot: &Snapshot) -> bool {
        match state {
            ExerciseState::Rest => is_rest_pose(snapshot, &self.thresholds),
            ExerciseState::ArmsOut => is_arms_out_pose(snapshot, &self.thresholds),
            ExerciseState::ArmsOverhead => is_arms_overhead_pose(snapshot, &self.thresholds),
        }
    }
}
