//! Hand-built snapshots of a user standing two meters from the sensor.

use crate::{
    joint::{JointId, Vec3},
    snapshot::Snapshot,
};

const Z: f32 = 2.0;

fn p(x: f32, y: f32) -> Vec3 {
    Vec3::from_parts(x, y, Z)
}

/// Torso and legs: shoulders 0.3 apart, ankles 0.5 apart and 0.1 outside
/// the hips, hips `knee_gap` above the ankles.
fn body(knee_gap: f32) -> Snapshot {
    let snapshot = Snapshot::new()
        .with(JointId::Head, p(0.0, 0.75))
        .with(JointId::ShoulderCenter, p(0.0, 0.55))
        .with(JointId::ShoulderLeft, p(-0.15, 0.5))
        .with(JointId::ShoulderRight, p(0.15, 0.5))
        .with(JointId::Spine, p(0.0, 0.25))
        .with(JointId::HipCenter, p(0.0, 0.05))
        .with(JointId::HipLeft, p(-0.15, 0.0))
        .with(JointId::HipRight, p(0.15, 0.0));
    with_knee_gap(snapshot, knee_gap)
}

/// Move both ankles (and feet) so the hip-to-ankle height equals `gap`.
pub(crate) fn with_knee_gap(snapshot: Snapshot, gap: f32) -> Snapshot {
    snapshot
        .with(JointId::KneeLeft, p(-0.2, -gap / 2.0))
        .with(JointId::KneeRight, p(0.2, -gap / 2.0))
        .with(JointId::AnkleLeft, p(-0.25, -gap))
        .with(JointId::AnkleRight, p(0.25, -gap))
        .with(JointId::FootLeft, p(-0.25, -gap - 0.05))
        .with(JointId::FootRight, p(0.25, -gap - 0.05))
}

fn arms(snapshot: Snapshot, elbow: (f32, f32), wrist: (f32, f32)) -> Snapshot {
    snapshot
        .with(JointId::ElbowLeft, p(-elbow.0, elbow.1))
        .with(JointId::ElbowRight, p(elbow.0, elbow.1))
        .with(JointId::WristLeft, p(-wrist.0, wrist.1))
        .with(JointId::WristRight, p(wrist.0, wrist.1))
        .with(JointId::HandLeft, p(-wrist.0, wrist.1 - 0.05))
        .with(JointId::HandRight, p(wrist.0, wrist.1 - 0.05))
}

/// Legs apart and straight, arms hanging beside the trunk.
pub(crate) fn rest_pose() -> Snapshot {
    arms(body(0.9), (0.2, 0.2), (0.22, -0.05))
}

/// Knees bent, arms held out level with the shoulders.
pub(crate) fn arms_out_pose() -> Snapshot {
    arms(body(0.7), (0.45, 0.52), (0.75, 0.55))
}

/// Knees bent, hands raised above the head.
pub(crate) fn arms_overhead_pose() -> Snapshot {
    arms(body(0.7), (0.2, 0.8), (0.1, 1.1))
}
