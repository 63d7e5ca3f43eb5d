//! Geometric checks over a single snapshot.
//!
//! Every distance is measured in sensor space. A gap of exactly zero never
//! passes a bounded check: two joints at the same coordinate are treated as
//! an unset reading rather than a perfect alignment. Any predicate touching a
//! joint the sensor lost evaluates to false.

use crate::{
    config::Thresholds,
    joint::{JointId, Side},
    snapshot::Snapshot,
};

#[inline]
fn within(gap: f32, bound: f32) -> bool {
    0.0 < gap && gap < bound
}

fn x_gap(snapshot: &Snapshot, a: JointId, b: JointId) -> Option<f32> {
    Some((snapshot.position(a)?.x - snapshot.position(b)?.x).abs())
}

fn y_gap(snapshot: &Snapshot, a: JointId, b: JointId) -> Option<f32> {
    Some((snapshot.position(a)?.y - snapshot.position(b)?.y).abs())
}

/// Horizontal shoulder-to-shoulder distance, the body-size baseline for the
/// stance check.
pub fn stance_width(snapshot: &Snapshot) -> Option<f32> {
    x_gap(snapshot, JointId::ShoulderRight, JointId::ShoulderLeft)
}

pub fn feet_wider_than_shoulders(snapshot: &Snapshot) -> bool {
    match (
        x_gap(snapshot, JointId::AnkleRight, JointId::AnkleLeft),
        stance_width(snapshot),
    ) {
        (Some(feet), Some(shoulders)) => feet > shoulders,
        _ => false,
    }
}

/// Shoulder, elbow and wrist stacked in a column, as when the arm hangs down
/// or points straight up.
pub fn arm_vertical(snapshot: &Snapshot, side: Side, tolerance: f32) -> bool {
    let gaps = (
        x_gap(snapshot, side.wrist(), side.shoulder()),
        x_gap(snapshot, side.wrist(), side.elbow()),
    );
    match gaps {
        (Some(shoulder), Some(elbow)) => within(shoulder, tolerance) && within(elbow, tolerance),
        _ => false,
    }
}

/// Shoulder, elbow and wrist level with each other, as when the arm is held
/// out to the side.
pub fn arm_horizontal(snapshot: &Snapshot, side: Side, tolerance: f32) -> bool {
    let gaps = (
        y_gap(snapshot, side.wrist(), side.shoulder()),
        y_gap(snapshot, side.wrist(), side.elbow()),
    );
    match gaps {
        (Some(shoulder), Some(elbow)) => within(shoulder, tolerance) && within(elbow, tolerance),
        _ => false,
    }
}

pub fn arms_vertical(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    Side::BOTH
        .iter()
        .all(|&side| arm_vertical(snapshot, side, thresholds.arm_tolerance(side)))
}

pub fn arms_horizontal(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    Side::BOTH
        .iter()
        .all(|&side| arm_horizontal(snapshot, side, thresholds.arm_tolerance(side)))
}

fn wrist_height_above_shoulder(snapshot: &Snapshot, side: Side) -> Option<f32> {
    Some(snapshot.position(side.wrist())?.y - snapshot.position(side.shoulder())?.y)
}

pub fn wrists_below_shoulders(snapshot: &Snapshot) -> bool {
    Side::BOTH.iter().all(|&side| {
        wrist_height_above_shoulder(snapshot, side).map_or(false, |height| height < 0.0)
    })
}

pub fn wrists_above_shoulders(snapshot: &Snapshot) -> bool {
    Side::BOTH.iter().all(|&side| {
        wrist_height_above_shoulder(snapshot, side).map_or(false, |height| height > 0.0)
    })
}

pub fn ankle_under_hip(snapshot: &Snapshot, side: Side, bound: f32) -> bool {
    x_gap(snapshot, side.ankle(), side.hip()).map_or(false, |gap| within(gap, bound))
}

pub fn ankles_under_hips(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    Side::BOTH
        .iter()
        .all(|&side| ankle_under_hip(snapshot, side, thresholds.ankle_hip_bound))
}

/// Vertical hip-to-ankle distance, used as an inverse proxy for knee bend.
pub fn knee_gap(snapshot: &Snapshot, side: Side) -> Option<f32> {
    y_gap(snapshot, side.hip(), side.ankle())
}

pub fn knee_straight(snapshot: &Snapshot, side: Side, bound: f32) -> bool {
    knee_gap(snapshot, side).map_or(false, |gap| gap > bound)
}

pub fn knee_bent(snapshot: &Snapshot, side: Side, bound: f32) -> bool {
    knee_gap(snapshot, side).map_or(false, |gap| within(gap, bound))
}

pub fn knees_straight(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    Side::BOTH
        .iter()
        .all(|&side| knee_straight(snapshot, side, thresholds.knee_straight_bound))
}

pub fn knees_bent(snapshot: &Snapshot, thresholds: &Thresholds) -> bool {
    Side::BOTH
        .iter()
        .all(|&side| knee_bent(snapshot, side, thresholds.knee_bent_bound))
}
