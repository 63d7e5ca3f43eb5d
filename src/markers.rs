use crate::{
    joint::{JointId, Vec3},
    routine::{ExerciseState, Step},
    snapshot::Snapshot,
};

/// A visual target placed relative to the body.
///
/// The X coordinate comes from `x_from` and the Y/Z coordinates from
/// `yz_from`, then `offset` is added. Most markers hang off a single joint,
/// in which case both anchors are the same.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GuideMarker {
    pub x_from: JointId,
    pub yz_from: JointId,
    pub offset: Vec3,
}

impl GuideMarker {
    const fn at(joint: JointId, dx: f32, dy: f32) -> Self {
        Self {
            x_from: joint,
            yz_from: joint,
            offset: Vec3::from_parts(dx, dy, 0.0),
        }
    }

    /// A foot target beside the hip at ankle height.
    const fn stance(hip: JointId, ankle: JointId, dx: f32) -> Self {
        Self {
            x_from: hip,
            yz_from: ankle,
            offset: Vec3::from_parts(dx, 0.0, 0.0),
        }
    }

    /// Sensor-space position of the marker, or `None` if an anchor joint is
    /// not tracked.
    pub fn resolve(&self, snapshot: &Snapshot) -> Option<Vec3> {
        let x = snapshot.position(self.x_from)?.x;
        let yz = snapshot.position(self.yz_from)?;
        Some(Vec3::from_parts(x, yz.y, yz.z) + self.offset)
    }
}

pub mod constants {
    use super::GuideMarker;
    use crate::joint::JointId::*;

    pub const STANCE_OFFSET: f32 = 0.15;

    /// Where the feet should go, shared by every pose.
    pub const STANCE: [GuideMarker; 2] = [
        GuideMarker::stance(HipRight, AnkleRight, STANCE_OFFSET),
        GuideMarker::stance(HipLeft, AnkleLeft, -STANCE_OFFSET),
    ];

    /// Hands resting beside the hips.
    pub const REST_HANDS: [GuideMarker; 2] = [
        GuideMarker::at(HipRight, 0.2, -0.2),
        GuideMarker::at(HipLeft, -0.2, -0.2),
    ];

    /// Hands stretched out at shoulder height.
    pub const ARMS_OUT_HANDS: [GuideMarker; 2] = [
        GuideMarker::at(ShoulderCenter, 0.7, -0.2),
        GuideMarker::at(ShoulderCenter, -0.7, -0.2),
    ];

    /// Hands clapping above the head.
    pub const ARMS_OVERHEAD_HANDS: [GuideMarker; 2] = [
        GuideMarker::at(ShoulderCenter, 0.1, 0.5),
        GuideMarker::at(ShoulderCenter, -0.1, 0.5),
    ];
}

/// The four targets shown while waiting for the pose of `state`.
pub fn guide_markers(state: ExerciseState) -> [GuideMarker; 4] {
    let hands = match state {
        ExerciseState::Rest => constants::REST_HANDS,
        ExerciseState::ArmsOut => constants::ARMS_OUT_HANDS,
        ExerciseState::ArmsOverhead => constants::ARMS_OVERHEAD_HANDS,
    };
    [hands[0], hands[1], constants::STANCE[0], constants::STANCE[1]]
}

/// Marker positions to draw for the frame that produced `step`.
///
/// The frame that finishes a cycle shows no targets.
pub fn marker_points(step: &Step, snapshot: &Snapshot) -> Vec<Vec3> {
    if step.completed {
        return vec![];
    }
    guide_markers(step.state)
        .iter()
        .filter_map(|marker| marker.resolve(snapshot))
        .collect()
}
