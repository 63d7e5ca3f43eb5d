use crate::joint::{JointId, JointSample, Vec3, NUM_JOINTS};

pub type Joints = [JointSample; NUM_JOINTS];

/// One tracked body's joints for a single frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Snapshot {
    joints: Joints,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, joint: JointId, sample: JointSample) {
        self.joints[joint as usize] = sample;
    }

    /// Builder form of [`Snapshot::set`] for a fully tracked joint.
    pub fn with(mut self, joint: JointId, position: Vec3) -> Self {
        self.set(joint, JointSample::tracked(position));
        self
    }

    pub fn get(&self, joint: JointId) -> &JointSample {
        &self.joints[joint as usize]
    }

    /// Position of `joint`, or `None` when the sensor lost it.
    pub fn position(&self, joint: JointId) -> Option<Vec3> {
        let sample = self.get(joint);
        if sample.is_tracked() {
            Some(sample.position)
        } else {
            None
        }
    }

    /// True when at least one joint carries a usable position.
    pub fn has_body(&self) -> bool {
        self.joints.iter().any(JointSample::is_tracked)
    }
}
