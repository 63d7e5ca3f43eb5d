//! Tunable limits for the pose predicates.
//!
//! The defaults were tuned against one sensor's coordinate scale and are all
//! expressed in sensor-space meters.

pub mod constants {
    pub const ARM_TOLERANCE_LEFT: f32 = 0.15;
    pub const ARM_TOLERANCE_RIGHT: f32 = 0.15;
    pub const ANKLE_HIP_BOUND: f32 = 0.2;
    pub const KNEE_STRAIGHT_BOUND: f32 = 0.85;
    pub const KNEE_BENT_BOUND: f32 = 0.8;

    /// Consecutive frames a body may be missing before its session is
    /// dropped, about one second at the sensor's 30 Hz.
    pub const MAX_MISSED_FRAMES: u32 = 30;
}

#[derive(Debug, Clone, Copy, PartialEq, structopt::StructOpt)]
pub struct Thresholds {
    /// Largest wrist offset from the left shoulder/elbow line.
    #[structopt(long, default_value = "0.15")]
    pub arm_tolerance_left: f32,

    /// Largest wrist offset from the right shoulder/elbow line.
    #[structopt(long, default_value = "0.15")]
    pub arm_tolerance_right: f32,

    /// Largest horizontal distance between an ankle and its hip.
    #[structopt(long, default_value = "0.2")]
    pub ankle_hip_bound: f32,

    /// Hip to ankle height above which a leg counts as straight.
    #[structopt(long, default_value = "0.85")]
    pub knee_straight_bound: f32,

    /// Hip to ankle height below which a leg counts as bent.
    #[structopt(long, default_value = "0.8")]
    pub knee_bent_bound: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            arm_tolerance_left: constants::ARM_TOLERANCE_LEFT,
            arm_tolerance_right: constants::ARM_TOLERANCE_RIGHT,
            ankle_hip_bound: constants::ANKLE_HIP_BOUND,
            knee_straight_bound: constants::KNEE_STRAIGHT_BOUND,
            knee_bent_bound: constants::KNEE_BENT_BOUND,
        }
    }
}

impl Thresholds {
    pub fn arm_tolerance(&self, side: crate::joint::Side) -> f32 {
        match side {
            crate::joint::Side::Left => self.arm_tolerance_left,
            crate::joint::Side::Right => self.arm_tolerance_right,
        }
    }
}
