use crate::error::Error;
use num_traits::FromPrimitive;
use ordered_float::NotNan;
use std::ops::{Add, Sub};

/// Skeleton joints reported by the depth sensor, in sensor order.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    num_derive::FromPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    HipCenter,
    Spine,
    ShoulderCenter,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
}

pub const NUM_JOINTS: usize = 20;

impl JointId {
    pub fn from_idx(index: usize) -> Result<Self, Error> {
        Self::from_usize(index).ok_or(Error::ConvertUSizeToJointId(index))
    }

    /// Every joint, in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_JOINTS).filter_map(|index| Self::from_idx(index).ok())
    }
}

/// Which half of the body a limb predicate looks at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn shoulder(self) -> JointId {
        match self {
            Self::Left => JointId::ShoulderLeft,
            Self::Right => JointId::ShoulderRight,
        }
    }

    pub fn elbow(self) -> JointId {
        match self {
            Self::Left => JointId::ElbowLeft,
            Self::Right => JointId::ElbowRight,
        }
    }

    pub fn wrist(self) -> JointId {
        match self {
            Self::Left => JointId::WristLeft,
            Self::Right => JointId::WristRight,
        }
    }

    pub fn hip(self) -> JointId {
        match self {
            Self::Left => JointId::HipLeft,
            Self::Right => JointId::HipRight,
        }
    }

    pub fn ankle(self) -> JointId {
        match self {
            Self::Left => JointId::AnkleLeft,
            Self::Right => JointId::AnkleRight,
        }
    }
}

/// How much the sensor trusts a joint position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    NotTracked,
    Inferred,
    Tracked,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::NotTracked
    }
}

/// A point in sensor space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct a point, rejecting NaN coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Result<Self, Error> {
        let checked = |v: f32| {
            NotNan::new(v)
                .map(NotNan::into_inner)
                .map_err(|e| Error::ConstructNotNan(e, v))
        };
        Ok(Self {
            x: checked(x)?,
            y: checked(y)?,
            z: checked(z)?,
        })
    }

    pub const fn from_parts(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct JointSample {
    pub position: Vec3,
    pub confidence: Confidence,
}

impl JointSample {
    pub fn tracked(position: Vec3) -> Self {
        Self {
            position,
            confidence: Confidence::Tracked,
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.confidence != Confidence::NotTracked
    }
}
