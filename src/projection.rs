use crate::joint::Vec3;

/// Pixels per meter at one meter depth for a 640x480 depth image.
pub const NOMINAL_FOCAL_LENGTH_640X480: f32 = 571.26;

/// Pinhole projection from sensor space to depth-image pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projector {
    pub width: f32,
    pub height: f32,
    pub focal_length: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            focal_length: NOMINAL_FOCAL_LENGTH_640X480,
        }
    }
}

impl Projector {
    /// Map `point` to `(column, row)`; points at or behind the sensor have no
    /// projection.
    pub fn project(&self, point: Vec3) -> Option<[f32; 2]> {
        if point.z <= 0.0 {
            return None;
        }
        let scale = self.focal_length / point.z;
        Some([
            self.width / 2.0 + point.x * scale,
            self.height / 2.0 - point.y * scale,
        ])
    }
}
