use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Lowest pitch, looking straight down
pub const MIN_PITCH: f32 = -FRAC_PI_2;
/// Highest pitch, looking straight up
pub const MAX_PITCH: f32 = FRAC_PI_2;

/// Clamp a pitch angle into `[-π/2, π/2]`
///
/// NaN collapses to level so a bad frame can't poison the pose.
pub fn clamp_pitch(pitch: f32) -> f32 {
    if pitch.is_nan() {
        0.0
    } else {
        pitch.clamp(MIN_PITCH, MAX_PITCH)
    }
}

/// Transform written to the host camera node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Camera pose: position plus accumulated yaw and pitch
///
/// Local axes: +X right, +Y up, -Z forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Radians about world up, unbounded
    pub yaw: f32,
    /// Radians about local right, kept within `[MIN_PITCH, MAX_PITCH]`
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: clamp_pitch(pitch),
        }
    }

    /// Identity, then yaw about up, then pitch about the rotated right axis
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Move along the camera's own axes
    pub fn translate_local(&mut self, delta_local: Vec3) {
        self.position += self.rotation() * delta_local;
    }

    pub fn to_transform(&self) -> CameraTransform {
        CameraTransform {
            position: self.position,
            rotation: self.rotation(),
        }
    }

    /// View -> world
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }

    /// World -> view
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation().conjugate()) * Mat4::from_translation(-self.position)
    }
}
