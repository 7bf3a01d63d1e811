//! Perspective camera orbiting the origin.
//!
//! The eye rides a sphere of fixed radius around the target: yaw spins it
//! around the Y axis, pitch raises it toward the poles. The light stays in
//! world space, so orbiting visibly shifts the shading.

use crate::sphere::matrix::{self as mat, Mat4};
use verdant_config::CameraConfig;

#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Eye distance from the origin.
    pub distance: f32,
    pub aspect: f32,
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            fov_y: config.fov_deg.to_radians(),
            near: config.near,
            far: config.far,
            distance: config.distance,
            aspect,
        }
    }

    /// Update the aspect ratio after a window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn projection(&self) -> Mat4 {
        mat::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// View matrix for the given orbit angles.
    pub fn view(&self, yaw: f32, pitch: f32) -> Mat4 {
        let orbit = mat::mul(&mat::rotate_x(pitch), &mat::rotate_y(yaw));
        mat::mul(&mat::translate(0.0, 0.0, -self.distance), &orbit)
    }

    /// Eye position in world space, for specular shading.
    pub fn eye(&self, yaw: f32, pitch: f32) -> [f32; 3] {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        [
            -self.distance * sin_yaw * cos_pitch,
            self.distance * sin_pitch,
            self.distance * cos_yaw * cos_pitch,
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================
