//! Camera pose representation and look-at orientation.
//!
//! The rotation convention matches the downstream renderer: a camera with
//! zero rotation points along the venue's "down" axis, so a pitch of pi/2
//! means "looking horizontally forward". Yaw is rotation about the vertical
//! axis; roll is always zero (cameras stay level by design).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f32 = 60.0;

/// Camera rotation in Euler angles (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRotation {
    /// Pitch - rotation around the lateral axis.
    pub x: f32,
    /// Roll - always zero.
    pub y: f32,
    /// Yaw - rotation around the vertical axis.
    pub z: f32,
}

/// A complete camera pose: position, orientation, and field of view.
///
/// Value object, created fresh per mapping call and owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    /// Position in meters, venue world space.
    pub position: Vec3,
    /// Euler orientation in radians.
    pub rotation: CameraRotation,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

/// The stable record handed to the external render collaborator.
///
/// Field names and numeric meaning are a wire contract; do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    /// Camera position (x, y, z) in meters.
    pub location: [f32; 3],
    /// Euler rotation (x, y, z) in radians.
    pub rotation_euler: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl CameraPosition {
    /// Creates a camera pose directly from its parts.
    pub fn new(position: Vec3, rotation: CameraRotation, fov: f32) -> Self {
        Self {
            position,
            rotation,
            fov,
        }
    }

    /// Creates a camera at `position` oriented to look at `target`.
    ///
    /// When the camera coincides with the target there is no defined
    /// direction; the result falls back to the level-forward default
    /// orientation (pitch pi/2, yaw 0) instead of failing.
    pub fn from_position_looking_at(position: Vec3, target: Vec3, fov: f32) -> Self {
        let d = target - position;

        let horizontal_dist = d.truncate().length();
        let total_dist = d.length();

        if total_dist == 0.0 {
            return Self::new(
                position,
                CameraRotation {
                    x: std::f32::consts::FRAC_PI_2,
                    y: 0.0,
                    z: 0.0,
                },
                fov,
            );
        }

        // Elevation angle of the target above the camera's horizontal plane.
        let pitch_angle = if horizontal_dist > 0.0 {
            d.z.atan2(horizontal_dist)
        } else if d.z > 0.0 {
            std::f32::consts::FRAC_PI_2
        } else {
            -std::f32::consts::FRAC_PI_2
        };

        // Zero pitch points down, pi/2 points forward, hence the offset.
        let rot_x = std::f32::consts::FRAC_PI_2 - pitch_angle;

        // Heading measured from the +y axis.
        let rot_z = d.x.atan2(d.y);

        Self::new(
            position,
            CameraRotation {
                x: rot_x,
                y: 0.0,
                z: rot_z,
            },
            fov,
        )
    }

    /// Exports the pose as the render-boundary record.
    pub fn to_projection_record(&self) -> ProjectionRecord {
        ProjectionRecord {
            location: self.position.to_array(),
            rotation_euler: [self.rotation.x, self.rotation.y, self.rotation.z],
            fov: self.fov,
        }
    }
}
