//! Math utilities and types
//!
//! Provides fundamental math types for 3D simulation along with the scalar
//! interpolation helpers used by the flight integrator.

pub use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, UnitQuaternion, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// 3D rotation type
pub type Rot3 = Rotation3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Linear interpolation between two scalars
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Damp a scalar towards a target, independent of frame rate.
///
/// Equivalent to `lerp(current, target, 1 - exp(-rate * dt))`; the same `rate`
/// produces the same convergence regardless of the frame interval.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(current, target, 1.0 - (-rate * dt).exp())
}

/// Rotation about the world vertical (Y) axis by `yaw` radians
pub fn yaw_rotation(yaw: f32) -> Rot3 {
    Rot3::from_axis_angle(&Vec3::y_axis(), yaw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_damp_is_frame_rate_independent() {
        // One big step should land where two half steps do
        let one_step = damp(0.0, 1.0, 5.0, 0.2);

        let half = damp(0.0, 1.0, 5.0, 0.1);
        let two_steps = damp(half, 1.0, 5.0, 0.1);

        assert_relative_eq!(one_step, two_steps, epsilon = 1e-6);
    }

    #[test]
    fn test_damp_converges_towards_target() {
        let mut value = 0.0;
        for _ in 0..200 {
            value = damp(value, 3.0, 10.0, 1.0 / 60.0);
        }
        assert_relative_eq!(value, 3.0, epsilon = 1e-3);
    }

    #[test]
    fn test_yaw_rotation_turns_forward_vector() {
        let forward = Vec3::new(0.0, 0.0, -1.0);
        let turned = yaw_rotation(std::f32::consts::FRAC_PI_2) * forward;

        assert_relative_eq!(turned.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(turned.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(turned.z, 0.0, epsilon = 1e-6);
    }
}
