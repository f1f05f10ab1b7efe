use glam::{Vec2, Vec3};
use touch_rig::core::integrator::{camera_relative, MovementIntegrator};
use touch_rig::core::joystick::{map_displacement, ControlMapping};
use touch_rig::core::look::{LookController, PITCH_LIMIT};

fn displacements() -> Vec<Vec2> {
    let mut out = Vec::new();
    for step in 0..24 {
        let angle = step as f32 / 24.0 * std::f32::consts::TAU;
        for length in [0.0, 10.0, 49.0, 50.0, 51.0, 120.0, 400.0] {
            out.push(Vec2::new(angle.cos(), angle.sin()) * length);
        }
    }
    out
}

#[cfg(test)]
mod mapper_tests {
    use super::*;

    #[test]
    fn test_handle_never_leaves_radius() {
        let radius = 50.0;
        for delta in displacements() {
            let sample = map_displacement(delta, radius, ControlMapping::Soft);
            assert!(
                sample.handle_offset.length() <= radius + 1e-3,
                "handle escaped for {:?}",
                delta
            );
            assert!(sample.distance <= radius);
        }
    }

    #[test]
    fn test_soft_control_is_unclamped() {
        let radius = 50.0;
        for delta in displacements() {
            let sample = map_displacement(delta, radius, ControlMapping::Soft);
            assert!((sample.control - delta / radius).length() < 1e-5);

            if delta.length() > radius {
                assert!(sample.control.length() > 1.0);
                assert!(sample.control.length() * radius > sample.handle_offset.length() + 1e-3);
            }
        }
    }

    #[test]
    fn test_clamped_control_follows_handle() {
        let radius = 50.0;
        for delta in displacements() {
            let sample = map_displacement(delta, radius, ControlMapping::Clamped);
            assert!(sample.control.length() <= 1.0 + 1e-5);
            assert!((sample.control * radius - sample.handle_offset).length() < 1e-3);
        }
    }

    #[test]
    fn test_handle_points_along_drag() {
        for delta in displacements() {
            if delta.length() < 1.0 {
                continue;
            }
            let sample = map_displacement(delta, 50.0, ControlMapping::Soft);
            let cos = sample.handle_offset.normalize().dot(delta.normalize());
            assert!((cos - 1.0).abs() < 1e-4);
        }
    }
}

#[cfg(test)]
mod integrator_tests {
    use super::*;

    #[test]
    fn test_rotation_preserves_length() {
        let movement = Vec3::new(0.6, 0.0, -0.8);
        for step in 0..16 {
            let yaw = step as f32 * 0.7 - 4.0;
            let world = camera_relative(movement, yaw);
            assert!((world.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_pure_x_at_yaw_zero() {
        let step = MovementIntegrator::new()
            .translation(Vec3::X, 0.0, 1.0, 16.0)
            .unwrap();
        assert!((step.x - 0.016).abs() < 1e-7);
        assert_eq!(step.y, 0.0);
    }

    #[test]
    fn test_pure_z_at_quarter_turn() {
        let step = MovementIntegrator::new()
            .translation(Vec3::X, std::f32::consts::FRAC_PI_2, 1.0, 1000.0)
            .unwrap();
        assert!(step.x.abs() < 1e-6);
        assert!((step.y.abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_epsilon_boundary() {
        let integrator = MovementIntegrator::new();
        // length_squared 4e-6 < 1e-5
        assert!(integrator.translation(Vec3::new(0.002, 0.0, 0.0), 0.0, 1.0, 16.0).is_none());
        // length_squared 1e-4 >= 1e-5
        assert!(integrator.translation(Vec3::new(0.01, 0.0, 0.0), 0.0, 1.0, 16.0).is_some());
    }
}

#[cfg(test)]
mod look_tests {
    use super::*;

    #[test]
    fn test_pitch_clamped_for_any_cumulative_input() {
        let look = LookController::new();
        let (mut yaw, mut pitch) = (0.0f32, 0.0f32);
        for i in 0..200 {
            let dy = if i % 3 == 0 { 900.0 } else { -350.0 };
            (yaw, pitch) = look.rotate(yaw, pitch, Vec2::new(75.0, dy), 0.3);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&pitch));
        }
        assert!(yaw < -std::f32::consts::TAU);
    }
}
