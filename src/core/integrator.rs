use glam::{Vec2, Vec3};

use crate::traits::{CameraRig, MovementSource};

/// Squared length under which a movement vector counts as idle
pub const IDLE_EPSILON: f32 = 1e-5;

/// Current planar movement request (y always 0)
///
/// Screen-horizontal stick travel lands on x, screen-vertical travel on z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementState {
    vector: Vec3,
}

impl MovementState {
    pub fn new() -> Self {
        Self { vector: Vec3::ZERO }
    }

    pub fn vector(&self) -> Vec3 {
        self.vector
    }

    /// Store a stick control vector: x -> x, y (screen down) -> z
    pub fn set_from_control(&mut self, control: Vec2) {
        self.vector = Vec3::new(control.x, 0.0, control.y);
    }

    pub fn clear(&mut self) {
        self.vector = Vec3::ZERO;
    }

    pub fn is_idle(&self) -> bool {
        self.vector.length_squared() < IDLE_EPSILON
    }
}

impl MovementSource for MovementState {
    fn movement_vector(&self) -> Vec3 {
        self.vector
    }
}

/// Rotate a screen-relative (x, z) movement into world space by the camera yaw
pub fn camera_relative(movement: Vec3, yaw: f32) -> Vec2 {
    let (sin, cos) = yaw.sin_cos();
    Vec2::new(
        movement.x * cos + movement.z * sin,
        -movement.x * sin + movement.z * cos,
    )
}

/// Per-frame integration of movement into camera position
#[derive(Debug, Clone, Copy)]
pub struct MovementIntegrator {
    epsilon: f32,
}

impl Default for MovementIntegrator {
    fn default() -> Self {
        Self {
            epsilon: IDLE_EPSILON,
        }
    }
}

impl MovementIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// World-space (x, z) translation for one frame, or `None` when idle
    ///
    /// `move_speed` is in units per second and `delta_ms` in milliseconds.
    pub fn translation(&self, movement: Vec3, yaw: f32, move_speed: f32, delta_ms: f32) -> Option<Vec2> {
        if movement.length_squared() < self.epsilon {
            return None;
        }
        let scale = move_speed * (delta_ms / 1000.0);
        Some(camera_relative(movement, yaw) * scale)
    }

    /// Advance the camera by one frame; returns true if the position changed
    pub fn apply<C: CameraRig + ?Sized>(
        &self,
        camera: &mut C,
        movement: Vec3,
        move_speed: f32,
        delta_ms: f32,
    ) -> bool {
        let Some(step) = self.translation(movement, camera.yaw(), move_speed, delta_ms) else {
            return false;
        };
        let mut position = camera.position();
        position.x += step.x;
        position.z += step.y;
        camera.set_position(position);
        true
    }
}
