use glam::Vec2;

use crate::traits::CameraRig;

/// Fixed scale-down applied to every look sample on top of the look speed
pub const LOOK_SCALE: f32 = 0.01;

/// Pitch bound in radians; yaw is never bounded
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Immediate (not velocity-based) look control from stick displacement
#[derive(Debug, Clone, Copy, Default)]
pub struct LookController;

impl LookController {
    pub fn new() -> Self {
        Self
    }

    /// Yaw/pitch after one look sample of `displacement` pixels
    pub fn rotate(&self, yaw: f32, pitch: f32, displacement: Vec2, look_speed: f32) -> (f32, f32) {
        let yaw = yaw - displacement.x * look_speed * LOOK_SCALE;
        let pitch = (pitch - displacement.y * look_speed * LOOK_SCALE).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        (yaw, pitch)
    }

    pub fn apply<C: CameraRig + ?Sized>(&self, camera: &mut C, displacement: Vec2, look_speed: f32) {
        let (yaw, pitch) = self.rotate(camera.yaw(), camera.pitch(), displacement, look_speed);
        camera.set_yaw(yaw);
        camera.set_pitch(pitch);
    }
}
