use glam::Vec3;

/// Camera capability the input layer drives: orientation as yaw/pitch and a position
pub trait CameraRig {
    /// Horizontal rotation in radians, unbounded
    fn yaw(&self) -> f32;

    /// Vertical rotation in radians
    fn pitch(&self) -> f32;

    fn set_yaw(&mut self, yaw: f32);

    fn set_pitch(&mut self, pitch: f32);

    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Pause or resume the host's own look control, if it has one
    fn set_default_look_enabled(&mut self, _enabled: bool) {}
}
