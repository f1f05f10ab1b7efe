use glam::Vec3;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

/// Producer of a planar movement vector (x = strafe, z = screen-down, y = 0)
///
/// Touch sticks and keyboards both feed the same movement integrator through this.
pub trait MovementSource {
    fn movement_vector(&self) -> Vec3;
}

impl MovementSource for Vec3 {
    fn movement_vector(&self) -> Vec3 {
        *self
    }
}
