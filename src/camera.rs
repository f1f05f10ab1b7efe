use glam::Vec3;

use crate::traits::{Button, CameraRig, Controller, MovementSource};

pub const EYE_HEIGHT: f32 = 1.6;

/// Free-flying first-person camera; yaw 0 looks down -Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Whether the host's own look control (mouse look) may rotate the camera
    pub default_look_enabled: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, EYE_HEIGHT, 0.0), 0.0, 0.0)
    }
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            default_look_enabled: true,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }
}

impl CameraRig for Camera {
    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_default_look_enabled(&mut self, enabled: bool) {
        self.default_look_enabled = enabled;
    }
}

/// WASD read through a `Controller`, in the same frame as the move stick
pub struct KeyboardMovement<'a, C: Controller + ?Sized> {
    controller: &'a C,
}

impl<'a, C: Controller + ?Sized> KeyboardMovement<'a, C> {
    pub fn new(controller: &'a C) -> Self {
        Self { controller }
    }

    fn axis(&self, positive: Button, negative: Button) -> f32 {
        match (self.controller.is_down(positive), self.controller.is_down(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl<C: Controller + ?Sized> MovementSource for KeyboardMovement<'_, C> {
    fn movement_vector(&self) -> Vec3 {
        // S pulls toward +Z like dragging the stick down
        let direction = Vec3::new(
            self.axis(Button::KeyD, Button::KeyA),
            0.0,
            self.axis(Button::KeyS, Button::KeyW),
        );
        direction.normalize_or_zero()
    }
}
