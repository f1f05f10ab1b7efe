use glam::{Vec2, Vec3};
use log::{debug, info, trace, warn};

use super::integrator::{MovementIntegrator, MovementState};
use super::joystick::{ControlMapping, Joystick, JoystickGeometry, JoystickId};
use super::look::LookController;
use super::sensitivity::{SensitivityConfig, SensitivityParam};
use super::touch::TouchPoint;
use crate::traits::{CameraRig, MovementSource};

/// Visual update for the presentation layer: where to draw a stick's handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleFeedback {
    pub joystick: JoystickId,
    /// Translation from the stick center; zero means back at rest
    pub offset: Vec2,
}

impl HandleFeedback {
    pub fn reset(joystick: JoystickId) -> Self {
        Self {
            joystick,
            offset: Vec2::ZERO,
        }
    }
}

/// Dual virtual-joystick input layer driving an injected camera
///
/// The presentation layer calls the `on_*` methods; nothing here registers
/// listeners or touches a window. With no camera attached, sticks still
/// track and report feedback but no rotation or translation happens.
#[derive(Debug)]
pub struct MobileControls<C> {
    move_stick: Joystick,
    look_stick: Joystick,
    movement: MovementState,
    sensitivity: SensitivityConfig,
    integrator: MovementIntegrator,
    look: LookController,
    camera: Option<C>,
    enabled: bool,
    settings_open: bool,
}

impl<C: CameraRig> MobileControls<C> {
    pub fn new(
        move_geometry: JoystickGeometry,
        look_geometry: JoystickGeometry,
        sensitivity: SensitivityConfig,
        camera: Option<C>,
    ) -> Self {
        let mut controls = Self {
            move_stick: Joystick::new(JoystickId::Move, move_geometry),
            look_stick: Joystick::new(JoystickId::Look, look_geometry),
            movement: MovementState::new(),
            sensitivity,
            integrator: MovementIntegrator::new(),
            look: LookController::new(),
            camera: None,
            enabled: true,
            settings_open: false,
        };

        match camera {
            Some(camera) => {
                controls.attach_camera(camera);
            }
            None => warn!("No camera available; look and move integration disabled until one is attached"),
        }
        controls
    }

    /// Select how the move stick turns displacement into a control vector
    pub fn with_mapping(mut self, mapping: ControlMapping) -> Self {
        self.move_stick = self.move_stick.with_mapping(mapping);
        self
    }

    /// Attach a camera, pausing its default look control; returns the previous one
    pub fn attach_camera(&mut self, mut camera: C) -> Option<C> {
        let previous = self.detach_camera();
        camera.set_default_look_enabled(false);
        self.camera = Some(camera);
        info!("Camera attached; default look control paused");
        previous
    }

    /// Detach the camera, resuming its default look control
    pub fn detach_camera(&mut self) -> Option<C> {
        let mut camera = self.camera.take()?;
        camera.set_default_look_enabled(true);
        info!("Camera detached; default look control resumed");
        Some(camera)
    }

    pub fn camera(&self) -> Option<&C> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut C> {
        self.camera.as_mut()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the layer; disabling releases both sticks
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.move_stick.release();
            self.look_stick.release();
            self.movement.clear();
        }
        info!("Touch controls {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn joystick(&self, id: JoystickId) -> &Joystick {
        match id {
            JoystickId::Move => &self.move_stick,
            JoystickId::Look => &self.look_stick,
        }
    }

    fn joystick_mut(&mut self, id: JoystickId) -> &mut Joystick {
        match id {
            JoystickId::Move => &mut self.move_stick,
            JoystickId::Look => &mut self.look_stick,
        }
    }

    /// Move a stick, e.g. after a window resize
    pub fn set_geometry(&mut self, id: JoystickId, geometry: JoystickGeometry) {
        self.joystick_mut(id).set_geometry(geometry);
    }

    /// Current movement request from the move stick
    pub fn movement(&self) -> Vec3 {
        self.movement.vector()
    }

    pub fn sensitivity(&self) -> &SensitivityConfig {
        &self.sensitivity
    }

    pub fn sensitivity_mut(&mut self) -> &mut SensitivityConfig {
        &mut self.sensitivity
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Contact landed on a stick; true means the host should suppress its default handling
    pub fn on_touch_start(&mut self, id: JoystickId, points: &[TouchPoint]) -> bool {
        if !self.enabled {
            return false;
        }
        if self.joystick_mut(id).begin(points) {
            debug!("{:?} stick session started", id);
        } else {
            trace!("{:?} stick ignored extra contact", id);
        }
        true
    }

    /// Move sample for a stick; `None` when disabled or the owning contact is absent
    pub fn on_touch_move(&mut self, id: JoystickId, points: &[TouchPoint]) -> Option<HandleFeedback> {
        if !self.enabled {
            return None;
        }
        let sample = self.joystick_mut(id).sample(points)?;

        match id {
            JoystickId::Move => self.movement.set_from_control(sample.control),
            JoystickId::Look => {
                let look_speed = self.sensitivity.look_speed();
                if let Some(camera) = self.camera.as_mut() {
                    self.look.apply(camera, sample.displacement, look_speed);
                }
            }
        }

        Some(HandleFeedback {
            joystick: id,
            offset: sample.handle_offset,
        })
    }

    /// Contact lifted or cancelled; always zeroes the stick and its handle
    pub fn on_touch_end(&mut self, id: JoystickId) -> HandleFeedback {
        if self.joystick_mut(id).release() {
            debug!("{:?} stick session ended", id);
        }
        if id == JoystickId::Move {
            self.movement.clear();
        }
        HandleFeedback::reset(id)
    }

    /// Per-frame update from the move stick alone; true if the camera moved
    pub fn on_tick(&mut self, delta_ms: f32) -> bool {
        let movement = self.movement;
        self.on_tick_with(delta_ms, &movement)
    }

    /// Per-frame update; the move stick wins while it is deflected, else `fallback` drives
    pub fn on_tick_with<S: MovementSource + ?Sized>(&mut self, delta_ms: f32, fallback: &S) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(camera) = self.camera.as_mut() else {
            return false;
        };
        let movement = if self.movement.is_idle() {
            fallback.movement_vector()
        } else {
            self.movement.vector()
        };
        self.integrator
            .apply(camera, movement, self.sensitivity.move_speed(), delta_ms)
    }

    pub fn on_settings_activate(&mut self) {
        if !self.settings_open {
            debug!("Settings opened");
        }
        self.settings_open = true;
    }

    pub fn on_settings_close(&mut self) {
        if self.settings_open {
            debug!("Settings closed");
        }
        self.settings_open = false;
    }

    pub fn on_slider_change(&mut self, param: SensitivityParam, value: f32) {
        self.sensitivity.set(param, value);
    }
}
