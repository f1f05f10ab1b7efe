use std::collections::{HashMap, HashSet};

use glam::Vec2;
use log::{debug, trace};
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controls::{HandleFeedback, MobileControls};
use super::joystick::JoystickId;
use super::touch::TouchPoint;
use crate::layout::{ControlsLayout, HitTarget};
use crate::traits::{Button, CameraRig, Controller};

/// Contact id used when a left-mouse drag stands in for a finger
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

/// What the adapter did with one event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputResponse {
    /// The event landed on the controls and should not reach other handlers
    pub consumed: bool,
    pub feedback: Option<HandleFeedback>,
}

impl InputResponse {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(feedback: Option<HandleFeedback>) -> Self {
        Self {
            consumed: true,
            feedback,
        }
    }
}

/// Adapter that bridges Winit events to the touch controls and the Controller trait
///
/// Each stick is owned by the contact that started on it until that contact
/// lifts; other contacts starting on an owned stick are swallowed.
#[derive(Debug, Clone)]
pub struct WinitInput {
    layout: ControlsLayout,
    scale_factor: f64,
    owners: HashMap<JoystickId, u64>,
    mouse_as_touch: bool,
    activate_on_touch: bool,
    cursor: Option<Vec2>,
    mouse_down: bool,
    pressed_keys: HashSet<Button>,
}

impl WinitInput {
    pub fn new(layout: ControlsLayout, scale_factor: f64) -> Self {
        Self {
            layout,
            scale_factor,
            owners: HashMap::new(),
            mouse_as_touch: true,
            activate_on_touch: false,
            cursor: None,
            mouse_down: false,
            pressed_keys: HashSet::new(),
        }
    }

    /// Let a left-mouse drag act as a single touch
    pub fn with_mouse_as_touch(mut self, enabled: bool) -> Self {
        self.mouse_as_touch = enabled;
        self
    }

    /// Enable disabled controls as soon as a real finger touches the screen
    pub fn with_activate_on_touch(mut self, enabled: bool) -> Self {
        self.activate_on_touch = enabled;
        self
    }

    pub fn layout(&self) -> &ControlsLayout {
        &self.layout
    }

    /// Apply a new layout (window resize or scale change) to the adapter and the sticks
    pub fn set_layout<C: CameraRig>(
        &mut self,
        layout: ControlsLayout,
        scale_factor: f64,
        controls: &mut MobileControls<C>,
    ) {
        self.layout = layout;
        self.scale_factor = scale_factor;
        for id in [JoystickId::Move, JoystickId::Look] {
            controls.set_geometry(id, layout.stick(id).geometry());
        }
    }

    pub fn owner(&self, joystick: JoystickId) -> Option<u64> {
        self.owners.get(&joystick).copied()
    }

    fn owned_by(&self, contact: u64) -> Option<JoystickId> {
        self.owners
            .iter()
            .find(|(_, owner)| **owner == contact)
            .map(|(joystick, _)| *joystick)
    }

    /// True for events that lift a contact: touch end/cancel or left-mouse release
    ///
    /// Hosts must forward these even when a UI layer consumed them, otherwise a
    /// stick keeps its owner after the finger is gone.
    pub fn is_release(event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Touch(touch) => matches!(touch.phase, TouchPhase::Ended | TouchPhase::Cancelled),
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => true,
            _ => false,
        }
    }

    fn to_logical(&self, x: f64, y: f64) -> Vec2 {
        let scale = self.scale_factor.max(f64::EPSILON);
        Vec2::new((x / scale) as f32, (y / scale) as f32)
    }

    /// Process a Winit WindowEvent, forwarding touch samples into `controls`
    pub fn process_event<C: CameraRig>(
        &mut self,
        event: &WindowEvent,
        controls: &mut MobileControls<C>,
    ) -> InputResponse {
        match event {
            WindowEvent::Touch(touch) => {
                let position = self.to_logical(touch.location.x, touch.location.y);
                match touch.phase {
                    TouchPhase::Started => {
                        if self.activate_on_touch && !controls.is_enabled() {
                            controls.set_enabled(true);
                        }
                        self.touch_started(touch.id, position, controls)
                    }
                    TouchPhase::Moved => self.touch_moved(touch.id, position, controls),
                    TouchPhase::Ended | TouchPhase::Cancelled => self.touch_ended(touch.id, controls),
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if !self.mouse_as_touch {
                    return InputResponse::ignored();
                }
                match (*state, self.cursor) {
                    (ElementState::Pressed, Some(cursor)) => {
                        self.mouse_down = true;
                        self.touch_started(MOUSE_TOUCH_ID, cursor, controls)
                    }
                    (ElementState::Released, _) if self.mouse_down => {
                        self.mouse_down = false;
                        self.touch_ended(MOUSE_TOUCH_ID, controls)
                    }
                    _ => InputResponse::ignored(),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = self.to_logical(position.x, position.y);
                self.cursor = Some(cursor);
                if self.mouse_as_touch && self.mouse_down {
                    self.touch_moved(MOUSE_TOUCH_ID, cursor, controls)
                } else {
                    InputResponse::ignored()
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
                InputResponse::ignored()
            }
            WindowEvent::Focused(false) => {
                self.release_all(controls);
                InputResponse::ignored()
            }
            _ => InputResponse::ignored(),
        }
    }

    /// A contact began at `position` (logical points)
    pub fn touch_started<C: CameraRig>(
        &mut self,
        contact: u64,
        position: Vec2,
        controls: &mut MobileControls<C>,
    ) -> InputResponse {
        // The open settings surface covers the whole screen
        if controls.settings_open() {
            trace!("Contact {} landed on the settings surface", contact);
            return InputResponse::consumed(None);
        }

        match self.layout.hit_test(position) {
            Some(HitTarget::Joystick(joystick)) => {
                if let Some(owner) = self.owner(joystick) {
                    trace!("Contact {} ignored; {:?} stick owned by {}", contact, joystick, owner);
                    return InputResponse::consumed(None);
                }
                let point = TouchPoint { id: contact, position };
                if controls.on_touch_start(joystick, &[point]) {
                    self.owners.insert(joystick, contact);
                    InputResponse::consumed(None)
                } else {
                    InputResponse::ignored()
                }
            }
            Some(HitTarget::SettingsButton) => {
                controls.on_settings_activate();
                InputResponse::consumed(None)
            }
            None => InputResponse::ignored(),
        }
    }

    pub fn touch_moved<C: CameraRig>(
        &mut self,
        contact: u64,
        position: Vec2,
        controls: &mut MobileControls<C>,
    ) -> InputResponse {
        let Some(joystick) = self.owned_by(contact) else {
            return InputResponse::ignored();
        };

        let point = TouchPoint { id: contact, position };
        InputResponse::consumed(controls.on_touch_move(joystick, &[point]))
    }

    pub fn touch_ended<C: CameraRig>(&mut self, contact: u64, controls: &mut MobileControls<C>) -> InputResponse {
        let Some(joystick) = self.owned_by(contact) else {
            return InputResponse::ignored();
        };

        self.owners.remove(&joystick);
        InputResponse::consumed(Some(controls.on_touch_end(joystick)))
    }

    /// Drop every contact and key, e.g. when the window loses focus
    pub fn release_all<C: CameraRig>(&mut self, controls: &mut MobileControls<C>) {
        for (joystick, _) in self.owners.drain() {
            controls.on_touch_end(joystick);
        }
        self.mouse_down = false;
        self.pressed_keys.clear();
        debug!("Input released");
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(button);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Button::KeyW),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Button::KeyA),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Button::KeyS),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Button::KeyD),
            _ => None,
        }
    }
}

impl Controller for WinitInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
