use glam::Vec2;

use crate::core::joystick::{JoystickGeometry, JoystickId};

pub const JOYSTICK_SIZE: f32 = 100.0;
pub const SETTINGS_BUTTON_SIZE: f32 = 60.0;
pub const EDGE_MARGIN: f32 = 20.0;

/// Window dimensions in logical points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowDimensions {
    pub width: f32,
    pub height: f32,
}

impl WindowDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical size of a physical surface at the given scale factor
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = scale_factor.max(f64::EPSILON);
        Self {
            width: (width as f64 / scale) as f32,
            height: (height as f64 / scale) as f32,
        }
    }
}

/// Axis-aligned screen rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }

    pub fn geometry(&self) -> JoystickGeometry {
        JoystickGeometry::from_bounds(self.left, self.top, self.width, self.height)
    }
}

/// What a screen point landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Joystick(JoystickId),
    SettingsButton,
}

/// Placement of the on-screen controls
///
/// Move stick bottom-left, look stick bottom-right, settings button top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsLayout {
    pub move_stick: ScreenRect,
    pub look_stick: ScreenRect,
    pub settings_button: ScreenRect,
}

impl ControlsLayout {
    pub fn for_window(window: WindowDimensions) -> Self {
        let stick_top = window.height - EDGE_MARGIN - JOYSTICK_SIZE;
        Self {
            move_stick: ScreenRect::new(EDGE_MARGIN, stick_top, JOYSTICK_SIZE, JOYSTICK_SIZE),
            look_stick: ScreenRect::new(
                window.width - EDGE_MARGIN - JOYSTICK_SIZE,
                stick_top,
                JOYSTICK_SIZE,
                JOYSTICK_SIZE,
            ),
            settings_button: ScreenRect::new(
                window.width - EDGE_MARGIN - SETTINGS_BUTTON_SIZE,
                EDGE_MARGIN,
                SETTINGS_BUTTON_SIZE,
                SETTINGS_BUTTON_SIZE,
            ),
        }
    }

    pub fn stick(&self, id: JoystickId) -> ScreenRect {
        match id {
            JoystickId::Move => self.move_stick,
            JoystickId::Look => self.look_stick,
        }
    }

    /// Sticks accept contacts anywhere in their bounding box, like the element they stand for
    pub fn hit_test(&self, point: Vec2) -> Option<HitTarget> {
        if self.settings_button.contains(point) {
            Some(HitTarget::SettingsButton)
        } else if self.move_stick.contains(point) {
            Some(HitTarget::Joystick(JoystickId::Move))
        } else if self.look_stick.contains(point) {
            Some(HitTarget::Joystick(JoystickId::Look))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_from_physical() {
        let dims = WindowDimensions::from_physical(1600, 1200, 2.0);
        assert_eq!(dims, WindowDimensions::new(800.0, 600.0));
    }

    #[test]
    fn test_layout_corners() {
        let layout = ControlsLayout::for_window(WindowDimensions::new(800.0, 600.0));

        assert_eq!(layout.move_stick, ScreenRect::new(20.0, 480.0, 100.0, 100.0));
        assert_eq!(layout.look_stick, ScreenRect::new(680.0, 480.0, 100.0, 100.0));
        assert_eq!(layout.settings_button, ScreenRect::new(720.0, 20.0, 60.0, 60.0));
        assert_eq!(layout.move_stick.geometry().radius, 50.0);
    }

    #[test]
    fn test_hit_test() {
        let layout = ControlsLayout::for_window(WindowDimensions::new(800.0, 600.0));

        assert_eq!(
            layout.hit_test(Vec2::new(30.0, 570.0)),
            Some(HitTarget::Joystick(JoystickId::Move))
        );
        assert_eq!(
            layout.hit_test(Vec2::new(730.0, 530.0)),
            Some(HitTarget::Joystick(JoystickId::Look))
        );
        assert_eq!(layout.hit_test(Vec2::new(750.0, 50.0)), Some(HitTarget::SettingsButton));
        assert_eq!(layout.hit_test(Vec2::new(400.0, 300.0)), None);
    }
}
