use glam::Vec2;

use super::touch::{TouchPoint, TouchTracker};

/// Which on-screen stick a sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickId {
    Move,
    Look,
}

/// How displacement becomes a control vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMapping {
    /// Unclamped `delta / radius`; only the visual handle is limited to the radius
    #[default]
    Soft,
    /// Control vector follows the clamped handle, so its length never exceeds 1
    Clamped,
}

/// Screen-space placement of a circular stick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickGeometry {
    pub center: Vec2,
    /// Half the visual width; maximum handle travel
    pub radius: f32,
}

impl JoystickGeometry {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Geometry of a bounding box given by its top-left corner and size
    pub fn from_bounds(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(left + width / 2.0, top + height / 2.0),
            radius: width / 2.0,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Result of mapping one displacement sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickSample {
    /// Raw finger displacement in pixels
    pub displacement: Vec2,
    pub angle: f32,
    /// Handle travel, `min(radius, |displacement|)`
    pub distance: f32,
    /// Visual handle translation, never farther than the radius
    pub handle_offset: Vec2,
    /// Control vector in stick units
    pub control: Vec2,
}

/// Map a displacement to handle feedback and a control vector
pub fn map_displacement(delta: Vec2, radius: f32, mapping: ControlMapping) -> JoystickSample {
    let angle = delta.y.atan2(delta.x);
    let distance = radius.min(delta.length());
    let handle_offset = Vec2::new(angle.cos() * distance, angle.sin() * distance);

    let control = if radius <= 0.0 {
        Vec2::ZERO
    } else {
        match mapping {
            ControlMapping::Soft => delta / radius,
            ControlMapping::Clamped => handle_offset / radius,
        }
    };

    JoystickSample {
        displacement: delta,
        angle,
        distance,
        handle_offset,
        control,
    }
}

/// One stick: geometry, its tracked contact, and the mapping policy
#[derive(Debug, Clone)]
pub struct Joystick {
    id: JoystickId,
    geometry: JoystickGeometry,
    mapping: ControlMapping,
    tracker: TouchTracker,
    handle_offset: Vec2,
}

impl Joystick {
    pub fn new(id: JoystickId, geometry: JoystickGeometry) -> Self {
        Self {
            id,
            geometry,
            mapping: ControlMapping::default(),
            tracker: TouchTracker::new(),
            handle_offset: Vec2::ZERO,
        }
    }

    pub fn with_mapping(mut self, mapping: ControlMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn id(&self) -> JoystickId {
        self.id
    }

    pub fn geometry(&self) -> JoystickGeometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: JoystickGeometry) {
        self.geometry = geometry;
    }

    pub fn mapping(&self) -> ControlMapping {
        self.mapping
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    /// Last visual handle translation; zero while released
    pub fn handle_offset(&self) -> Vec2 {
        self.handle_offset
    }

    pub fn begin(&mut self, points: &[TouchPoint]) -> bool {
        self.tracker.start(self.geometry.center, points)
    }

    /// Track a move sample and map it; `None` when no owning contact is present
    pub fn sample(&mut self, points: &[TouchPoint]) -> Option<JoystickSample> {
        let delta = self.tracker.update(self.geometry.center, points)?;
        let sample = map_displacement(delta, self.geometry.radius, self.mapping);
        self.handle_offset = sample.handle_offset;
        Some(sample)
    }

    /// End the session and spring the handle back; true if a session was live
    pub fn release(&mut self) -> bool {
        self.handle_offset = Vec2::ZERO;
        self.tracker.end().is_some()
    }
}
