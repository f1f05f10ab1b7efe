use glam::Vec2;

/// A single contact point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

/// Active contact on one joystick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSession {
    /// Contact that owns the joystick until it lifts
    pub touch_id: u64,
    /// Joystick center, not the initial touch position
    pub origin: Vec2,
    pub current: Vec2,
}

impl TouchSession {
    /// Drag displacement from the joystick center
    pub fn displacement(&self) -> Vec2 {
        self.current - self.origin
    }
}

/// Tracks at most one contact relative to a fixed origin
///
/// Further contacts landing on the same joystick while a session is live are
/// ignored; only the owning contact moves the session.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    session: Option<TouchSession>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Open a session owned by the first contact in `points`
    ///
    /// Records no drag. Returns false when a session is already live or the
    /// contact list is empty.
    pub fn start(&mut self, origin: Vec2, points: &[TouchPoint]) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(first) = points.first() else {
            return false;
        };

        self.session = Some(TouchSession {
            touch_id: first.id,
            origin,
            current: origin,
        });
        true
    }

    /// Update from a move sample, returning the displacement from `origin`
    ///
    /// A move without a prior start adopts the first contact. A move that
    /// doesn't carry the owning contact is a no-op.
    pub fn update(&mut self, origin: Vec2, points: &[TouchPoint]) -> Option<Vec2> {
        match &mut self.session {
            Some(session) => {
                let point = points.iter().find(|p| p.id == session.touch_id)?;
                session.origin = origin;
                session.current = point.position;
                Some(session.displacement())
            }
            None => {
                let first = points.first()?;
                let session = TouchSession {
                    touch_id: first.id,
                    origin,
                    current: first.position,
                };
                self.session = Some(session);
                Some(session.displacement())
            }
        }
    }

    /// Close the session, if any
    pub fn end(&mut self) -> Option<TouchSession> {
        self.session.take()
    }
}
