//! Engine-independent input core: touch tracking, stick mapping,
//! movement integration, look control and sensitivity.

pub mod clock;
pub mod controls;
pub mod input_adapter;
pub mod integrator;
pub mod joystick;
pub mod look;
pub mod sensitivity;
pub mod touch;

pub use controls::{HandleFeedback, MobileControls};
pub use joystick::{ControlMapping, JoystickGeometry, JoystickId};
pub use sensitivity::{SensitivityConfig, SensitivityParam};
pub use touch::TouchPoint;
