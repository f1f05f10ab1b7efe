pub mod camera;
pub mod cli;
pub mod core;
pub mod layout;
pub mod overlay;
pub mod renderer;
pub mod traits;

pub use camera::Camera;
pub use crate::core::{HandleFeedback, JoystickId, MobileControls, SensitivityConfig, TouchPoint};
pub use traits::CameraRig;
