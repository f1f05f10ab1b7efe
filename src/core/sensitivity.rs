use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MOVE_SPEED: f32 = 1.0;
pub const DEFAULT_LOOK_SPEED: f32 = 0.1;

/// Named tunable exposed to the settings surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitivityParam {
    /// Linear scale on per-frame translation, units per second
    MoveSpeed,
    /// Linear scale on per-sample rotation
    LookSpeed,
}

impl SensitivityParam {
    pub const ALL: [SensitivityParam; 2] = [SensitivityParam::MoveSpeed, SensitivityParam::LookSpeed];

    pub fn label(self) -> &'static str {
        match self {
            SensitivityParam::MoveSpeed => "Move Speed",
            SensitivityParam::LookSpeed => "Look Speed",
        }
    }

    /// Bounds the settings slider imposes
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            SensitivityParam::MoveSpeed => 0.1..=5.0,
            SensitivityParam::LookSpeed => 0.01..=0.3,
        }
    }

    pub fn step(self) -> f32 {
        match self {
            SensitivityParam::MoveSpeed => 0.1,
            SensitivityParam::LookSpeed => 0.01,
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            SensitivityParam::MoveSpeed => DEFAULT_MOVE_SPEED,
            SensitivityParam::LookSpeed => DEFAULT_LOOK_SPEED,
        }
    }

    /// Live value text shown next to a slider
    pub fn display(value: f32) -> String {
        format!("{:.2}", value)
    }
}

/// Runtime move/look sensitivity
///
/// Values are read on every use, never cached by consumers, so a write takes
/// effect on the next sample or tick. Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    move_speed: f32,
    look_speed: f32,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            look_speed: DEFAULT_LOOK_SPEED,
        }
    }
}

impl SensitivityConfig {
    pub fn new(move_speed: f32, look_speed: f32) -> Self {
        Self {
            move_speed,
            look_speed,
        }
    }

    /// Load initial values from a JSON file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sensitivity config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse sensitivity config {}", path.display()))
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn look_speed(&self) -> f32 {
        self.look_speed
    }

    pub fn set_move_speed(&mut self, value: f32) {
        self.set(SensitivityParam::MoveSpeed, value);
    }

    pub fn set_look_speed(&mut self, value: f32) {
        self.set(SensitivityParam::LookSpeed, value);
    }

    pub fn get(&self, param: SensitivityParam) -> f32 {
        match param {
            SensitivityParam::MoveSpeed => self.move_speed,
            SensitivityParam::LookSpeed => self.look_speed,
        }
    }

    pub fn set(&mut self, param: SensitivityParam, value: f32) {
        let slot = match param {
            SensitivityParam::MoveSpeed => &mut self.move_speed,
            SensitivityParam::LookSpeed => &mut self.look_speed,
        };
        if *slot != value {
            info!("{} set to {}", param.label(), SensitivityParam::display(value));
        }
        *slot = value;
    }

    /// Restore defaults, as on reinitialization
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SensitivityConfig::default();
        assert_eq!(config.move_speed(), 1.0);
        assert_eq!(config.look_speed(), 0.1);
    }

    #[test]
    fn setter_is_visible_to_next_read() {
        let mut config = SensitivityConfig::default();
        config.set(SensitivityParam::MoveSpeed, 2.5);
        assert_eq!(config.get(SensitivityParam::MoveSpeed), 2.5);

        config.set_look_speed(0.25);
        assert_eq!(config.look_speed(), 0.25);

        config.reset();
        assert_eq!(config, SensitivityConfig::default());
    }

    #[test]
    fn defaults_sit_inside_slider_ranges() {
        for param in SensitivityParam::ALL {
            assert!(param.range().contains(&param.default_value()));
        }
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(SensitivityParam::display(0.1), "0.10");
        assert_eq!(SensitivityParam::display(3.0), "3.00");
    }

    #[test]
    fn json_fields_are_optional() {
        let config: SensitivityConfig = serde_json::from_str(r#"{ "look_speed": 0.2 }"#).unwrap();
        assert_eq!(config.move_speed(), 1.0);
        assert_eq!(config.look_speed(), 0.2);
    }
}
