// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::core::joystick::ControlMapping;
use crate::core::sensitivity::SensitivityConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "touch-rig")]
#[command(about = "Dual virtual-joystick camera controls", long_about = None)]
pub struct Cli {
    /// Initial move speed in units per second (slider range 0.1-5)
    #[arg(long = "move-speed")]
    pub move_speed: Option<f32>,

    /// Initial look speed (slider range 0.01-0.3)
    #[arg(long = "look-speed")]
    pub look_speed: Option<f32>,

    /// JSON file with initial `move_speed` / `look_speed`
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Start with the controls disabled until a real touch arrives
    #[arg(long = "touch-only", default_value = "false")]
    pub touch_only: bool,

    /// Don't let left-mouse drags emulate a touch
    #[arg(long = "no-mouse-touch", default_value = "false")]
    pub no_mouse_touch: bool,

    /// Clamp the move vector to the stick radius instead of the soft mapping
    #[arg(long = "clamp-move", default_value = "false")]
    pub clamp_move: bool,

    /// Hide the camera readout
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Defaults, then the config file, then explicit flags
    pub fn sensitivity(&self) -> Result<SensitivityConfig> {
        let config = match &self.config {
            Some(path) => SensitivityConfig::load(path)?,
            None => SensitivityConfig::default(),
        };
        Ok(self.apply_overrides(config))
    }

    /// Explicit `--move-speed` / `--look-speed` flags win over `config`
    pub fn apply_overrides(&self, mut config: SensitivityConfig) -> SensitivityConfig {
        if let Some(value) = self.move_speed {
            config.set_move_speed(value);
        }
        if let Some(value) = self.look_speed {
            config.set_look_speed(value);
        }
        config
    }

    pub fn mapping(&self) -> ControlMapping {
        if self.clamp_move {
            ControlMapping::Clamped
        } else {
            ControlMapping::Soft
        }
    }
}
