//! Camera configuration, fixed at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::{CompositeAxis, Key};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
    #[error("`{field}` must not be negative")]
    Negative { field: &'static str },
    #[error("gamepad action `{field}` has an empty name")]
    EmptyAction { field: &'static str },
}

/// Free-look camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeLookConfig {
    /// Movement speed in m/s, also the cap on the combined per-frame vector
    pub max_movement_speed: f32,
    /// Gamepad look rate in rad/s
    pub max_rotation_speed: f32,
    pub mouse: MouseConfig,
    pub keyboard: KeyboardConfig,
    pub gamepad: GamepadConfig,
}

impl Default for FreeLookConfig {
    fn default() -> Self {
        Self {
            max_movement_speed: 1.0,
            max_rotation_speed: 1.0,
            mouse: MouseConfig::default(),
            keyboard: KeyboardConfig::default(),
            gamepad: GamepadConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    pub enabled: bool,
    pub sensitivity: f32,
    /// Held to capture the pointer, released to free it
    pub capture_key: Key,
    /// When set, motion only counts while this key is also held
    pub look_key: Option<Key>,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitivity: 0.5,
            capture_key: Key::Ctrl,
            look_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub enabled: bool,
    pub forward: Key,
    pub backward: Key,
    pub left: Key,
    pub right: Key,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            forward: Key::KeyW,
            backward: Key::KeyS,
            left: Key::KeyA,
            right: Key::KeyD,
        }
    }
}

/// Named actions the gamepad axes are built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadConfig {
    /// Requested; the camera also requires all eight actions to be bound
    pub enabled: bool,
    pub move_left: String,
    pub move_right: String,
    pub move_forward: String,
    pub move_backward: String,
    pub look_left: String,
    pub look_right: String,
    pub look_up: String,
    pub look_down: String,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            move_left: "move_axis_left".into(),
            move_right: "move_axis_right".into(),
            move_forward: "move_axis_forward".into(),
            move_backward: "move_axis_backward".into(),
            look_left: "look_axis_left".into(),
            look_right: "look_axis_right".into(),
            look_up: "look_axis_up".into(),
            look_down: "look_axis_down".into(),
        }
    }
}

impl GamepadConfig {
    /// x: left -> right, y: forward -> backward
    pub fn move_axis(&self) -> CompositeAxis<'_> {
        CompositeAxis::new(
            &self.move_left,
            &self.move_right,
            &self.move_forward,
            &self.move_backward,
        )
    }

    /// x: right -> left, y: down -> up
    pub fn look_axis(&self) -> CompositeAxis<'_> {
        CompositeAxis::new(
            &self.look_right,
            &self.look_left,
            &self.look_down,
            &self.look_up,
        )
    }

    pub fn actions(&self) -> [(&'static str, &str); 8] {
        [
            ("move_left", self.move_left.as_str()),
            ("move_right", self.move_right.as_str()),
            ("move_forward", self.move_forward.as_str()),
            ("move_backward", self.move_backward.as_str()),
            ("look_left", self.look_left.as_str()),
            ("look_right", self.look_right.as_str()),
            ("look_up", self.look_up.as_str()),
            ("look_down", self.look_down.as_str()),
        ]
    }
}

impl FreeLookConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_speed("max_movement_speed", self.max_movement_speed)?;
        check_speed("max_rotation_speed", self.max_rotation_speed)?;

        // Negative sensitivity inverts look, so only finiteness matters here.
        if !self.mouse.sensitivity.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "mouse.sensitivity",
            });
        }

        for (field, name) in self.gamepad.actions() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyAction { field });
            }
        }

        Ok(())
    }
}

fn check_speed(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NonFinite { field })
    } else if value < 0.0 {
        Err(ConfigError::Negative { field })
    } else {
        Ok(())
    }
}
