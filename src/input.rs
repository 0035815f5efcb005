use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::traits::ActionSource;

/// Keyboard key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Shift,
    Ctrl,
    Alt,
    Tab,
    Escape,
}

/// Pointer state the host is asked to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    /// Cursor shown, motion not consumed
    #[default]
    Visible,
    /// Cursor hidden and locked, relative motion drives look
    Captured,
}

/// Discrete input delivered by the host before the frame update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, pressed: bool },
    /// Relative pointer motion in device units
    PointerMotion { delta: Vec2 },
}

impl InputEvent {
    pub fn key(key: Key, pressed: bool) -> Self {
        Self::Key { key, pressed }
    }

    pub fn motion(dx: f32, dy: f32) -> Self {
        Self::PointerMotion {
            delta: Vec2::new(dx, dy),
        }
    }
}

/// 2D value synthesized from four named actions
///
/// `x = positive_x - negative_x`, `y = positive_y - negative_y`, with the
/// resulting length capped at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeAxis<'a> {
    pub negative_x: &'a str,
    pub positive_x: &'a str,
    pub negative_y: &'a str,
    pub positive_y: &'a str,
}

impl<'a> CompositeAxis<'a> {
    pub fn new(
        negative_x: &'a str,
        positive_x: &'a str,
        negative_y: &'a str,
        positive_y: &'a str,
    ) -> Self {
        Self {
            negative_x,
            positive_x,
            negative_y,
            positive_y,
        }
    }

    pub fn actions(&self) -> [&'a str; 4] {
        [
            self.negative_x,
            self.positive_x,
            self.negative_y,
            self.positive_y,
        ]
    }

    /// True if every action is known to the source
    pub fn is_bound<S: ActionSource + ?Sized>(&self, source: &S) -> bool {
        self.actions().iter().all(|name| source.has_action(name))
    }

    pub fn read<S: ActionSource + ?Sized>(&self, source: &S) -> Vec2 {
        let strength = |name: &str| {
            let value = source.action_strength(name);
            if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                0.0
            }
        };

        let raw = Vec2::new(
            strength(self.positive_x) - strength(self.negative_x),
            strength(self.positive_y) - strength(self.negative_y),
        );
        raw.clamp_length_max(1.0)
    }
}
