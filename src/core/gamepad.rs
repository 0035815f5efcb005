use std::collections::HashMap;

use gilrs::{Axis, Gilrs};

use crate::config::GamepadConfig;
use crate::traits::ActionSource;

/// Stick travel ignored around the center
pub const DEFAULT_DEADZONE: f32 = 0.2;

/// One half of a stick axis mapped to an action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBinding {
    pub axis: Axis,
    /// +1.0 for the positive half, -1.0 for the negative half
    pub sign: f32,
}

impl AxisBinding {
    pub const fn positive(axis: Axis) -> Self {
        Self { axis, sign: 1.0 }
    }

    pub const fn negative(axis: Axis) -> Self {
        Self { axis, sign: -1.0 }
    }

    /// Strength in `0.0..=1.0` for a raw axis value, rescaled past the deadzone
    pub fn strength(&self, value: f32, deadzone: f32) -> f32 {
        let directed = (value * self.sign).clamp(0.0, 1.0);
        if directed <= deadzone {
            0.0
        } else {
            (directed - deadzone) / (1.0 - deadzone)
        }
    }
}

/// Left stick moves, right stick looks
pub fn default_bindings(names: &GamepadConfig) -> HashMap<String, AxisBinding> {
    HashMap::from([
        (names.move_left.clone(), AxisBinding::negative(Axis::LeftStickX)),
        (names.move_right.clone(), AxisBinding::positive(Axis::LeftStickX)),
        (names.move_forward.clone(), AxisBinding::positive(Axis::LeftStickY)),
        (names.move_backward.clone(), AxisBinding::negative(Axis::LeftStickY)),
        (names.look_left.clone(), AxisBinding::negative(Axis::RightStickX)),
        (names.look_right.clone(), AxisBinding::positive(Axis::RightStickX)),
        (names.look_up.clone(), AxisBinding::positive(Axis::RightStickY)),
        (names.look_down.clone(), AxisBinding::negative(Axis::RightStickY)),
    ])
}

/// Gamepad-backed action source
///
/// Strength of an action is the strongest reading across all connected pads.
pub struct GilrsActions {
    gilrs: Gilrs,
    bindings: HashMap<String, AxisBinding>,
    deadzone: f32,
}

impl GilrsActions {
    pub fn new(gilrs: Gilrs, bindings: HashMap<String, AxisBinding>) -> Self {
        Self {
            gilrs,
            bindings,
            deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Pump pending gamepad events so axis state is current
    ///
    /// Call once per frame before the camera update.
    pub fn poll(&mut self) {
        while let Some(event) = self.gilrs.next_event() {
            log::trace!("gamepad event: {:?}", event.event);
        }
    }

    pub fn connected(&self) -> usize {
        self.gilrs.gamepads().count()
    }
}

impl ActionSource for GilrsActions {
    fn has_action(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    fn action_strength(&self, name: &str) -> f32 {
        let Some(binding) = self.bindings.get(name) else {
            return 0.0;
        };

        self.gilrs
            .gamepads()
            .map(|(_, pad)| binding.strength(pad.value(binding.axis), self.deadzone))
            .fold(0.0, f32::max)
    }
}
