/// Named logical actions from the host's input-binding configuration
pub trait ActionSource {
    /// Check whether an action exists in the active bindings
    fn has_action(&self, name: &str) -> bool;

    /// Current strength of an action in `0.0..=1.0`
    fn action_strength(&self, name: &str) -> f32;
}

/// Source with no bindings at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActions;

impl ActionSource for NoActions {
    fn has_action(&self, _name: &str) -> bool {
        false
    }

    fn action_strength(&self, _name: &str) -> f32 {
        0.0
    }
}
