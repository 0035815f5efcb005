use crate::input::PointerMode;

/// Pointer capture abstraction
pub trait PointerControl {
    /// Mode the pointer is currently in
    fn pointer_mode(&self) -> PointerMode;

    /// Switch between visible and captured
    fn set_pointer_mode(&mut self, mode: PointerMode);
}
