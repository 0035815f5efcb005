pub mod clock;
pub mod gamepad;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use gamepad::{AxisBinding, GilrsActions};
pub use input_adapter::WinitInput;
pub use timer::FixedHz;
