pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod pose;
pub mod traits;
pub mod window;

pub use camera::{FreeLookCamera, MovementState};
pub use config::{ConfigError, FreeLookConfig, GamepadConfig, KeyboardConfig, MouseConfig};
pub use input::{CompositeAxis, InputEvent, Key, PointerMode};
pub use pose::{CameraPose, CameraTransform};
