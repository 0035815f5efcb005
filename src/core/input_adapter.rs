use std::collections::HashSet;
use winit::event::{DeviceEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key};

/// Adapter that turns Winit events into camera input events
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Keys currently held, so focus loss can release them
    pressed_keys: HashSet<Key>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event
    ///
    /// Losing focus emits a release for every held key, otherwise the
    /// camera would keep moving with no key down.
    pub fn window_event(&mut self, event: &WindowEvent, emit: impl FnMut(InputEvent)) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(key) = Self::keycode_to_key(keycode) {
                        self.key(key, event.state.is_pressed(), emit);
                    }
                }
            }
            WindowEvent::Focused(false) => self.release_all(emit),
            _ => {}
        }
    }

    /// Translate a raw device event
    pub fn device_event(&mut self, event: &DeviceEvent, mut emit: impl FnMut(InputEvent)) {
        if let DeviceEvent::MouseMotion { delta } = event {
            emit(InputEvent::motion(delta.0 as f32, delta.1 as f32));
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn key(&mut self, key: Key, pressed: bool, mut emit: impl FnMut(InputEvent)) {
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
        emit(InputEvent::key(key, pressed));
    }

    fn release_all(&mut self, mut emit: impl FnMut(InputEvent)) {
        for key in self.pressed_keys.drain() {
            emit(InputEvent::key(key, false));
        }
    }

    /// Map Winit KeyCode to Key
    fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::KeyW),
            KeyCode::KeyA => Some(Key::KeyA),
            KeyCode::KeyS => Some(Key::KeyS),
            KeyCode::KeyD => Some(Key::KeyD),
            KeyCode::KeyQ => Some(Key::KeyQ),
            KeyCode::KeyE => Some(Key::KeyE),
            KeyCode::ArrowUp => Some(Key::ArrowUp),
            KeyCode::ArrowDown => Some(Key::ArrowDown),
            KeyCode::ArrowLeft => Some(Key::ArrowLeft),
            KeyCode::ArrowRight => Some(Key::ArrowRight),
            KeyCode::Space => Some(Key::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Key::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Key::Ctrl),
            KeyCode::AltLeft | KeyCode::AltRight => Some(Key::Alt),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}
