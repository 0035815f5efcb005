use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::input::PointerMode;
use crate::pose::CameraTransform;
use crate::traits::{CameraNode, PointerControl};

/// Wrapper around winit Window acting as the camera's host
///
/// Owns pointer capture and holds the last transform the camera wrote.
pub struct Window {
    inner: Arc<WinitWindow>,
    pointer_mode: PointerMode,
    transform: Option<CameraTransform>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self {
            inner: window,
            pointer_mode: PointerMode::Visible,
            transform: None,
        }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    pub fn transform(&self) -> Option<CameraTransform> {
        self.transform
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    fn grab(&self) -> bool {
        // Not every platform supports Locked; Confined is the next best thing.
        let result = self
            .inner
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined));
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("pointer capture failed: {e}");
                false
            }
        }
    }
}

impl PointerControl for Window {
    fn pointer_mode(&self) -> PointerMode {
        self.pointer_mode
    }

    fn set_pointer_mode(&mut self, mode: PointerMode) {
        match mode {
            PointerMode::Captured => {
                if !self.grab() {
                    return;
                }
                self.inner.set_cursor_visible(false);
            }
            PointerMode::Visible => {
                if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
                    log::debug!("pointer release failed: {e}");
                }
                self.inner.set_cursor_visible(true);
            }
        }
        self.pointer_mode = mode;
    }
}

impl CameraNode for Window {
    fn set_transform(&mut self, transform: CameraTransform) {
        self.transform = Some(transform);
    }
}
