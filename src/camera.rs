use std::collections::VecDeque;

use glam::{Vec2, Vec3};

use crate::config::FreeLookConfig;
use crate::input::{InputEvent, Key, PointerMode};
use crate::pose::{clamp_pitch, CameraPose};
use crate::traits::{ActionSource, CameraNode, PointerControl};

/// Latched movement keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Unscaled local direction: (right - left, 0, back - forward)
    pub const fn direction(&self) -> Vec3 {
        Vec3::new(
            Self::to_direction(self.right, self.left),
            0.0,
            Self::to_direction(self.backward, self.forward),
        )
    }
}

/// Free-look camera behavior
///
/// Feed it input events, then call [`FreeLookCamera::update`] (or
/// [`FreeLookCamera::frame`]) once per frame. All events for a frame must be
/// delivered before that frame's update.
#[derive(Debug, Clone)]
pub struct FreeLookCamera {
    config: FreeLookConfig,
    pose: CameraPose,
    /// x = yaw, y = pitch; raw pointer units until the next update
    look_delta: Vec2,
    movement: MovementState,
    look_key_held: bool,
    gamepad_enabled: bool,
    pending: VecDeque<InputEvent>,
}

impl FreeLookCamera {
    /// Build a camera at the origin
    ///
    /// `actions` is consulted once here: the gamepad adapter stays off for the
    /// camera's lifetime unless all eight configured actions are bound.
    pub fn new<A: ActionSource + ?Sized>(config: FreeLookConfig, actions: &A) -> Self {
        Self::with_pose(config, CameraPose::default(), actions)
    }

    pub fn with_pose<A: ActionSource + ?Sized>(
        config: FreeLookConfig,
        pose: CameraPose,
        actions: &A,
    ) -> Self {
        let gamepad_enabled = config.gamepad.enabled && gamepad_bound(&config, actions);

        Self {
            config,
            pose: CameraPose::new(pose.position, pose.yaw, pose.pitch),
            look_delta: Vec2::ZERO,
            movement: MovementState::default(),
            look_key_held: false,
            gamepad_enabled,
            pending: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &FreeLookConfig {
        &self.config
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Pending mouse deltas, x = yaw, y = pitch
    pub fn look_delta(&self) -> Vec2 {
        self.look_delta
    }

    pub fn movement_state(&self) -> MovementState {
        self.movement
    }

    pub fn gamepad_enabled(&self) -> bool {
        self.gamepad_enabled
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Queue an event for the next [`FreeLookCamera::drain_events`]
    pub fn queue_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Handle every queued event in arrival order
    pub fn drain_events<P: PointerControl + ?Sized>(&mut self, pointer: &mut P) {
        while let Some(event) = self.pending.pop_front() {
            self.handle_event(&event, pointer);
        }
    }

    pub fn handle_event<P: PointerControl + ?Sized>(&mut self, event: &InputEvent, pointer: &mut P) {
        match *event {
            InputEvent::PointerMotion { delta } => self.handle_motion(delta, pointer),
            InputEvent::Key { key, pressed } => self.handle_key(key, pressed, pointer),
        }
    }

    fn handle_motion<P: PointerControl + ?Sized>(&mut self, delta: Vec2, pointer: &P) {
        let mouse = &self.config.mouse;
        if !mouse.enabled || pointer.pointer_mode() != PointerMode::Captured {
            return;
        }
        if mouse.look_key.is_some() && !self.look_key_held {
            return;
        }
        if !delta.is_finite() {
            return;
        }
        self.look_delta += delta;
    }

    fn handle_key<P: PointerControl + ?Sized>(&mut self, key: Key, pressed: bool, pointer: &mut P) {
        if self.config.keyboard.enabled {
            let keys = &self.config.keyboard;
            if key == keys.forward {
                self.movement.forward = pressed;
            } else if key == keys.backward {
                self.movement.backward = pressed;
            } else if key == keys.left {
                self.movement.left = pressed;
            } else if key == keys.right {
                self.movement.right = pressed;
            }
        }

        let mouse = &self.config.mouse;
        if !mouse.enabled {
            return;
        }
        if mouse.look_key == Some(key) {
            self.look_key_held = pressed;
        }
        if key == mouse.capture_key {
            let mode = if pressed {
                PointerMode::Captured
            } else {
                PointerMode::Visible
            };
            // Key repeat re-sends presses; only real transitions reach the host.
            if pointer.pointer_mode() != mode {
                log::debug!("pointer mode -> {mode:?}");
                pointer.set_pointer_mode(mode);
            }
        }
    }

    /// Advance the pose by one frame without touching the host node
    ///
    /// Returns the clamped local-space movement applied this frame.
    pub fn integrate<A: ActionSource + ?Sized>(&mut self, dt: f32, actions: &A) -> Vec3 {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::trace!("ignoring frame delta {dt}");
            0.0
        };

        // Translation happens along the axes the node had coming into the frame.
        let basis = self.pose.rotation();
        let max_speed = self.config.max_movement_speed;

        if self.config.mouse.enabled {
            let scale = dt * self.config.mouse.sensitivity;
            self.pose.yaw += self.look_delta.x * scale;
            self.pose.pitch += self.look_delta.y * scale;
        }
        self.look_delta = Vec2::ZERO;

        let mut movement = Vec3::ZERO;

        if self.gamepad_enabled {
            let gamepad = &self.config.gamepad;
            let move_axis = gamepad.move_axis().read(actions);
            let look_axis = gamepad.look_axis().read(actions);

            let turn = self.config.max_rotation_speed * dt;
            self.pose.yaw += look_axis.x * turn;
            self.pose.pitch += look_axis.y * turn;

            movement.x += move_axis.x * max_speed * dt;
            movement.z += move_axis.y * max_speed * dt;
        }

        if self.config.keyboard.enabled {
            movement += self.movement.direction() * max_speed * dt;
        }

        let length = movement.length();
        if length > max_speed {
            movement = movement / length * max_speed;
        }

        self.pose.position += basis * movement;
        self.pose.pitch = clamp_pitch(self.pose.pitch);

        movement
    }

    /// Integrate one frame and write the result into the host node
    pub fn update<A, N>(&mut self, dt: f32, actions: &A, node: &mut N) -> Vec3
    where
        A: ActionSource + ?Sized,
        N: CameraNode + ?Sized,
    {
        let movement = self.integrate(dt, actions);
        node.set_transform(self.pose.to_transform());
        movement
    }

    /// Drain this frame's events, then update
    pub fn frame<P, A, N>(&mut self, dt: f32, pointer: &mut P, actions: &A, node: &mut N) -> Vec3
    where
        P: PointerControl + ?Sized,
        A: ActionSource + ?Sized,
        N: CameraNode + ?Sized,
    {
        self.drain_events(pointer);
        self.update(dt, actions, node)
    }
}

fn gamepad_bound<A: ActionSource + ?Sized>(config: &FreeLookConfig, actions: &A) -> bool {
    let missing: Vec<&str> = config
        .gamepad
        .actions()
        .into_iter()
        .map(|(_, name)| name)
        .filter(|name| !actions.has_action(name))
        .collect();

    if missing.is_empty() {
        log::info!("gamepad look and movement enabled");
        true
    } else {
        log::info!("gamepad disabled, unbound actions: {}", missing.join(", "));
        false
    }
}
