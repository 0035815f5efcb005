use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI};

use free_look_camera::traits::{ActionSource, CameraNode, NoActions, PointerControl};
use free_look_camera::{
    CameraPose, CameraTransform, FreeLookCamera, FreeLookConfig, InputEvent, Key, PointerMode,
};
use glam::{Quat, Vec2, Vec3};

const EPS: f32 = 1e-5;

/// Mock host: pointer capture plus the camera node
#[derive(Default)]
struct MockHost {
    mode: PointerMode,
    switches: Vec<PointerMode>,
    transforms: Vec<CameraTransform>,
}

impl MockHost {
    fn captured() -> Self {
        Self {
            mode: PointerMode::Captured,
            ..Default::default()
        }
    }
}

impl PointerControl for MockHost {
    fn pointer_mode(&self) -> PointerMode {
        self.mode
    }

    fn set_pointer_mode(&mut self, mode: PointerMode) {
        self.mode = mode;
        self.switches.push(mode);
    }
}

impl CameraNode for MockHost {
    fn set_transform(&mut self, transform: CameraTransform) {
        self.transforms.push(transform);
    }
}

/// Mock action map
#[derive(Default, Clone)]
struct MockActions {
    strengths: HashMap<String, f32>,
}

impl MockActions {
    fn all_bound() -> Self {
        let mut actions = Self::default();
        for (_, name) in FreeLookConfig::default().gamepad.actions() {
            actions.strengths.insert(name.to_string(), 0.0);
        }
        actions
    }

    fn set(mut self, name: &str, value: f32) -> Self {
        self.strengths.insert(name.to_string(), value);
        self
    }

    fn without(mut self, name: &str) -> Self {
        self.strengths.remove(name);
        self
    }
}

impl ActionSource for MockActions {
    fn has_action(&self, name: &str) -> bool {
        self.strengths.contains_key(name)
    }

    fn action_strength(&self, name: &str) -> f32 {
        self.strengths.get(name).copied().unwrap_or(0.0)
    }
}

fn keyboard_only(max_movement_speed: f32) -> FreeLookConfig {
    let mut config = FreeLookConfig {
        max_movement_speed,
        ..Default::default()
    };
    config.mouse.enabled = false;
    config.gamepad.enabled = false;
    config
}

fn assert_vec_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < EPS, "{a:?} != {b:?}");
}

// ============================================================================
// Mouse accumulation
// ============================================================================

#[test]
fn test_mouse_deltas_sum_exactly_within_a_frame() {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &NoActions);
    let mut host = MockHost::captured();

    for (dx, dy) in [(1.5, -0.75), (2.25, 0.5), (-0.25, 4.0)] {
        camera.handle_event(&InputEvent::motion(dx, dy), &mut host);
    }

    assert_eq!(camera.look_delta(), Vec2::new(3.5, 3.75));
}

#[test]
fn test_mouse_deltas_cleared_after_integration() {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &NoActions);
    let mut host = MockHost::captured();

    camera.handle_event(&InputEvent::motion(10.0, -4.0), &mut host);
    camera.update(0.016, &NoActions, &mut host);

    assert_eq!(camera.look_delta(), Vec2::ZERO);
}

#[test]
fn test_mouse_deltas_cleared_when_mouse_look_disabled() {
    let mut config = FreeLookConfig::default();
    config.mouse.enabled = false;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::captured();

    camera.handle_event(&InputEvent::motion(10.0, -4.0), &mut host);
    camera.update(0.016, &NoActions, &mut host);

    assert_eq!(camera.look_delta(), Vec2::ZERO);
    assert_eq!(camera.pose().yaw, 0.0);
    assert_eq!(camera.pose().pitch, 0.0);
}

#[test]
fn test_pending_deltas_do_not_leak_into_next_frame() {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &NoActions);
    let mut host = MockHost::default();

    // Capture, move, release all within one frame.
    camera.queue_event(InputEvent::key(Key::Ctrl, true));
    camera.queue_event(InputEvent::motion(2.0, 0.0));
    camera.queue_event(InputEvent::key(Key::Ctrl, false));
    camera.frame(1.0, &mut host, &NoActions, &mut MockHost::default());

    let yaw_after_first = camera.pose().yaw;
    assert_eq!(yaw_after_first, 2.0 * 0.5);

    camera.frame(1.0, &mut host, &NoActions, &mut MockHost::default());
    assert_eq!(camera.pose().yaw, yaw_after_first);
}

#[test]
fn test_mouse_look_formula() {
    let mut config = FreeLookConfig::default();
    config.mouse.sensitivity = 0.25;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::captured();

    camera.handle_event(&InputEvent::motion(4.0, 2.0), &mut host);
    camera.integrate(0.5, &NoActions);

    // yaw += dx * dt * sensitivity, pitch += dy * dt * sensitivity
    assert!((camera.pose().yaw - 0.5).abs() < EPS);
    assert!((camera.pose().pitch - 0.25).abs() < EPS);
}

// ============================================================================
// Pitch clamping
// ============================================================================

#[test]
fn test_pitch_always_within_range() {
    let mut config = FreeLookConfig::default();
    config.mouse.sensitivity = 1.0;

    for dy in [1.0e6, -1.0e6, 3.0, -3.0, 0.0, 1.0e30] {
        let mut camera = FreeLookCamera::new(config.clone(), &NoActions);
        let mut host = MockHost::captured();

        for _ in 0..5 {
            camera.handle_event(&InputEvent::motion(0.0, dy), &mut host);
            camera.update(1.0, &NoActions, &mut host);
            let pitch = camera.pose().pitch;
            assert!(
                (-FRAC_PI_2..=FRAC_PI_2).contains(&pitch),
                "pitch {pitch} out of range for dy={dy}"
            );
        }
    }
}

#[test]
fn test_clamped_pitch_does_not_wind_up() {
    let mut config = FreeLookConfig::default();
    config.mouse.sensitivity = 1.0;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::captured();

    camera.handle_event(&InputEvent::motion(0.0, 100.0), &mut host);
    camera.update(1.0, &NoActions, &mut host);
    assert_eq!(camera.pose().pitch, FRAC_PI_2);

    // A small downward move takes effect immediately.
    camera.handle_event(&InputEvent::motion(0.0, -0.5), &mut host);
    camera.update(1.0, &NoActions, &mut host);
    assert!((camera.pose().pitch - (FRAC_PI_2 - 0.5)).abs() < EPS);
}

#[test]
fn test_yaw_is_never_wrapped() {
    let mut config = FreeLookConfig::default();
    config.mouse.sensitivity = 1.0;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::captured();

    for _ in 0..4 {
        camera.handle_event(&InputEvent::motion(PI, 0.0), &mut host);
        camera.update(1.0, &NoActions, &mut host);
    }

    assert!((camera.pose().yaw - 4.0 * PI).abs() < 1e-4);
}

// ============================================================================
// Keyboard movement and clamping
// ============================================================================

#[test]
fn test_keyboard_forward_right_under_limit_is_unchanged() {
    let mut camera = FreeLookCamera::new(keyboard_only(2.0), &NoActions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::KeyW, true), &mut host);
    camera.handle_event(&InputEvent::key(Key::KeyD, true), &mut host);
    let movement = camera.update(0.5, &NoActions, &mut host);

    // (1, 0, -1) * 2 * 0.5, length √2 < 2
    assert_vec_near(movement, Vec3::new(1.0, 0.0, -1.0));
    assert_vec_near(camera.pose().position, Vec3::new(1.0, 0.0, -1.0));
}

#[test]
fn test_keyboard_diagonal_over_limit_is_capped() {
    let mut camera = FreeLookCamera::new(keyboard_only(2.0), &NoActions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::KeyW, true), &mut host);
    camera.handle_event(&InputEvent::key(Key::KeyD, true), &mut host);
    let movement = camera.update(1.0, &NoActions, &mut host);

    let raw = Vec3::new(2.0, 0.0, -2.0);
    assert!((movement.length() - 2.0).abs() < EPS);
    assert_vec_near(movement.normalize(), raw.normalize());
}

#[test]
fn test_opposing_keys_cancel() {
    let mut camera = FreeLookCamera::new(keyboard_only(1.0), &NoActions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::KeyA, true), &mut host);
    camera.handle_event(&InputEvent::key(Key::KeyD, true), &mut host);

    assert_eq!(camera.update(0.5, &NoActions, &mut host), Vec3::ZERO);
    assert_eq!(camera.pose().position, Vec3::ZERO);
}

#[test]
fn test_no_input_zero_movement() {
    let mut camera = FreeLookCamera::new(keyboard_only(0.0), &NoActions);
    let mut host = MockHost::default();

    let movement = camera.update(0.5, &NoActions, &mut host);
    assert_eq!(movement, Vec3::ZERO);
    assert!(movement.is_finite());
}

#[test]
fn test_keyboard_disabled_ignores_keys() {
    let mut config = keyboard_only(1.0);
    config.keyboard.enabled = false;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::KeyW, true), &mut host);
    assert_eq!(camera.update(1.0, &NoActions, &mut host), Vec3::ZERO);
}

#[test]
fn test_custom_key_bindings() {
    let mut config = keyboard_only(1.0);
    config.keyboard.forward = Key::ArrowUp;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::KeyW, true), &mut host);
    assert_eq!(camera.update(0.5, &NoActions, &mut host), Vec3::ZERO);

    camera.handle_event(&InputEvent::key(Key::ArrowUp, true), &mut host);
    assert_vec_near(
        camera.update(0.5, &NoActions, &mut host),
        Vec3::new(0.0, 0.0, -0.5),
    );
}

#[test]
fn test_translation_uses_orientation_from_start_of_frame() {
    let mut config = FreeLookConfig::default();
    config.mouse.sensitivity = 1.0;
    config.gamepad.enabled = false;
    let pose = CameraPose::new(Vec3::ZERO, FRAC_PI_2, 0.0);
    let mut camera = FreeLookCamera::with_pose(config, pose, &NoActions);
    let mut host = MockHost::captured();

    // Turn back to yaw 0 and walk forward in the same frame.
    camera.handle_event(&InputEvent::motion(-FRAC_PI_2, 0.0), &mut host);
    camera.handle_event(&InputEvent::key(Key::KeyW, true), &mut host);
    camera.update(1.0, &NoActions, &mut host);

    // Facing -X coming into the frame, so the step goes along -X.
    assert_vec_near(camera.pose().position, Vec3::new(-1.0, 0.0, 0.0));
    assert!(camera.pose().yaw.abs() < EPS);
}

// ============================================================================
// Pointer capture
// ============================================================================

#[test]
fn test_modifier_press_release_switches_twice_in_one_frame() {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &NoActions);
    let mut host = MockHost::default();

    camera.queue_event(InputEvent::key(Key::Ctrl, true));
    camera.queue_event(InputEvent::key(Key::Ctrl, false));
    assert_eq!(camera.pending_events(), 2);

    camera.drain_events(&mut host);

    assert_eq!(
        host.switches,
        vec![PointerMode::Captured, PointerMode::Visible]
    );
    assert_eq!(host.mode, PointerMode::Visible);
    assert_eq!(camera.pending_events(), 0);
}

#[test]
fn test_motion_only_counts_while_captured() {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &NoActions);
    let mut host = MockHost::default();

    camera.queue_event(InputEvent::motion(1.0, 0.0));
    camera.queue_event(InputEvent::key(Key::Ctrl, true));
    camera.queue_event(InputEvent::motion(2.0, 0.0));
    camera.queue_event(InputEvent::key(Key::Ctrl, false));
    camera.queue_event(InputEvent::motion(4.0, 0.0));
    camera.drain_events(&mut host);

    assert_eq!(camera.look_delta(), Vec2::new(2.0, 0.0));
}

#[test]
fn test_capture_key_ignored_when_mouse_disabled() {
    let mut config = FreeLookConfig::default();
    config.mouse.enabled = false;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::Ctrl, true), &mut host);
    assert!(host.switches.is_empty());
}

// ============================================================================
// Gamepad
// ============================================================================

#[test]
fn test_gamepad_enabled_when_all_actions_bound() {
    let camera = FreeLookCamera::new(FreeLookConfig::default(), &MockActions::all_bound());
    assert!(camera.gamepad_enabled());
}

#[test]
fn test_any_missing_action_disables_gamepad() {
    for (_, name) in FreeLookConfig::default().gamepad.actions() {
        let actions = MockActions::all_bound().without(name);
        let camera = FreeLookCamera::new(FreeLookConfig::default(), &actions);
        assert!(!camera.gamepad_enabled(), "still enabled without {name}");
    }
}

#[test]
fn test_disabled_gamepad_contributes_nothing() {
    let startup = MockActions::all_bound().without("move_axis_right");
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &startup);
    let mut host = MockHost::default();

    // Later the source reports full deflection on every action.
    let mut live = MockActions::all_bound();
    for (_, name) in FreeLookConfig::default().gamepad.actions() {
        live = live.set(name, 1.0);
    }
    let live = live.set("move_axis_right", 1.0).set("look_axis_left", 1.0);

    for _ in 0..3 {
        let movement = camera.update(0.5, &live, &mut host);
        assert_eq!(movement, Vec3::ZERO);
    }
    assert_eq!(*camera.pose(), CameraPose::default());
}

#[test]
fn test_gamepad_move_axis() {
    let mut config = FreeLookConfig {
        max_movement_speed: 4.0,
        ..Default::default()
    };
    config.keyboard.enabled = false;
    let actions = MockActions::all_bound()
        .set("move_axis_right", 0.5)
        .set("move_axis_forward", 0.5);
    let mut camera = FreeLookCamera::new(config, &actions);
    let mut host = MockHost::default();

    let movement = camera.update(0.5, &actions, &mut host);

    // move axis (0.5, -0.5) * 4 * 0.5
    assert_vec_near(movement, Vec3::new(1.0, 0.0, -1.0));
}

#[test]
fn test_gamepad_look_axis() {
    let config = FreeLookConfig {
        max_rotation_speed: 2.0,
        ..Default::default()
    };
    let actions = MockActions::all_bound()
        .set("look_axis_left", 0.5)
        .set("look_axis_up", 0.25);
    let mut camera = FreeLookCamera::new(config, &actions);
    let mut host = MockHost::default();

    camera.update(0.5, &actions, &mut host);

    // Left turns toward positive yaw, up toward positive pitch.
    assert!((camera.pose().yaw - 0.5).abs() < EPS);
    assert!((camera.pose().pitch - 0.25).abs() < EPS);
}

#[test]
fn test_gamepad_and_keyboard_add_then_cap() {
    let config = FreeLookConfig {
        max_movement_speed: 1.0,
        ..Default::default()
    };
    let actions = MockActions::all_bound().set("move_axis_forward", 1.0);
    let mut camera = FreeLookCamera::new(config, &actions);
    let mut host = MockHost::default();

    camera.handle_event(&InputEvent::key(Key::KeyW, true), &mut host);
    let movement = camera.update(1.0, &actions, &mut host);

    // Raw (0, 0, -2) capped to the speed limit.
    assert_vec_near(movement, Vec3::new(0.0, 0.0, -1.0));
}

// ============================================================================
// Host node output
// ============================================================================

#[test]
fn test_node_written_once_per_frame() {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default(), &NoActions);
    let mut pointer = MockHost::default();
    let mut node = MockHost::default();

    camera.queue_event(InputEvent::key(Key::KeyW, true));
    camera.frame(0.1, &mut pointer, &NoActions, &mut node);
    camera.frame(0.1, &mut pointer, &NoActions, &mut node);

    assert_eq!(node.transforms.len(), 2);
    assert_eq!(node.transforms[1], camera.pose().to_transform());
}

#[test]
fn test_rotation_is_yaw_then_pitch() {
    let mut config = FreeLookConfig::default();
    config.mouse.sensitivity = 1.0;
    let mut camera = FreeLookCamera::new(config, &NoActions);
    let mut host = MockHost::captured();

    camera.handle_event(&InputEvent::motion(0.7, -0.4), &mut host);
    camera.update(1.0, &NoActions, &mut host);

    let Some(transform) = host.transforms.last() else {
        panic!("no transform written");
    };
    let expected = Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.4);
    assert!(transform.rotation.abs_diff_eq(expected, EPS));

    // No roll: the camera's right axis stays level.
    assert!((transform.rotation * Vec3::X).y.abs() < EPS);
}
