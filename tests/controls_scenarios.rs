use glam::{Vec2, Vec3};
use touch_rig::core::joystick::JoystickGeometry;
use touch_rig::core::sensitivity::SensitivityParam;
use touch_rig::{CameraRig, HandleFeedback, JoystickId, MobileControls, SensitivityConfig, TouchPoint};

/// Camera double that counts position writes and records look-control toggles
#[derive(Debug, Default)]
struct RecordingRig {
    yaw: f32,
    pitch: f32,
    position: Vec3,
    position_writes: usize,
    default_look: Vec<bool>,
}

impl CameraRig for RecordingRig {
    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.position_writes += 1;
    }

    fn set_default_look_enabled(&mut self, enabled: bool) {
        self.default_look.push(enabled);
    }
}

const MOVE_CENTER: Vec2 = Vec2::new(70.0, 530.0);
const LOOK_CENTER: Vec2 = Vec2::new(730.0, 530.0);
const RADIUS: f32 = 50.0;

fn controls_with(camera: Option<RecordingRig>) -> MobileControls<RecordingRig> {
    MobileControls::new(
        JoystickGeometry::new(MOVE_CENTER, RADIUS),
        JoystickGeometry::new(LOOK_CENTER, RADIUS),
        SensitivityConfig::default(),
        camera,
    )
}

fn drag(controls: &mut MobileControls<RecordingRig>, id: JoystickId, dx: f32, dy: f32) -> Option<HandleFeedback> {
    let center = match id {
        JoystickId::Move => MOVE_CENTER,
        JoystickId::Look => LOOK_CENTER,
    };
    let point = TouchPoint {
        id: 1,
        position: center + Vec2::new(dx, dy),
    };
    controls.on_touch_start(id, &[TouchPoint { id: 1, position: center }]);
    controls.on_touch_move(id, &[point])
}

#[cfg(test)]
mod controls_scenario_tests {
    use super::*;

    #[test]
    fn test_reference_scenario_one_tick() {
        let mut controls = controls_with(Some(RecordingRig::default()));

        let feedback = drag(&mut controls, JoystickId::Move, 50.0, 0.0).unwrap();
        assert!((feedback.offset - Vec2::new(50.0, 0.0)).length() < 1e-4);
        assert_eq!(controls.movement(), Vec3::new(1.0, 0.0, 0.0));

        assert!(controls.on_tick(16.0));
        let camera = controls.camera().unwrap();
        assert!((camera.position.x - 0.016).abs() < 1e-6);
        assert_eq!(camera.position.z, 0.0);
        assert_eq!(camera.position.y, 0.0);
    }

    #[test]
    fn test_zero_displacement_never_writes_position() {
        let mut controls = controls_with(Some(RecordingRig::default()));

        drag(&mut controls, JoystickId::Move, 0.0, 0.0);
        assert_eq!(controls.movement(), Vec3::ZERO);

        assert!(!controls.on_tick(16.0));
        assert_eq!(controls.camera().unwrap().position_writes, 0);
    }

    #[test]
    fn test_soft_control_beyond_radius() {
        let mut controls = controls_with(Some(RecordingRig::default()));

        let feedback = drag(&mut controls, JoystickId::Move, 0.0, 125.0).unwrap();
        assert!(feedback.offset.length() <= RADIUS + 1e-4);
        assert_eq!(controls.movement(), Vec3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn test_touch_end_resets_vector_and_handle() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        drag(&mut controls, JoystickId::Move, 200.0, -300.0);

        let feedback = controls.on_touch_end(JoystickId::Move);
        assert_eq!(feedback, HandleFeedback::reset(JoystickId::Move));
        assert_eq!(controls.movement(), Vec3::ZERO);
        assert!(!controls.joystick(JoystickId::Move).is_active());
        assert!(!controls.on_tick(16.0));
    }

    #[test]
    fn test_touch_end_without_session_is_safe() {
        let mut controls = controls_with(None);
        let feedback = controls.on_touch_end(JoystickId::Look);
        assert_eq!(feedback.offset, Vec2::ZERO);
    }

    #[test]
    fn test_move_with_no_contacts_is_noop() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        drag(&mut controls, JoystickId::Move, 25.0, 0.0);

        assert_eq!(controls.on_touch_move(JoystickId::Move, &[]), None);
        assert_eq!(controls.movement(), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_doubling_move_speed_doubles_step() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        drag(&mut controls, JoystickId::Move, 30.0, -20.0);

        controls.on_tick(16.0);
        let first = controls.camera().unwrap().position;

        controls.on_slider_change(SensitivityParam::MoveSpeed, 2.0);
        controls.on_tick(16.0);
        let second = controls.camera().unwrap().position - first;

        assert!((second.length() - 2.0 * first.length()).abs() < 1e-6);
    }

    #[test]
    fn test_look_speed_change_applies_to_next_sample() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        drag(&mut controls, JoystickId::Look, 10.0, 0.0);
        let after_first = controls.camera().unwrap().yaw;
        assert!((after_first + 10.0 * 0.1 * 0.01).abs() < 1e-6);

        controls.sensitivity_mut().set_look_speed(0.3);
        controls.on_touch_move(
            JoystickId::Look,
            &[TouchPoint {
                id: 1,
                position: LOOK_CENTER + Vec2::new(10.0, 0.0),
            }],
        );
        let step = controls.camera().unwrap().yaw - after_first;
        assert!((step + 10.0 * 0.3 * 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_stays_clamped_under_repeated_samples() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        controls.on_slider_change(SensitivityParam::LookSpeed, 0.3);

        for _ in 0..500 {
            drag(&mut controls, JoystickId::Look, -40.0, -50.0);
        }
        let camera = controls.camera().unwrap();
        assert!(camera.pitch <= std::f32::consts::FRAC_PI_2);
        assert!((camera.pitch - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(camera.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn test_look_stick_is_not_integrated_per_tick() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        drag(&mut controls, JoystickId::Look, 40.0, 0.0);
        let yaw = controls.camera().unwrap().yaw;

        controls.on_tick(16.0);
        controls.on_tick(16.0);
        assert_eq!(controls.camera().unwrap().yaw, yaw);
    }

    #[test]
    fn test_movement_follows_camera_yaw() {
        let rig = RecordingRig {
            yaw: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        let mut controls = controls_with(Some(rig));
        drag(&mut controls, JoystickId::Move, 50.0, 0.0);

        controls.on_tick(1000.0);
        let position = controls.camera().unwrap().position;
        assert!(position.x.abs() < 1e-6);
        assert!((position.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_camera_fails_safe_until_attached() {
        let mut controls = controls_with(None);

        drag(&mut controls, JoystickId::Look, 30.0, 30.0);
        drag(&mut controls, JoystickId::Move, 50.0, 0.0);
        assert!(!controls.on_tick(16.0));

        assert!(controls.attach_camera(RecordingRig::default()).is_none());
        assert!(controls.on_tick(1000.0));
        let camera = controls.camera().unwrap();
        assert!((camera.position.x - 1.0).abs() < 1e-6);
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn test_default_look_paused_while_attached() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        assert_eq!(controls.camera().unwrap().default_look, vec![false]);

        let camera = controls.detach_camera().unwrap();
        assert_eq!(camera.default_look, vec![false, true]);
        assert!(controls.camera().is_none());
    }

    #[test]
    fn test_sticks_are_independent() {
        let mut controls = controls_with(Some(RecordingRig::default()));
        drag(&mut controls, JoystickId::Move, 25.0, 0.0);
        drag(&mut controls, JoystickId::Look, 0.0, 20.0);

        controls.on_touch_end(JoystickId::Look);
        assert_eq!(controls.movement(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(
            controls.joystick(JoystickId::Look).handle_offset(),
            Vec2::ZERO
        );
        assert!(controls.joystick(JoystickId::Move).is_active());
    }
}
