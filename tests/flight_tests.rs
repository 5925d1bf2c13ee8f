//! Flight model behaviour driven through key states.

use voxel_space::core::{AxisDynamics, CameraState, Drive, FlightIntents, KeyStates};
use voxel_space::types::{InputEvent, Key, MAX_CAMERA_HEIGHT, MIN_CAMERA_HEIGHT};

fn hold(keys: &[Key]) -> KeyStates {
    let mut states = KeyStates::new();
    for &k in keys {
        states.apply(InputEvent::KeyDown(k));
    }
    states
}

#[test]
fn holding_down_bottoms_out_at_minimum_height() {
    let mut cam = CameraState::default();
    assert_eq!(cam.height(), 80.0);
    let keys = hold(&[Key::Down]);
    for _ in 0..60 {
        cam.update(FlightIntents::from_keys(&keys));
    }
    assert_eq!(cam.height(), MIN_CAMERA_HEIGHT);
}

#[test]
fn holding_up_tops_out_at_maximum_height() {
    let mut cam = CameraState::default();
    let keys = hold(&[Key::Up]);
    for _ in 0..100 {
        cam.update(FlightIntents::from_keys(&keys));
    }
    assert_eq!(cam.height(), MAX_CAMERA_HEIGHT);
}

#[test]
fn throttle_moves_along_heading_and_tips_pitch() {
    let mut cam = CameraState::at(100.0, 100.0, 80.0, 0.0);
    let keys = hold(&[Key::W]);
    for _ in 0..10 {
        cam.update(FlightIntents::from_keys(&keys));
    }
    assert!(cam.x > 100.0);
    assert!((cam.y - 100.0).abs() < 1e-3);
    assert!(cam.forward.velocity > 0.0);
    assert!(cam.pitch_axis.velocity < 0.0);
    assert!(cam.pitch() < 80.0);
}

#[test]
fn turning_right_yaws_positive_and_rolls_negative() {
    let mut cam = CameraState::default();
    let keys = hold(&[Key::D]);
    for _ in 0..5 {
        cam.update(FlightIntents::from_keys(&keys));
    }
    assert!(cam.yaw > 0.0);
    assert!(cam.yaw_axis.velocity > 0.0);
    assert!(cam.roll_velocity() < 0.0);
}

#[test]
fn releasing_keys_coasts_back_to_rest() {
    let mut cam = CameraState::default();
    let keys = hold(&[Key::W, Key::A]);
    for _ in 0..40 {
        cam.update(FlightIntents::from_keys(&keys));
    }
    let idle = FlightIntents::default();
    for _ in 0..200 {
        cam.update(idle);
    }
    for axis in cam.axes() {
        assert_eq!(axis.velocity, 0.0);
    }
    assert_eq!(cam.pitch(), 80.0);
}

#[test]
fn strafe_and_lift_stay_inert_under_every_key() {
    let mut cam = CameraState::default();
    let keys = hold(&Key::ALL);
    for _ in 0..50 {
        cam.update(FlightIntents::from_keys(&keys));
    }
    assert_eq!(cam.strafe.velocity, 0.0);
    assert_eq!(cam.lift.velocity, 0.0);
}

#[test]
fn velocity_never_leaves_its_bounds() {
    // Small LCG so the drive sequence is reproducible.
    let mut seed: u32 = 0x2545_f491;
    let mut next = move || {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        seed >> 16
    };

    let mut axes = [
        AxisDynamics::new(0.06, 0.1, 3.0),
        AxisDynamics::new(0.16, 0.06, 2.0),
        AxisDynamics::new(0.10, 0.10, 1.0),
        AxisDynamics::new(0.04, 0.09, 1.0),
        AxisDynamics::new(0.7, 0.3, 1.0),
    ];
    for _ in 0..20_000 {
        for axis in axes.iter_mut() {
            let drive = match next() % 3 {
                0 => Drive::Positive,
                1 => Drive::Negative,
                _ => Drive::Idle,
            };
            // Long runs in one direction push against the bound.
            for _ in 0..(next() % 40) {
                axis.step(drive);
                assert!(axis.velocity.abs() <= axis.max_velocity, "{axis:?}");
            }
        }
    }
}

#[test]
fn both_turn_keys_favour_left() {
    let intents = FlightIntents::from_keys(&hold(&[Key::A, Key::D]));
    assert_eq!(intents.turn, Drive::Negative);
    let intents = FlightIntents::from_keys(&hold(&[Key::W, Key::S]));
    assert_eq!(intents.throttle, Drive::Positive);
}
