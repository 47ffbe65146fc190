use shotcalc_core::diagnostics::RecordingObserver;
use shotcalc_core::{MotionError, MotionStore, TrajectoryFrame};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn dolly_pan_tilt() -> MotionStore {
    let mut store = MotionStore::new(24, ["dolly", "pan", "tilt"]).expect("store");
    store
        .add_keyframe(32u64, [("dolly", 35.0), ("pan", 60.0), ("tilt", 15.0)])
        .unwrap();
    store.add_keyframe("00:00:07:00", [("dolly", 375.0)]).unwrap();
    store
        .add_keyframe("00:00:10:00", [("dolly", 400.0), ("pan", 90.0), ("tilt", 0.0)])
        .unwrap();
    store
}

#[test]
fn end_to_end_frames_32_to_240() {
    let store = dolly_pan_tilt();
    let trajectory = store.generate_trajectory().expect("trajectory");
    assert_eq!(trajectory.start_frame(), 32);
    assert_eq!(trajectory.end_frame(), 240);
    assert_eq!(trajectory.len(), 209);

    let frames: Vec<TrajectoryFrame> = trajectory.collect();
    assert_eq!(frames.len(), 209);

    let first = &frames[0];
    assert_eq!(first.frame, 32);
    assert_eq!(first.values["dolly"], 35.0);
    assert_eq!(first.values["pan"], 60.0);
    assert_eq!(first.values["tilt"], 15.0);

    let last = frames.last().unwrap();
    assert_eq!(last.frame, 240);
    assert_eq!(last.values["dolly"], 400.0);
    assert_eq!(last.values["pan"], 90.0);
    assert_eq!(last.values["tilt"], 0.0);

    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.frame, 32 + i as u64);
        let keys: Vec<&str> = f.values.keys().map(String::as_str).collect();
        assert_eq!(keys, ["dolly", "pan", "tilt"]);
    }

    // The middle keyframe only sets dolly and is hit exactly.
    assert_eq!(frames[168 - 32].values["dolly"], 375.0);
}

#[test]
fn two_key_movements_are_linear_and_stay_in_bounds() {
    let frames: Vec<TrajectoryFrame> = dolly_pan_tilt().generate_trajectory().unwrap().collect();
    for f in &frames {
        let t = (f.frame - 32) as f64 / 208.0;
        approx(f.values["pan"], 60.0 + 30.0 * t, 1e-9);
        approx(f.values["tilt"], 15.0 - 15.0 * t, 1e-9);
        let dolly = f.values["dolly"];
        assert!((35.0..=400.0).contains(&dolly), "frame {} dolly {dolly}", f.frame);
    }
}

#[test]
fn empty_store_reports_empty_state() {
    let store = MotionStore::new(24, ["pan"]).unwrap();
    assert_eq!(store.generate_trajectory().unwrap_err(), MotionError::EmptyState);
    assert_eq!(store.curves().unwrap_err(), MotionError::EmptyState);
}

#[test]
fn single_keyframe_movement_is_named() {
    let mut store = MotionStore::new(24, ["dolly", "pan"]).unwrap();
    store.add_keyframe(0u64, [("dolly", 0.0), ("pan", 5.0)]).unwrap();
    store.add_keyframe(48u64, [("dolly", 10.0)]).unwrap();
    store.add_keyframe(96u64, [("dolly", 20.0)]).unwrap();

    match store.generate_trajectory() {
        Err(MotionError::InsufficientData { movement, found }) => {
            assert_eq!(movement, "pan");
            assert_eq!(found, 1);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn movement_without_keyframes_is_insufficient() {
    let mut store = MotionStore::new(24, ["dolly", "zoom"]).unwrap();
    store.add_keyframe(0u64, [("dolly", 0.0)]).unwrap();
    store.add_keyframe(10u64, [("dolly", 1.0)]).unwrap();
    let err = store.generate_trajectory().unwrap_err();
    assert_eq!(
        err,
        MotionError::InsufficientData {
            movement: "zoom".into(),
            found: 0
        }
    );
}

#[test]
fn narrower_movement_is_extrapolated_over_the_global_span() {
    let mut store = MotionStore::new(24, ["dolly", "pan"]).unwrap();
    store.add_keyframe(0u64, [("dolly", 0.0)]).unwrap();
    store.add_keyframe(10u64, [("pan", 10.0)]).unwrap();
    store.add_keyframe(20u64, [("pan", 20.0)]).unwrap();
    store.add_keyframe(30u64, [("dolly", 30.0)]).unwrap();

    let frames: Vec<TrajectoryFrame> = store.generate_trajectory().unwrap().collect();
    assert_eq!(frames.len(), 31);
    approx(frames[0].values["pan"], 0.0, 1e-9);
    approx(frames[30].values["pan"], 30.0, 1e-9);
}

#[test]
fn regenerating_reflects_new_keyframes() {
    let mut store = dolly_pan_tilt();
    let before = store.generate_trajectory().unwrap();
    assert_eq!(before.len(), 209);

    store
        .add_keyframe(300u64, [("dolly", 410.0), ("pan", 95.0), ("tilt", 5.0)])
        .unwrap();
    let after = store.generate_trajectory().unwrap();
    assert_eq!(after.end_frame(), 300);
    assert_eq!(after.len(), 269);

    // The earlier trajectory is unaffected and still yields its own frames.
    assert_eq!(before.last().map(|f| f.frame), Some(240));
}

#[test]
fn last_write_wins_on_the_same_frame() {
    let mut store = dolly_pan_tilt();
    store
        .add_keyframe(240u64, [("dolly", 500.0), ("pan", 90.0), ("tilt", 0.0)])
        .unwrap();
    assert_eq!(store.keyframe_count(), 3);
    let last = store.generate_trajectory().unwrap().last().unwrap();
    assert_eq!(last.values["dolly"], 500.0);
}

#[test]
fn stopping_early_is_fine() {
    let mut t = dolly_pan_tilt().generate_trajectory().unwrap();
    let first_two: Vec<u64> = t.by_ref().take(2).map(|f| f.frame).collect();
    assert_eq!(first_two, [32, 33]);
    assert_eq!(t.len(), 207);
    drop(t);
}

#[test]
fn observer_sees_each_curve_once() {
    let store = dolly_pan_tilt();
    let mut observer = RecordingObserver::default();
    let t = store.generate_trajectory_observed(&mut observer).unwrap();
    assert_eq!(t.len(), 209);
    let names: Vec<&str> = observer.previews.iter().map(|p| p.movement.as_str()).collect();
    assert_eq!(names, ["dolly", "pan", "tilt"]);
    assert_eq!(observer.previews[0].samples.len(), 3);
    let points = &observer.previews[0].points;
    assert_eq!(points.len(), 20);
    assert_eq!(points[0], (32.0, 35.0));
    assert_eq!(points[19], (240.0, 400.0));
}
