use shotcalc_core::baking::{bake_trajectory, BakingConfig};
use shotcalc_core::{FrameAddress, MotionError, Project};

#[test]
fn dolly_pan_tilt_fixture_bakes_209_frames() {
    let json = shotcalc_test_fixtures::projects::json("dolly-pan-tilt").expect("fixture");
    let project = Project::from_json(&json).expect("parse project");
    assert_eq!(project.framerate, 24);
    assert_eq!(project.movements(), ["dolly", "pan", "tilt"]);
    assert_eq!(project.data[1].0, Some(FrameAddress::Code("00:00:07:00".into())));

    let store = project.to_store().expect("store");
    let baked = bake_trajectory(&store, &BakingConfig::default()).expect("bake");
    assert_eq!(baked.start_frame, 32);
    assert_eq!(baked.end_frame, 240);
    assert_eq!(baked.frame_count(), 209);
    assert_eq!(baked.track("dolly").unwrap().values[0], 35.0);
    assert_eq!(baked.track("tilt").unwrap().values[208], 0.0);
}

#[test]
fn table_rows_skip_blanks_and_keep_the_last_duplicate() {
    let project: Project =
        shotcalc_test_fixtures::projects::load("table-rows").expect("fixture");
    assert_eq!(project.data.len(), 6);
    assert_eq!(project.valid_rows().count(), 4);

    let store = project.to_store().expect("store");
    assert_eq!(store.framerate(), 32);
    assert_eq!(store.keyframe_count(), 3);
    assert_eq!(store.span(), Some((32, 36)));

    let frames: Vec<_> = store.generate_trajectory().unwrap().collect();
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0].values["dolly"], 35.0);
    assert_eq!(frames[4].values["dolly"], 410.0);
    assert_eq!(frames[4].values["pan"], 95.0);
}

#[test]
fn single_pan_key_fixture_fails_on_pan() {
    let json = shotcalc_test_fixtures::projects::json("single-pan-key").expect("fixture");
    let store = Project::from_json(&json).unwrap().to_store().unwrap();
    let err = bake_trajectory(&store, &BakingConfig::default()).unwrap_err();
    assert_eq!(
        err,
        MotionError::InsufficientData {
            movement: "pan".into(),
            found: 1
        }
    );
}
