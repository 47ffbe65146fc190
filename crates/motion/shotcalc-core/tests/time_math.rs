use shotcalc_core::timecode::frames_per_day;
use shotcalc_core::{FrameAddress, MotionError, TimeAddress};

fn round_trip(fr: u32, n: u64) {
    let addr = TimeAddress::from_frame_number(fr, n).expect("frame number");
    assert_eq!(addr.to_frame_number(), n, "fr={fr} n={n}");
    let code = addr.display_code();
    let parsed = TimeAddress::from_code(fr, &code).expect("canonical code parses");
    assert_eq!(parsed.to_frame_number(), n, "fr={fr} code={code}");
    assert_eq!(parsed.display_code(), code);
}

#[test]
fn round_trip_every_frame_of_a_day_at_low_rate() {
    for n in 0..frames_per_day(2) {
        round_trip(2, n);
    }
}

#[test]
fn round_trip_sweeps_common_rates() {
    for fr in [24, 25, 30, 48, 60] {
        let day = frames_per_day(fr);
        // Stride co-prime with 60 so every field value gets visited.
        let mut n = 0;
        while n < day {
            round_trip(fr, n);
            n += 13;
        }
        round_trip(fr, day - 1);
    }
}

#[test]
fn last_frame_of_the_day() {
    let addr = TimeAddress::from_frame_number(24, frames_per_day(24) - 1).unwrap();
    assert_eq!(addr.display_code(), "23:59:59:23");
}

#[test]
fn ordering_follows_frame_numbers() {
    let fr = 24;
    let frames = [0u64, 1, 23, 24, 1439, 86_000, 2_000_000];
    for pair in frames.windows(2) {
        let a = TimeAddress::from_frame_number(fr, pair[0]).unwrap();
        let b = TimeAddress::from_frame_number(fr, pair[1]).unwrap();
        assert!(a < b, "{a} < {b}");
        assert!(b > a);
        assert_eq!(a.compare(&b), std::cmp::Ordering::Less);
    }
}

#[test]
fn codes_and_numbers_address_the_same_frame() {
    let pairs = [("00:00:01:04", 28u64), ("00:00:07:00", 168), ("00:00:10:00", 240)];
    for (code, n) in pairs {
        let a = FrameAddress::from(code).resolve(24).unwrap();
        let b = FrameAddress::from(n).resolve(24).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_frame_number(), n);
    }
}

#[test]
fn frames_field_must_stay_below_framerate() {
    assert!(TimeAddress::from_code(25, "00:00:00:24").is_ok());
    let err = TimeAddress::from_code(25, "00:00:00:25").unwrap_err();
    match err {
        MotionError::Format { input, reason } => {
            assert_eq!(input, "00:00:00:25");
            assert!(reason.contains("framerate"), "{reason}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn overlong_components_are_format_errors() {
    let err = TimeAddress::from_code(24, "99999999999999999999:00:00:00").unwrap_err();
    assert!(matches!(err, MotionError::Format { .. }));
    let err = TimeAddress::from_code(24, "9999999999999999:00:00:00").unwrap_err();
    assert!(matches!(err, MotionError::Format { .. }));
    let latest = TimeAddress::from_code(24, "99:99:99:23").expect("two-digit fields parse");
    assert!(latest.to_frame_number() < frames_per_day(24));
}
