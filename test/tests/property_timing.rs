/// PROPERTY-BASED TESTS: timing invariants
///
/// Key invariants:
/// 1. Beat offsets stay in [-1, 1] and slider lengths stay non-negative
/// 2. A degenerate window never scores
/// 3. Power stays in [0, 1]
/// 4. A press exactly on the target beat is always valid
use proptest::prelude::*;

use cadence_shared::{
    command_power, is_valid, unlerp, window_score, Beat, ExecutingCommandState, FlowPressure,
    RhythmConfig, DEFAULT_SCORE_LIMIT,
};

proptest! {
    #[test]
    fn prop_offset_is_clamped(offset in proptest::num::f64::ANY) {
        let mut beat = Beat::new(0);
        beat.set_offset(offset);
        prop_assert!((-1.0..=1.0).contains(&beat.offset()));
        prop_assert_eq!(Beat::new(2).with_offset(offset).offset(), beat.offset());
    }

    #[test]
    fn prop_slider_length_is_never_negative(length in any::<i32>()) {
        let beat = Beat::new(0).with_slider_length(length);
        prop_assert!(beat.slider_length() >= 0);
        prop_assert!(beat.end_target() >= beat.target());
    }

    #[test]
    fn prop_degenerate_window_is_zero(a in -1.0e9f64..1.0e9, x in -1.0e9f64..1.0e9) {
        prop_assert_eq!(unlerp(a, a, x), 0.0);
    }

    #[test]
    fn prop_power_is_bounded(scores in prop::collection::vec(-1.0f32..1.0, 0..16)) {
        let progression: Vec<FlowPressure> = scores
            .iter()
            .map(|score| FlowPressure { score: *score, ..Default::default() })
            .collect();
        let power = command_power(&progression, &RhythmConfig::default());
        prop_assert!((0.0..=1.0).contains(&power));

        let mut executing = ExecutingCommandState::default();
        executing.set_power(power * 3.0 - 1.0);
        prop_assert!((0.0..=1.0).contains(&executing.power()));
    }

    #[test]
    fn prop_on_beat_press_is_valid(
        target in 0i32..64,
        command_start in 0i64..100_000,
        beat_interval in 1i64..2_000,
        score_limit in 0.001f64..4.0,
    ) {
        let elapsed = command_start + target as i64 * beat_interval;
        prop_assert_eq!(window_score(target, 0.0, command_start, elapsed, beat_interval), 0.0);
        prop_assert!(is_valid(target, 0.0, command_start, elapsed, beat_interval, score_limit));
    }

    #[test]
    fn prop_window_is_half_open(
        target in 0i32..64,
        beat_interval in (1i64..400).prop_map(|fifth| fifth * 5),
    ) {
        let on_beat = target as i64 * beat_interval;
        // 0.6 of a beat
        let limit = beat_interval * 3 / 5;
        prop_assert!(!is_valid(target, 0.0, 0, on_beat + limit, beat_interval, DEFAULT_SCORE_LIMIT));
        prop_assert!(!is_valid(target, 0.0, 0, on_beat - limit, beat_interval, DEFAULT_SCORE_LIMIT));
        prop_assert!(is_valid(target, 0.0, 0, on_beat + limit - 1, beat_interval, DEFAULT_SCORE_LIMIT));
    }
}

#[test]
fn half_beat_late_is_still_valid() {
    assert!(is_valid(4, 0.0, 0, 2000, 500, DEFAULT_SCORE_LIMIT));
    assert!(is_valid(4, 0.0, 0, 2250, 500, DEFAULT_SCORE_LIMIT));
    assert!(!is_valid(4, 0.0, 0, 2300, 500, DEFAULT_SCORE_LIMIT));
}
