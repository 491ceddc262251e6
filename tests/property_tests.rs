//! Property-based tests for the sequencer
//!
//! These tests verify:
//! - The cursor never moves backwards and never passes the script end
//! - The terminal state is inert
//! - Heading normalization stays in (-π, π]

use motion_sequencer::{
    Pose, RecordingSink, Script, Sequencer, Step, StepKind, TickOutcome, normalize_angle,
};
use proptest::prelude::*;
use std::f32::consts::PI;

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-3.0f32..3.0).prop_map(Step::forward),
        (-3.0f32..3.0).prop_map(Step::turn),
        Just(Step::stop()),
    ]
}

fn script_strategy() -> impl Strategy<Value = Script> {
    prop::collection::vec(step_strategy(), 0..12).prop_map(Script::new)
}

fn pose_strategy() -> impl Strategy<Value = Pose> {
    (-3.0f32..3.0, -3.0f32..3.0, -7.0f32..7.0).prop_map(|(x, y, theta)| Pose::new(x, y, theta))
}

proptest! {
    /// Cursor is monotone and capped at the script length
    #[test]
    fn cursor_is_monotone(
        script in script_strategy(),
        poses in prop::collection::vec(pose_strategy(), 0..64),
    ) {
        let len = script.len();
        let mut seq = Sequencer::with_telemetry(script, RecordingSink::new());
        let mut last = seq.current_index();
        for mut pose in poses {
            let outcome = seq.tick(&mut pose);
            let now = seq.current_index();
            prop_assert!(now >= last);
            prop_assert!(now <= len);
            prop_assert_eq!(outcome == TickOutcome::Advanced, now == last + 1);
            prop_assert_eq!(seq.is_done(), now >= len);
            last = now;
        }
    }

    /// Once done, ticks change nothing and report nothing
    #[test]
    fn done_is_inert(
        script in script_strategy(),
        poses in prop::collection::vec(pose_strategy(), 1..16),
    ) {
        // Only Stop steps, so the run finishes in exactly len ticks.
        let stops: Script = script.iter().map(|_| Step::stop()).collect();
        let len = stops.len();
        let mut seq = Sequencer::with_telemetry(stops, RecordingSink::new());
        for _ in 0..len {
            prop_assert_eq!(seq.tick(&mut Pose::default()), TickOutcome::Advanced);
        }
        prop_assert!(seq.is_done());

        let recorded = seq.telemetry().len();
        for start in poses {
            let mut pose = start;
            prop_assert_eq!(seq.tick(&mut pose), TickOutcome::Done);
            prop_assert_eq!(pose, start);
            prop_assert_eq!(seq.current_kind(), StepKind::Stop);
            prop_assert_eq!(seq.current_index(), len);
        }
        prop_assert_eq!(seq.telemetry().len(), recorded);
    }

    /// Stop completes regardless of pose
    #[test]
    fn stop_always_completes(start in pose_strategy()) {
        let script = Script::new(vec![Step::stop()]);
        let mut seq = Sequencer::with_telemetry(script, RecordingSink::new());
        let mut pose = start;
        prop_assert_eq!(seq.tick(&mut pose), TickOutcome::Advanced);
        prop_assert_eq!(pose, start);
        prop_assert!(seq.is_done());
    }

    /// Normalized heading stays in the half-open range
    #[test]
    fn normalize_angle_range(angle in -100.0f32..100.0) {
        let a = normalize_angle(angle);
        prop_assert!(a > -PI - 1e-5 && a <= PI + 1e-5, "{} -> {}", angle, a);
        // Same direction on the circle.
        prop_assert!((a.sin() - angle.sin()).abs() < 1e-3);
        prop_assert!((a.cos() - angle.cos()).abs() < 1e-3);
    }
}
