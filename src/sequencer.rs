//! The step sequencer.
//!
//! A [`Sequencer`] walks a [`Script`] one step at a time. The host control loop
//! calls [`Sequencer::tick`] with the latest odometry pose; the sequencer checks
//! whether the active step's target has been reached and, if so, zeroes the pose
//! and moves on. It never drives motors itself: the actuation layer reads
//! [`Sequencer::current_kind`] and decides what power to apply.
//!
//! ```text
//!  step 0 ──reached──▶ step 1 ──reached──▶ … ──▶ step N-1 ──reached──▶ DONE
//!    ▲ │                 ▲ │
//!    └─┘ not yet         └─┘ not yet
//! ```
//!
//! `DONE` is absorbing. There is no rewind; a new run builds a new sequencer.

use crate::pose::Pose;
use crate::script::{Script, Step, StepKind};
use crate::telemetry::{FORWARD_ERROR_KEY, STATE_KEY, TelemetrySink, TracingSink};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

/// Distance (meters) within which a Forward step counts as reached.
pub const FWD_TOLERANCE: f32 = 0.04;

/// Heading error (radians) within which a Turn step counts as reached.
pub const TURN_TOLERANCE: f32 = 0.09;

/// Completion thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Maximum remaining distance for a Forward step, in meters.
    pub forward_tolerance: f32,
    /// Maximum absolute heading error for a Turn step, in radians.
    pub turn_tolerance: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            forward_tolerance: FWD_TOLERANCE,
            turn_tolerance: TURN_TOLERANCE,
        }
    }
}

/// What a single [`Sequencer::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active step is not finished yet.
    Holding,
    /// The active step finished and the cursor moved past it.
    Advanced,
    /// The script was already exhausted; nothing happened.
    Done,
}

/// Table-driven step sequencer.
///
/// Telemetry goes to `T`, which defaults to [`TracingSink`].
#[derive(Debug)]
pub struct Sequencer<T = TracingSink> {
    script: Script,
    config: SequencerConfig,
    current_index: usize,
    telemetry: T,
}

impl Sequencer<TracingSink> {
    /// Creates a sequencer positioned at the first step, reporting through `tracing`.
    pub fn new(script: Script) -> Self {
        Self::with_telemetry(script, TracingSink)
    }
}

impl<T: TelemetrySink> Sequencer<T> {
    /// Creates a sequencer that reports into `telemetry`.
    pub fn with_telemetry(script: Script, telemetry: T) -> Self {
        if script.is_empty() {
            info!("sequencer created with an empty script");
        }
        Self {
            script,
            config: SequencerConfig::default(),
            current_index: 0,
            telemetry,
        }
    }

    /// Replaces the completion thresholds (builder pattern).
    pub fn with_config(mut self, config: SequencerConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluates the active step against `pose`.
    ///
    /// On completion of a Forward or Turn step `pose` is reset to the origin so
    /// the next step measures from where this one ended. Stop steps complete
    /// immediately and leave `pose` alone. Once the script is exhausted this is
    /// a no-op: no telemetry, no pose change.
    pub fn tick(&mut self, pose: &mut Pose) -> TickOutcome {
        let Some(step) = self.script.get(self.current_index).copied() else {
            return TickOutcome::Done;
        };

        self.telemetry.add_data(STATE_KEY, step.kind.label().into());

        let reached = match step.kind {
            StepKind::Forward => {
                let err = pose.distance_to(&step.target);
                self.telemetry.add_data(FORWARD_ERROR_KEY, err.into());
                trace!(index = self.current_index, err, "forward");
                err <= self.config.forward_tolerance
            }
            StepKind::Turn => {
                let err = pose.angle_to(&step.target);
                trace!(index = self.current_index, err, "turn");
                err.abs() <= self.config.turn_tolerance
            }
            StepKind::Stop => true,
        };

        if !reached {
            return TickOutcome::Holding;
        }

        if step.kind != StepKind::Stop {
            pose.reset();
        }
        self.advance(step);
        TickOutcome::Advanced
    }

    fn advance(&mut self, finished: Step) {
        info!(
            index = self.current_index,
            kind = %finished.kind,
            "step complete"
        );
        self.current_index += 1;
        if self.is_done() {
            info!(steps = self.script.len(), "script finished");
        }
    }

    /// Kind of the active step, or [`StepKind::Stop`] once the script is exhausted.
    pub fn current_kind(&self) -> StepKind {
        self.current_step().map_or(StepKind::Stop, |step| step.kind)
    }

    /// `true` once every step has completed.
    pub fn is_done(&self) -> bool {
        self.current_index >= self.script.len()
    }

    /// Index of the active step; equals the script length once done.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The active step, or `None` once the script is exhausted.
    pub fn current_step(&self) -> Option<&Step> {
        self.script.get(self.current_index)
    }

    /// Number of steps not yet completed.
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.current_index)
    }

    /// The script being walked.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// The completion thresholds in effect.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// The telemetry sink.
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// Consumes the sequencer and hands back its telemetry sink.
    pub fn into_telemetry(self) -> T {
        self.telemetry
    }
}
