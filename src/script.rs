//! Step scripts: the immutable route a [`Sequencer`](crate::Sequencer) walks through.

use crate::error::{Result, ScriptError};
use crate::pose::Pose;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::ops::Index;

/// Conversion factor for routes measured on the field in inches.
pub const METERS_PER_INCH: f32 = 0.0254;

/// The motion primitive a step asks the drive layer to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Drive until the accumulated position reaches the target.
    Forward,
    /// Turn in place until the accumulated heading reaches the target.
    Turn,
    /// Terminal marker. Completes the first time it is visited.
    Stop,
}

impl StepKind {
    /// Telemetry label reported under the `"State"` key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Forward => "FWD",
            Self::Turn => "TURN",
            Self::Stop => "STOP",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single entry of a script.
///
/// `target` is measured in the local frame that starts at the previous step's
/// completion. Forward steps compare position only, Turn steps compare heading
/// only, and Stop steps ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub target: Pose,
}

impl Step {
    pub fn new(kind: StepKind, target: Pose) -> Self {
        Self { kind, target }
    }

    /// Drive `meters` along the local x axis.
    pub fn forward(meters: f32) -> Self {
        Self::new(StepKind::Forward, Pose::linear(meters))
    }

    /// Turn in place by `radians` (counter-clockwise positive).
    pub fn turn(radians: f32) -> Self {
        Self::new(StepKind::Turn, Pose::heading(radians))
    }

    pub fn stop() -> Self {
        Self::new(StepKind::Stop, Pose::ZERO)
    }
}

/// An ordered, fixed sequence of steps.
///
/// Built once and never modified; the sequencer only reads it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn builder() -> ScriptBuilder {
        ScriptBuilder::default()
    }

    /// Zips a table of kinds with a table of targets of the same length.
    ///
    /// Routes are often authored as two columns side by side; a length mismatch
    /// means the columns drifted apart and is rejected.
    pub fn from_tables(kinds: &[StepKind], targets: &[Pose]) -> Result<Self> {
        if kinds.len() != targets.len() {
            return Err(ScriptError::LengthMismatch {
                kinds: kinds.len(),
                targets: targets.len(),
            });
        }
        let steps = kinds
            .iter()
            .zip(targets)
            .map(|(&kind, &target)| Step::new(kind, target))
            .collect();
        Ok(Self { steps })
    }

    /// The two-bin autonomous route: out to the first bin, around it, across to
    /// the second, and back to park.
    pub fn two_bin_route() -> Self {
        let inches = |d: f32| Step::forward(d * METERS_PER_INCH);
        let right = || Step::turn(-FRAC_PI_2);

        Self::new(vec![
            inches(80.25),
            right(),
            inches(22.25),
            right(),
            right(),
            inches(22.25), // first bin done
            right(),
            inches(81.125),
            right(),
            inches(22.25),
            right(),
            right(),
            inches(22.25), // second bin done
            right(),
            inches(50.75),
            Step::stop(),
        ])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Index<usize> for Script {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl FromIterator<Step> for Script {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Fluent construction of a [`Script`].
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder {
    steps: Vec<Step>,
}

impl ScriptBuilder {
    pub fn forward(mut self, meters: f32) -> Self {
        self.steps.push(Step::forward(meters));
        self
    }

    pub fn turn(mut self, radians: f32) -> Self {
        self.steps.push(Step::turn(radians));
        self
    }

    pub fn stop(mut self) -> Self {
        self.steps.push(Step::stop());
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> Script {
        Script::new(self.steps)
    }
}
