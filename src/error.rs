//! Errors raised while authoring a [`Script`](crate::Script).
//!
//! Running a script never fails; only assembling one from loose tables can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// The step-kind table and the target table disagree in length.
    #[error("step table has {kinds} kinds but {targets} targets")]
    LengthMismatch { kinds: usize, targets: usize },
}

pub type Result<T> = std::result::Result<T, ScriptError>;
