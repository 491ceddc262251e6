//! # motion-sequencer
//!
//! A deterministic, table-driven step sequencer for autonomous ground robots.
//!
//! A route is authored as a [`Script`] of motion primitives (drive forward, turn
//! in place, stop). Every control-loop iteration the host feeds the current
//! odometry [`Pose`] into [`Sequencer::tick`]; the sequencer advances to the next
//! step once the pose is within tolerance of the active target and zeroes the
//! pose so the next step starts from a fresh local frame.
//!
//! Pose acquisition, motor power and telemetry transport belong to the host.
//! Routes can also be produced from a [Symbios](https://crates.io/crates/symbios)
//! symbol stream with [`ScriptInterpreter`].

pub mod error;
pub mod interpreter;
pub mod pose;
pub mod script;
pub mod sequencer;
pub mod telemetry;

pub use error::ScriptError;
pub use interpreter::*;
pub use pose::*;
pub use script::*;
pub use sequencer::*;
pub use telemetry::*;
