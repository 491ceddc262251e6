//! Interpreter that converts a Symbios symbol sequence into a [`Script`].
//!
//! The entry point is [`ScriptInterpreter`]. Configure it with an
//! [`InterpreterConfig`], register symbol-to-operation mappings via
//! [`ScriptInterpreter::set_op`] or [`ScriptInterpreter::populate_standard_symbols`],
//! then call [`ScriptInterpreter::build_script`] with a [`symbios::SymbiosState`].

use crate::script::{Script, Step};
use std::f32::consts::PI;
use symbios::{SymbiosState, SymbolTable};
use tracing::debug;

/// Configuration for script interpretation.
#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Distance (meters) of a forward symbol without a parameter.
    pub default_distance: f32,
    /// Turn angle (degrees) of a turn symbol without a parameter.
    pub default_angle: f32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            default_distance: 0.5,
            default_angle: 90.0,
        }
    }
}

/// Operations a symbol can map to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionOp {
    /// Drive forward (`F`). Param: distance in meters.
    Forward,
    /// Turn in place (`+`/`-`). Param: angle in degrees, scaled by the sign.
    Turn(f32),
    /// Turn 180 degrees (`|`).
    TurnAround,
    /// Terminal stop (`S`).
    Stop,
    /// No-op. Symbol has no registered meaning.
    Ignore,
}

/// Interprets a symbol sequence to build a [`Script`].
pub struct ScriptInterpreter {
    op_map: Vec<MotionOp>,
    config: InterpreterConfig,
}

impl ScriptInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    ///
    /// `map` is indexed by symbol ID. IDs outside the slice are treated as
    /// [`MotionOp::Ignore`].
    pub fn with_map(mut self, map: Vec<MotionOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`MotionOp`] to a symbol ID, growing the map as needed.
    pub fn set_op(&mut self, sym_id: u16, op: MotionOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, MotionOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Registers the conventional mappings for every standard symbol present in
    /// `interner`: `F` forward, `+` counter-clockwise turn, `-` clockwise turn,
    /// `|` turn around, `S` stop. Absent symbols are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", MotionOp::Forward),
            ("+", MotionOp::Turn(1.0)),
            ("-", MotionOp::Turn(-1.0)),
            ("|", MotionOp::TurnAround),
            ("S", MotionOp::Stop),
        ];

        for (sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    /// Interprets the full `state` and returns the resulting [`Script`].
    ///
    /// Each mapped symbol becomes one step, in order. Forward distances are
    /// taken as magnitudes; turn angles keep the sign of the parameter times
    /// the symbol's own sign. Unmapped symbols produce nothing.
    pub fn build_script(&self, state: &SymbiosState) -> Script {
        let mut steps = Vec::new();

        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let op = self
                .op_map
                .get(view.sym as usize)
                .unwrap_or(&MotionOp::Ignore);

            let p = |idx: usize, def: f32| -> f32 {
                view.params.get(idx).map(|&x| x as f32).unwrap_or(def)
            };

            match op {
                MotionOp::Forward => {
                    steps.push(Step::forward(p(0, self.config.default_distance).abs()))
                }
                MotionOp::Turn(s) => {
                    let degrees = p(0, self.config.default_angle);
                    steps.push(Step::turn(degrees.to_radians() * s));
                }
                MotionOp::TurnAround => steps.push(Step::turn(PI)),
                MotionOp::Stop => steps.push(Step::stop()),
                MotionOp::Ignore => {}
            }
        }

        debug!(symbols = state.len(), steps = steps.len(), "script interpreted");
        Script::new(steps)
    }
}
