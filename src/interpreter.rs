//! Interpreter that drives a [`Probe`] from a list of command tokens.
//!
//! The entry point is [`CommandInterpreter`]. Build one with
//! [`CommandInterpreter::standard`], or [`CommandInterpreter::new`] followed by
//! [`set_op`](CommandInterpreter::set_op) and
//! [`populate_standard_commands`](CommandInterpreter::populate_standard_commands).
//! Then call [`CommandInterpreter::execute`].

use crate::probe::{Probe, ProbeOp};
use crate::report::{ExecutionResult, InvalidCommand, InvalidReason};
use std::collections::HashMap;
use tracing::debug;

/// Maps single-character command tokens to probe operations.
#[derive(Clone, Debug, Default)]
pub struct CommandInterpreter {
    op_map: HashMap<char, ProbeOp>,
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty command table. Every token is invalid until
    /// operations are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter bound to the standard command table.
    pub fn standard() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_commands();
        interpreter
    }

    /// Replaces the entire command table in one step (builder pattern).
    pub fn with_map(mut self, map: impl IntoIterator<Item = (char, ProbeOp)>) -> Self {
        self.op_map.clear();
        for (symbol, op) in map {
            self.set_op(symbol, op);
        }
        self
    }

    /// Binds `symbol` (case-insensitively) to `op`, replacing any previous binding.
    pub fn set_op(&mut self, symbol: char, op: ProbeOp) {
        self.op_map.insert(symbol.to_ascii_uppercase(), op);
    }

    /// Registers the standard bindings:
    ///
    /// | token | operation |
    /// |-------|-----------|
    /// | `F` | move forward |
    /// | `B` | move backward |
    /// | `U` | turn up |
    /// | `D` | turn down |
    /// | `L` | turn left |
    /// | `R` | turn right |
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            // Movement
            ('F', ProbeOp::MoveForward),
            ('B', ProbeOp::MoveBackward),
            // Vertical rotation
            ('U', ProbeOp::TurnUp),
            ('D', ProbeOp::TurnDown),
            // Horizontal rotation
            ('L', ProbeOp::TurnLeft),
            ('R', ProbeOp::TurnRight),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Resolves a token to its operation.
    ///
    /// Only tokens of exactly one character are considered; absent, empty and
    /// multi-character tokens resolve to `None`, as do characters with no binding.
    pub fn resolve(&self, token: Option<&str>) -> Option<ProbeOp> {
        let mut chars = token?.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        self.op_map.get(&symbol.to_ascii_uppercase()).copied()
    }

    /// Runs every token against `probe`, in order, and returns the counters.
    ///
    /// Execution never stops early. Invalid tokens are recorded with their original
    /// index and otherwise ignored. A movement token whose step leaves the position
    /// unchanged counts as blocked; rotations are never blocked.
    pub fn execute<'a, I>(&self, commands: I, probe: &mut Probe<'_>) -> ExecutionResult
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut result = ExecutionResult::default();

        for (index, token) in commands.into_iter().enumerate() {
            result.total_commands += 1;

            let Some(op) = self.resolve(token) else {
                debug!(index, token, "unknown command");
                result.invalid_commands.push(InvalidCommand {
                    index,
                    command: token.map(str::to_owned),
                    reason: InvalidReason::UnknownCommand,
                });
                continue;
            };

            if op.is_movement() {
                let before = probe.position();
                probe.apply(op);
                if probe.position() == before {
                    debug!(index, ?op, position = %before, "move blocked");
                    result.blocked_moves += 1;
                }
            } else {
                probe.apply(op);
            }
        }

        result.executed_commands = result.total_commands;
        debug!(
            total = result.total_commands,
            blocked = result.blocked_moves,
            invalid = result.invalid_commands.len(),
            "commands executed"
        );
        result
    }
}
