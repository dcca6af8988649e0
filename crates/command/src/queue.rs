//! Pending unit commands waiting for the executor.
//!
//! Live play and replay both push here; [`execute_queued_commands`] drains the
//! queue once per frame, so replayed commands travel the same path as live ones.
//!
//! [`execute_queued_commands`]: crate::ledger::execute_queued_commands

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::unit_command::UnitCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandSource {
    Player,
    Agent,
    Replay,
}

impl CommandSource {
    /// Live commands are recorded for undo; replayed ones are not.
    pub fn is_live(&self) -> bool {
        !matches!(self, CommandSource::Replay)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedCommand {
    pub source: CommandSource,
    pub command: UnitCommand,
}

/// Anything that accepts commands into the execution pipeline.
pub trait CommandSink {
    fn submit(&mut self, source: CommandSource, command: UnitCommand);
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CommandQueue {
    pending: Vec<QueuedCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, source: CommandSource, command: UnitCommand) {
        self.pending.push(QueuedCommand { source, command });
    }

    pub fn drain(&mut self) -> Vec<QueuedCommand> {
        self.pending.drain(..).collect()
    }

    pub fn pending(&self) -> &[QueuedCommand] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl CommandSink for CommandQueue {
    fn submit(&mut self, source: CommandSource, command: UnitCommand) {
        self.push(source, command);
    }
}
