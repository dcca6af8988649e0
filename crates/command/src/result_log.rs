//! Ring-buffer log of recent command executions and undos.
//!
//! The [`ExecutionLog`] resource keeps the last [`EXECUTION_LOG_CAPACITY`]
//! entries so spectators, UI and tests can see what happened without
//! inspecting the ledger or the world every frame.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::EXECUTION_LOG_CAPACITY;
use crate::queue::CommandSource;
use crate::unit_command::{BindError, CommandRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Executed and registered for undo.
    Processed,
    /// Executed without registering (replay).
    Replayed,
    Undone,
    /// Dropped before execution because its units could not be resolved.
    Unbound(BindError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub source: CommandSource,
    pub record: CommandRecord,
    pub outcome: ExecutionOutcome,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ExecutionLog {
    entries: VecDeque<LogEntry>,
}

impl ExecutionLog {
    /// Record an entry, evicting the oldest one when full.
    pub fn push(&mut self, source: CommandSource, record: CommandRecord, outcome: ExecutionOutcome) {
        if self.entries.len() >= EXECUTION_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            source,
            record,
            outcome,
        });
    }

    /// The last `n` entries (or fewer), oldest first.
    pub fn last_n(&self, n: usize) -> Vec<&LogEntry> {
        let start = self.entries.len().saturating_sub(n);
        self.entries.range(start..).collect()
    }

    /// The most recent entry for `record`, if it is still retained.
    pub fn latest_for(&self, record: &CommandRecord) -> Option<&LogEntry> {
        self.entries.iter().rev().find(|entry| entry.record == *record)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
