//! Command value types: variants, applied effects and binding errors.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::units::{BoardPosition, UnitId};

use super::record::CommandRecord;

// ---------------------------------------------------------------------------
// CommandKind: what the command does
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    /// Relocate the actor to `to`.
    Move { to: BoardPosition },
    /// Deal `power` damage to the target.
    Attack { power: u32 },
    /// Restore up to `amount` health on the target.
    Heal { amount: u32 },
}

impl CommandKind {
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Move { .. } => "move",
            CommandKind::Attack { .. } => "attack",
            CommandKind::Heal { .. } => "heal",
        }
    }
}

// ---------------------------------------------------------------------------
// AppliedEffect: what `execute` changed, kept so `undo` can reverse it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedEffect {
    Moved { from: BoardPosition },
    Damaged { dealt: u32 },
    Healed { restored: u32 },
    /// A bound entity was missing the components the command needs.
    Skipped,
}

// ---------------------------------------------------------------------------
// UnitCommand
// ---------------------------------------------------------------------------

/// A single reversible unit action.
///
/// Built from a [`CommandRecord`] of IDs; the live actor/target entities are
/// attached later with the binding setters or [`UnitIndex::bind`].
///
/// [`UnitIndex::bind`]: crate::units::UnitIndex::bind
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCommand {
    pub(super) record: CommandRecord,
    pub(super) kind: CommandKind,
    pub(super) actor: Option<Entity>,
    pub(super) target: Option<Entity>,
    pub(super) applied: Option<AppliedEffect>,
}

impl UnitCommand {
    pub fn new(record: CommandRecord, kind: CommandKind) -> Self {
        Self {
            record,
            kind,
            actor: None,
            target: None,
            applied: None,
        }
    }

    pub fn record(&self) -> &CommandRecord {
        &self.record
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn set_actor_unit(&mut self, actor: Entity) {
        self.actor = Some(actor);
    }

    pub fn set_target_unit(&mut self, target: Entity) {
        self.target = Some(target);
    }

    pub fn actor_unit(&self) -> Option<Entity> {
        self.actor
    }

    pub fn target_unit(&self) -> Option<Entity> {
        self.target
    }

    /// Whether every unit the record references has a live handle attached.
    pub fn is_bound(&self) -> bool {
        self.actor.is_some() && (self.record.target_unit().is_none() || self.target.is_some())
    }

    /// Whether `execute` has run and has not been undone yet.
    pub fn is_executed(&self) -> bool {
        self.applied.is_some()
    }

    pub fn applied_effect(&self) -> Option<AppliedEffect> {
        self.applied
    }

    /// A new, never-executed, unbound instance of the same action.
    ///
    /// Replay uses this so that replayed commands re-resolve their units
    /// and never carry undo state from an earlier execution.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.record, self.kind)
    }
}

// ---------------------------------------------------------------------------
// BindError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    UnknownActor(UnitId),
    UnknownTarget(UnitId),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::UnknownActor(id) => write!(f, "no live unit for actor {}", id.0),
            BindError::UnknownTarget(id) => write!(f, "no live unit for target {}", id.0),
        }
    }
}

impl std::error::Error for BindError {}
