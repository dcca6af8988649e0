//! The command ledger resource and its marker events.

use bevy::prelude::*;

use crate::players::{ActivePlayerSource, PlayerId};
use crate::replay::ReplayScheduler;
use crate::unit_command::{CommandRecord, UnitCommand};

// ---------------------------------------------------------------------------
// CommandLedger resource
// ---------------------------------------------------------------------------

/// Executes unit commands and keeps the undo history.
///
/// `history` is a stack: the last element is the most recently executed
/// command that has not been undone.
#[derive(Resource, Debug, Default)]
pub struct CommandLedger {
    history: Vec<UnitCommand>,
}

/// What an [`CommandLedger::undo`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    Undone(CommandRecord),
    /// Nothing to undo.
    EmptyHistory,
    /// The top command belongs to someone other than the active player.
    NotActivePlayer { owner: PlayerId, active: PlayerId },
}

impl UndoOutcome {
    pub fn is_undone(&self) -> bool {
        matches!(self, UndoOutcome::Undone(_))
    }
}

impl CommandLedger {
    /// Execute `command` and record it for undo.
    pub fn process(&mut self, mut command: UnitCommand, world: &mut World) {
        self.execute(&mut command, world);
        self.register(command);
    }

    /// Execute `command` without recording it.
    pub fn execute(&self, command: &mut UnitCommand, world: &mut World) {
        command.execute(world);
    }

    /// Record an already executed command on top of the history.
    pub fn register(&mut self, command: UnitCommand) {
        self.history.push(command);
    }

    /// Undo the most recent command if it belongs to the active player.
    ///
    /// Only the top of the history is considered: when it is owned by another
    /// player nothing is undone, even if older entries belong to the active
    /// player.
    pub fn undo(&mut self, players: &impl ActivePlayerSource, world: &mut World) -> UndoOutcome {
        let Some(top) = self.history.last() else {
            return UndoOutcome::EmptyHistory;
        };

        let owner = top.record().actor_player();
        let active = players.active_player_id();
        if owner != active {
            debug!(
                "Undo denied: top command belongs to player {}, active player is {}",
                owner.0, active.0
            );
            return UndoOutcome::NotActivePlayer { owner, active };
        }

        match self.history.pop() {
            Some(mut command) => {
                command.undo(world);
                UndoOutcome::Undone(*command.record())
            }
            None => UndoOutcome::EmptyHistory,
        }
    }

    /// Hand the whole history to `scheduler`, oldest first, and clear it.
    pub fn drain_to_replay(&mut self, scheduler: &mut ReplayScheduler) {
        scheduler.set_command_stack(&self.history);
        info!("Drained {} commands into replay", self.history.len());
        self.history.clear();
    }

    /// The command the next undo would act on.
    pub fn peek(&self) -> Option<&UnitCommand> {
        self.history.last()
    }

    /// Recorded commands, oldest first.
    pub fn history(&self) -> &[UnitCommand] {
        &self.history
    }

    pub fn can_undo(&self, players: &impl ActivePlayerSource) -> bool {
        self.peek()
            .is_some_and(|top| top.record().actor_player() == players.active_player_id())
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Marker event: the active player wants to undo their last command.
#[derive(Event, Debug, Clone, Copy)]
pub struct UndoRequested;

/// Marker event: move the recorded history into the replay scheduler.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReplayRequested;
