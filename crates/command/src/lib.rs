use bevy::prelude::*;

pub mod config;
pub mod ledger;
pub mod players;
pub mod queue;
pub mod replay;
pub mod result_log;
pub mod unit_command;
pub mod units;

#[cfg(test)]
pub mod test_harness;

pub use ledger::{CommandLedger, LedgerPlugin, ReplayRequested, UndoOutcome, UndoRequested};
pub use replay::{ReplayPlugin, ReplayScheduler, ReplayState, SetReplayState};
pub use unit_command::{CommandKind, CommandRecord, UnitCommand};

/// Ordering of the command systems inside `Update`.
///
/// Replay runs first so that commands it releases are executed in the same
/// frame; undo runs last so it sees everything executed this frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandSet {
    Replay,
    Execute,
    Undo,
}

pub struct CommandPlugin;

impl Plugin for CommandPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (CommandSet::Replay, CommandSet::Execute, CommandSet::Undo).chain(),
        );
        app.add_plugins((LedgerPlugin, ReplayPlugin));
    }
}
