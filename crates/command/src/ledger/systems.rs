//! Systems that connect the ledger to the queue, the undo/replay requests and
//! the replay scheduler.

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use crate::players::ActivePlayer;
use crate::queue::{CommandQueue, CommandSource, QueuedCommand};
use crate::replay::{apply_replay_state_requests, ReplayScheduler};
use crate::result_log::{ExecutionLog, ExecutionOutcome};
use crate::units::UnitIndex;
use crate::CommandSet;

use super::history::{CommandLedger, ReplayRequested, UndoOutcome, UndoRequested};

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Drains the [`CommandQueue`] and runs every command in order.
///
/// Live commands are processed (executed and recorded); replayed commands are
/// only executed. Commands whose units cannot be resolved are dropped.
pub fn execute_queued_commands(world: &mut World) {
    let pending = world.resource_mut::<CommandQueue>().drain();
    if pending.is_empty() {
        return;
    }

    world.resource_scope(|world, mut ledger: Mut<CommandLedger>| {
        for QueuedCommand {
            source,
            mut command,
        } in pending
        {
            let record = *command.record();
            if !command.is_bound() {
                if let Err(err) = world.resource::<UnitIndex>().bind(&mut command) {
                    warn!(
                        "Dropping {:?} {} command: {}",
                        source,
                        command.kind().name(),
                        err
                    );
                    world.resource_mut::<ExecutionLog>().push(
                        source,
                        record,
                        ExecutionOutcome::Unbound(err),
                    );
                    continue;
                }
            }

            let outcome = if source.is_live() {
                ledger.process(command, world);
                ExecutionOutcome::Processed
            } else {
                ledger.execute(&mut command, world);
                ExecutionOutcome::Replayed
            };
            world
                .resource_mut::<ExecutionLog>()
                .push(source, record, outcome);
        }
    });
}

/// Handles [`UndoRequested`] events against the current [`ActivePlayer`].
pub fn process_undo(world: &mut World, mut cursor: Local<EventCursor<UndoRequested>>) {
    let requests = cursor
        .read(world.resource::<Events<UndoRequested>>())
        .count();
    if requests == 0 {
        return;
    }

    let active = *world.resource::<ActivePlayer>();
    world.resource_scope(|world, mut ledger: Mut<CommandLedger>| {
        for _ in 0..requests {
            match ledger.undo(&active, world) {
                UndoOutcome::Undone(record) => {
                    world.resource_mut::<ExecutionLog>().push(
                        CommandSource::Player,
                        record,
                        ExecutionOutcome::Undone,
                    );
                }
                outcome => debug!("Undo request ignored: {:?}", outcome),
            }
        }
    });
}

/// Moves the ledger history into the scheduler when a replay is requested.
pub fn drain_history_on_replay_request(
    mut requests: EventReader<ReplayRequested>,
    mut ledger: ResMut<CommandLedger>,
    mut scheduler: ResMut<ReplayScheduler>,
) {
    if requests.read().count() == 0 {
        return;
    }
    ledger.drain_to_replay(&mut scheduler);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Registers the ledger, its request events and the systems listening to them.
pub struct LedgerPlugin;

impl Plugin for LedgerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommandLedger>()
            .init_resource::<CommandQueue>()
            .init_resource::<ExecutionLog>()
            .init_resource::<UnitIndex>()
            .init_resource::<ActivePlayer>()
            .init_resource::<ReplayScheduler>()
            .add_event::<UndoRequested>()
            .add_event::<ReplayRequested>()
            .add_systems(
                Update,
                drain_history_on_replay_request
                    .in_set(CommandSet::Replay)
                    .before(apply_replay_state_requests),
            )
            .add_systems(Update, execute_queued_commands.in_set(CommandSet::Execute))
            .add_systems(Update, process_undo.in_set(CommandSet::Undo));
    }
}
