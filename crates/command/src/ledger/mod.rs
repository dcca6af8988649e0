//! Command ledger: executes unit commands, keeps an undo stack guarded by
//! the active player, and hands its history to replay on request.

pub mod history;
pub mod systems;


pub use history::{CommandLedger, ReplayRequested, UndoOutcome, UndoRequested};
pub use systems::{
    drain_history_on_replay_request, execute_queued_commands, process_undo, LedgerPlugin,
};
