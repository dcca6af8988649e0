//! Timed playback of a drained command history.
//!
//! The ledger hands its history to the [`ReplayScheduler`]; while the
//! scheduler is active, [`drive_replay`] feeds one command per interval into
//! the `CommandQueue` tagged as `CommandSource::Replay`.

pub mod plugin;
pub mod scheduler;

pub use plugin::{apply_replay_state_requests, drive_replay, ReplayPlugin, SetReplayState};
pub use scheduler::{ReplayScheduler, ReplayState};
