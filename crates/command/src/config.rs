/// Seconds the replay scheduler waits before each replayed command.
pub const REPLAY_STEP_SECS: f32 = 1.0;

/// Shortest replay step interval the scheduler accepts.
pub const MIN_REPLAY_STEP_MILLIS: u64 = 1;

pub const BOARD_WIDTH: i32 = 16;
pub const BOARD_HEIGHT: i32 = 16;

/// Maximum Manhattan distance at which an attack connects.
pub const ATTACK_REACH: u32 = 1;

/// Number of entries retained by the execution log ring buffer.
pub const EXECUTION_LOG_CAPACITY: usize = 64;
