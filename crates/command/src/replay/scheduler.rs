//! Replay scheduler: plays a drained command history back, one command per
//! fixed interval, through the same pipeline live commands use.
//!
//! The scheduler never changes its own [`ReplayState`]. Whoever drives it
//! (see [`drive_replay`](super::plugin::drive_replay)) decides whether to keep
//! calling [`ReplayScheduler::tick`], which is also how playback is paused.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{MIN_REPLAY_STEP_MILLIS, REPLAY_STEP_SECS};
use crate::queue::{CommandSink, CommandSource};
use crate::unit_command::UnitCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplayState {
    Active,
    #[default]
    Inactive,
}

#[derive(Resource, Debug, Clone)]
pub struct ReplayScheduler {
    /// Oldest executed command at the front.
    queue: VecDeque<UnitCommand>,
    state: ReplayState,
    step_timer: Timer,
}

impl Default for ReplayScheduler {
    fn default() -> Self {
        Self::with_interval(Duration::from_secs_f32(REPLAY_STEP_SECS))
    }
}

impl ReplayScheduler {
    /// A scheduler stepping every `interval`.
    ///
    /// Intervals shorter than [`MIN_REPLAY_STEP_MILLIS`] are raised to it.
    pub fn with_interval(interval: Duration) -> Self {
        let min = Duration::from_millis(MIN_REPLAY_STEP_MILLIS);
        if interval < min {
            warn!("Replay interval {:?} too short, using {:?}", interval, min);
        }
        let interval = interval.max(min);
        Self {
            queue: VecDeque::new(),
            state: ReplayState::Inactive,
            step_timer: Timer::new(interval, TimerMode::Repeating),
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn set_replay_state(&mut self, state: ReplayState) {
        if self.state != state {
            info!("Replay state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    /// Replace the replay queue with copies of `history` (oldest first).
    ///
    /// The copies are fresh commands, so later changes to `history` cannot
    /// leak into playback. Restarts the step interval.
    pub fn set_command_stack(&mut self, history: &[UnitCommand]) {
        self.queue = history.iter().map(UnitCommand::fresh_copy).collect();
        self.step_timer.reset();
        info!("Replay loaded with {} commands", self.queue.len());
    }

    /// Perform one replay step immediately: submit the oldest remaining
    /// command to `sink` as a replay command.
    ///
    /// Returns `false` without doing anything once the queue is exhausted.
    pub fn execute_next(&mut self, sink: &mut impl CommandSink) -> bool {
        match self.queue.pop_front() {
            Some(command) => {
                debug!(
                    "Replaying {} for unit {} ({} left)",
                    command.kind().name(),
                    command.record().actor_unit().0,
                    self.queue.len()
                );
                sink.submit(CommandSource::Replay, command);
                true
            }
            None => false,
        }
    }

    /// Advance the step interval by `delta`, running one
    /// [`execute_next`](Self::execute_next) for every interval that elapsed.
    ///
    /// Returns the number of steps taken, including steps that found the
    /// queue empty.
    pub fn tick(&mut self, delta: Duration, sink: &mut impl CommandSink) -> u32 {
        self.step_timer.tick(delta);
        let steps = self.step_timer.times_finished_this_tick();
        for _ in 0..steps {
            self.execute_next(sink);
        }
        steps
    }

    pub fn interval(&self) -> Duration {
        self.step_timer.duration()
    }

    /// Commands still waiting to be replayed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &UnitCommand> {
        self.queue.iter()
    }
}
