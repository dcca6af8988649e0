//! Bevy plugin that registers the replay scheduler and drives it each frame.

use bevy::prelude::*;

use super::scheduler::{ReplayScheduler, ReplayState};
use crate::queue::CommandQueue;
use crate::CommandSet;

/// UI request to start or pause playback.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetReplayState(pub ReplayState);

pub fn apply_replay_state_requests(
    mut requests: EventReader<SetReplayState>,
    mut scheduler: ResMut<ReplayScheduler>,
) {
    for request in requests.read() {
        scheduler.set_replay_state(request.0);
    }
}

/// Resumes the scheduler with this frame's delta while playback is active.
///
/// Replayed commands land in the [`CommandQueue`] and are executed by the
/// executor later in the same frame.
pub fn drive_replay(
    time: Res<Time>,
    mut scheduler: ResMut<ReplayScheduler>,
    mut queue: ResMut<CommandQueue>,
) {
    if scheduler.state() != ReplayState::Active {
        return;
    }
    scheduler.tick(time.delta(), &mut *queue);
}

pub struct ReplayPlugin;

impl Plugin for ReplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReplayScheduler>()
            .init_resource::<CommandQueue>()
            .add_event::<SetReplayState>()
            .add_systems(
                Update,
                (apply_replay_state_requests, drive_replay)
                    .chain()
                    .in_set(CommandSet::Replay),
            );
    }
}
