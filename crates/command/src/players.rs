//! Player identity and the active-player lookup used by undo.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Answers "which player is currently allowed to act".
pub trait ActivePlayerSource {
    fn active_player_id(&self) -> PlayerId;
}

impl ActivePlayerSource for PlayerId {
    fn active_player_id(&self) -> PlayerId {
        *self
    }
}

/// The player whose turn it is. Turn flow outside this crate updates it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePlayer(pub PlayerId);

impl Default for ActivePlayer {
    fn default() -> Self {
        Self(PlayerId(1))
    }
}

impl ActivePlayerSource for ActivePlayer {
    fn active_player_id(&self) -> PlayerId {
        self.0
    }
}
