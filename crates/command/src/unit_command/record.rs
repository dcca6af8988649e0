//! The actor/target identity of a single unit command.

use serde::{Deserialize, Serialize};

use crate::players::PlayerId;
use crate::units::UnitId;

/// Who issued a command and what it is aimed at.
///
/// Fields are read-only after construction. `actor_player` decides who may
/// undo the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    actor_unit: UnitId,
    target_unit: Option<UnitId>,
    actor_player: PlayerId,
    target_player: PlayerId,
}

impl CommandRecord {
    pub fn new(
        actor_unit: UnitId,
        target_unit: Option<UnitId>,
        actor_player: PlayerId,
        target_player: PlayerId,
    ) -> Self {
        Self {
            actor_unit,
            target_unit,
            actor_player,
            target_player,
        }
    }

    /// A record for a command without a target unit (e.g. a move).
    pub fn untargeted(actor_unit: UnitId, actor_player: PlayerId) -> Self {
        Self::new(actor_unit, None, actor_player, actor_player)
    }

    pub fn actor_unit(&self) -> UnitId {
        self.actor_unit
    }

    pub fn target_unit(&self) -> Option<UnitId> {
        self.target_unit
    }

    pub fn actor_player(&self) -> PlayerId {
        self.actor_player
    }

    pub fn target_player(&self) -> PlayerId {
        self.target_player
    }
}
