//! Execute / undo / hit prediction for each command variant, and binding of
//! record IDs to live entities.

use bevy::prelude::*;

use crate::config::ATTACK_REACH;
use crate::units::{is_occupied, BoardPosition, Health, Unit, UnitIndex};

use super::types::{AppliedEffect, BindError, CommandKind, UnitCommand};

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

impl UnitIndex {
    /// Attach the live actor/target entities for `command`'s record IDs.
    ///
    /// Leaves the command untouched on failure.
    pub fn bind(&self, command: &mut UnitCommand) -> Result<(), BindError> {
        let actor_id = command.record.actor_unit();
        let actor = self.get(actor_id).ok_or(BindError::UnknownActor(actor_id))?;
        let target = match command.record.target_unit() {
            Some(target_id) => Some(
                self.get(target_id)
                    .ok_or(BindError::UnknownTarget(target_id))?,
            ),
            None => None,
        };

        command.set_actor_unit(actor);
        if let Some(target) = target {
            command.set_target_unit(target);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Execute / Undo
// ---------------------------------------------------------------------------

impl UnitCommand {
    /// Apply the command to the world, remembering how to reverse it.
    pub fn execute(&mut self, world: &mut World) {
        debug_assert!(
            self.applied.is_none(),
            "{} command for unit {} executed twice",
            self.kind.name(),
            self.record.actor_unit().0
        );
        let effect = match self.kind {
            CommandKind::Move { to } => self.apply_move(world, to),
            CommandKind::Attack { power } => self.apply_attack(world, power),
            CommandKind::Heal { amount } => self.apply_heal(world, amount),
        };
        self.applied = Some(effect);
    }

    /// Reverse the effect of the last [`execute`](Self::execute).
    ///
    /// # Panics
    ///
    /// If the command has not been executed, or was already undone.
    pub fn undo(&mut self, world: &mut World) {
        let Some(effect) = self.applied.take() else {
            panic!(
                "undo of {} command for unit {} without a prior execute",
                self.kind.name(),
                self.record.actor_unit().0
            );
        };

        match effect {
            AppliedEffect::Moved { from } => match self.actor_position_mut(world) {
                Some(mut position) => *position = from,
                None => self.warn_missing("undo"),
            },
            AppliedEffect::Damaged { dealt } => match self.target_health_mut(world) {
                Some(mut health) => {
                    health.current = health.current.saturating_add(dealt).min(health.max);
                }
                None => self.warn_missing("undo"),
            },
            AppliedEffect::Healed { restored } => match self.target_health_mut(world) {
                Some(mut health) => health.current = health.current.saturating_sub(restored),
                None => self.warn_missing("undo"),
            },
            AppliedEffect::Skipped => {}
        }
    }

    fn apply_move(&self, world: &mut World, to: BoardPosition) -> AppliedEffect {
        let Some(mut position) = self.actor_position_mut(world) else {
            return self.skip("execute");
        };
        let from = *position;
        *position = to;
        AppliedEffect::Moved { from }
    }

    fn apply_attack(&self, world: &mut World, power: u32) -> AppliedEffect {
        let Some(mut health) = self.target_health_mut(world) else {
            return self.skip("execute");
        };
        let dealt = power.min(health.current);
        health.current -= dealt;
        AppliedEffect::Damaged { dealt }
    }

    fn apply_heal(&self, world: &mut World, amount: u32) -> AppliedEffect {
        let Some(mut health) = self.target_health_mut(world) else {
            return self.skip("execute");
        };
        let restored = amount.min(health.max.saturating_sub(health.current));
        health.current += restored;
        AppliedEffect::Healed { restored }
    }

    fn actor_position_mut<'w>(&self, world: &'w mut World) -> Option<Mut<'w, BoardPosition>> {
        let actor = self.actor?;
        world.get_mut::<BoardPosition>(actor)
    }

    fn target_health_mut<'w>(&self, world: &'w mut World) -> Option<Mut<'w, Health>> {
        let target = self.target?;
        world.get_mut::<Health>(target)
    }

    fn skip(&self, phase: &str) -> AppliedEffect {
        self.warn_missing(phase);
        AppliedEffect::Skipped
    }

    fn warn_missing(&self, phase: &str) {
        warn!(
            "{} {}: unit {} or its target is gone, nothing applied",
            self.kind.name(),
            phase,
            self.record.actor_unit().0
        );
    }
}

// ---------------------------------------------------------------------------
// Hit prediction
// ---------------------------------------------------------------------------

impl UnitCommand {
    /// Whether executing this command now would have its intended effect.
    ///
    /// Read-only; callers use it to decide whether to issue the command.
    pub fn will_hit_target(&self, world: &World) -> bool {
        let Some(actor) = self.actor else {
            return false;
        };
        let Some((actor_unit, actor_pos, actor_health)) = unit_state(world, actor) else {
            return false;
        };
        if !actor_health.is_alive() {
            return false;
        }

        match self.kind {
            CommandKind::Move { to } => to.in_bounds() && !is_occupied(world, to, Some(actor)),
            CommandKind::Attack { .. } => {
                let Some((target_unit, target_pos, target_health)) =
                    self.target.and_then(|target| unit_state(world, target))
                else {
                    return false;
                };
                target_health.is_alive()
                    && target_unit.owner != actor_unit.owner
                    && actor_pos.manhattan_distance(target_pos) <= ATTACK_REACH
            }
            CommandKind::Heal { .. } => {
                let Some((target_unit, _, target_health)) =
                    self.target.and_then(|target| unit_state(world, target))
                else {
                    return false;
                };
                target_health.is_alive()
                    && target_unit.owner == actor_unit.owner
                    && target_health.current < target_health.max
            }
        }
    }
}

fn unit_state(world: &World, entity: Entity) -> Option<(&Unit, &BoardPosition, &Health)> {
    Some((
        world.get::<Unit>(entity)?,
        world.get::<BoardPosition>(entity)?,
        world.get::<Health>(entity)?,
    ))
}
