//! Minimal unit model that commands act on.
//!
//! Units are plain ECS entities carrying a [`Unit`] identity, a
//! [`BoardPosition`] and [`Health`]. The [`UnitIndex`] resource maps stable
//! [`UnitId`]s to the live `Entity` currently representing each unit, which is
//! how commands get bound before execution. Removing a [`Unit`] (including
//! despawning its entity) drops it from the index.

use std::collections::HashMap;

use bevy::ecs::component::ComponentId;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::players::PlayerId;

/// Stable identifier of a unit for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Identity of a unit: who it is and which player owns it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[component(on_remove = unregister_unit)]
pub struct Unit {
    pub id: UnitId,
    pub owner: PlayerId,
}

/// Cell a unit stands on.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPosition {
    pub x: i32,
    pub y: i32,
}

impl BoardPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_HEIGHT).contains(&self.y)
    }

    pub fn manhattan_distance(&self, other: &BoardPosition) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }
}

// ---------------------------------------------------------------------------
// UnitIndex resource
// ---------------------------------------------------------------------------

/// Lookup from stable unit IDs to the entities currently representing them.
#[derive(Resource, Debug, Default)]
pub struct UnitIndex {
    entities: HashMap<UnitId, Entity>,
}

impl UnitIndex {
    pub fn insert(&mut self, id: UnitId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    pub fn remove(&mut self, id: UnitId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: UnitId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn unregister_unit(mut world: DeferredWorld, entity: Entity, _: ComponentId) {
    let Some(id) = world.get::<Unit>(entity).map(|unit| unit.id) else {
        return;
    };
    let Some(mut index) = world.get_resource_mut::<UnitIndex>() else {
        return;
    };
    // The ID may already point at a newer entity.
    if index.get(id) == Some(entity) {
        index.remove(id);
        debug!("Unit {} left the board", id.0);
    }
}

/// Spawn a unit entity and register it in the [`UnitIndex`].
pub fn spawn_unit(
    world: &mut World,
    unit: Unit,
    position: BoardPosition,
    health: Health,
) -> Entity {
    let entity = world.spawn((unit, position, health)).id();
    world
        .get_resource_or_insert_with(UnitIndex::default)
        .insert(unit.id, entity);
    entity
}

/// Whether any unit other than `except` currently stands on `position`.
pub fn is_occupied(world: &World, position: BoardPosition, except: Option<Entity>) -> bool {
    world.iter_entities().any(|entity| {
        Some(entity.id()) != except && entity.get::<BoardPosition>() == Some(&position)
    })
}
