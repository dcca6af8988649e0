//! # TestMatch: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` and [`CommandPlugin`].
//! Time only advances when a test asks for it, so replay pacing can be
//! checked without real time passing.


use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::ledger::{CommandLedger, ReplayRequested, UndoRequested};
use crate::players::{ActivePlayer, PlayerId};
use crate::queue::{CommandQueue, CommandSource};
use crate::replay::{ReplayScheduler, ReplayState, SetReplayState};
use crate::result_log::ExecutionLog;
use crate::unit_command::UnitCommand;
use crate::units::{spawn_unit, BoardPosition, Health, Unit, UnitId, UnitIndex};
use crate::CommandPlugin;

pub use commands::{attack, heal, move_to};

pub struct TestMatch {
    app: App,
}

impl Default for TestMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMatch {
    /// An empty board with player 1 active.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
        app.add_plugins(CommandPlugin);
        // Large manual steps must not be clamped by virtual time.
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .set_max_delta(Duration::from_secs(60));

        // The first update only establishes the time baseline.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    pub fn with_unit(mut self, id: u32, owner: u32, at: (i32, i32), max_health: u32) -> Self {
        spawn_unit(
            self.app.world_mut(),
            Unit {
                id: UnitId(id),
                owner: PlayerId(owner),
            },
            BoardPosition::new(at.0, at.1),
            Health::full(max_health),
        );
        self
    }

    pub fn with_active_player(mut self, player: u32) -> Self {
        self.set_active_player(player);
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn set_active_player(&mut self, player: u32) {
        self.app
            .world_mut()
            .insert_resource(ActivePlayer(PlayerId(player)));
    }

    /// Remove a unit from the board as if it had died.
    pub fn despawn_unit(&mut self, id: u32) {
        let world = self.app.world_mut();
        let entity = world
            .resource::<UnitIndex>()
            .get(UnitId(id))
            .expect("unit should exist");
        world.despawn(entity);
    }

    /// Queue a live player command; it runs on the next update.
    pub fn issue(&mut self, command: UnitCommand) {
        self.app
            .world_mut()
            .resource_mut::<CommandQueue>()
            .push(CommandSource::Player, command);
    }

    pub fn request_undo(&mut self) {
        self.app.world_mut().send_event(UndoRequested);
    }

    pub fn request_replay(&mut self) {
        self.app.world_mut().send_event(ReplayRequested);
    }

    pub fn set_replay_state(&mut self, state: ReplayState) {
        self.app.world_mut().send_event(SetReplayState(state));
    }

    /// Run one frame without advancing time.
    pub fn tick(&mut self) {
        self.app.update();
    }

    /// Run one frame whose time delta is `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(delta));
        self.app.update();
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    }

    pub fn advance_secs(&mut self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn ledger(&self) -> &CommandLedger {
        self.app.world().resource::<CommandLedger>()
    }

    pub fn scheduler(&self) -> &ReplayScheduler {
        self.app.world().resource::<ReplayScheduler>()
    }

    pub fn log(&self) -> &ExecutionLog {
        self.app.world().resource::<ExecutionLog>()
    }

    pub fn health(&self, id: u32) -> u32 {
        let world = self.app.world();
        world
            .resource::<UnitIndex>()
            .get(UnitId(id))
            .and_then(|entity| world.get::<Health>(entity))
            .map(|health| health.current)
            .expect("unit should exist")
    }

    pub fn position(&self, id: u32) -> (i32, i32) {
        let world = self.app.world();
        world
            .resource::<UnitIndex>()
            .get(UnitId(id))
            .and_then(|entity| world.get::<BoardPosition>(entity))
            .map(|position| (position.x, position.y))
            .expect("unit should exist")
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
