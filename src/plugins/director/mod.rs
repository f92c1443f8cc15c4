//! Director plugin: decides when and what to spawn, and ramps difficulty.
//!
//! # Time model
//! Two clocks are in play, the same way hitstop/slowmo work elsewhere in Bevy games:
//! - the spawn timer runs on **virtual** time, so it speeds up with the difficulty ramp
//!   and stops when the game is frozen;
//! - the difficulty timer runs on **real** time, so the ramp itself keeps a steady
//!   wall-clock cadence no matter how fast the game already is.
//!
//! The ramp is applied by setting the relative speed of `Time<Virtual>`. Fixed-step
//! physics, thrust and delayed deactivations all derive from virtual time, so one
//! number scales the whole simulation.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::{Real, Virtual};
use rand::{Rng, RngCore};

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::scoreboard::Scoreboard;
use crate::plugins::session::Session;
use crate::plugins::shootables::kind::ShootableKind;
use crate::plugins::shootables::pool::{PoolBodies, ShootablePools, SpawnRng};

#[derive(Resource, Debug, Clone)]
pub struct Director {
    spawn_timer: Timer,
    difficulty_timer: Timer,
    time_scale: f32,
    spawned: u64,
}

impl Director {
    pub fn new(tunables: &Tunables) -> Self {
        Self {
            spawn_timer: Timer::from_seconds(tunables.first_spawn_delay, TimerMode::Once),
            difficulty_timer: Timer::from_seconds(tunables.difficulty_period, TimerMode::Repeating),
            time_scale: 1.0,
            spawned: 0,
        }
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Targets spawned this round.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Advance the spawn countdown. When it expires, re-arm it with a fresh interval in
    /// `[min, max)` and return `true`.
    ///
    /// At most one spawn per call, however large `dt` is.
    pub fn tick_spawn(&mut self, dt: Duration, tunables: &Tunables, rng: &mut dyn RngCore) -> bool {
        self.spawn_timer.tick(dt);
        if !self.spawn_timer.is_finished() {
            return false;
        }

        let (lo, hi) = (tunables.spawn_interval_min, tunables.spawn_interval_max);
        let next = if hi > lo { rng.random_range(lo..hi) } else { lo };
        self.spawn_timer.set_duration(Duration::from_secs_f32(next.max(0.0)));
        self.spawn_timer.reset();
        self.spawned += 1;
        true
    }

    /// Advance the difficulty countdown. Each expiry raises the time scale by `step`.
    ///
    /// Returns how many times it expired during `dt`.
    pub fn tick_difficulty(&mut self, dt: Duration, step: f32) -> u32 {
        self.difficulty_timer.tick(dt);
        let fired = self.difficulty_timer.times_finished_this_tick();
        self.time_scale += step * fired as f32;
        fired
    }

    /// Uniform pick among all kinds.
    pub fn pick_kind(rng: &mut dyn RngCore) -> ShootableKind {
        ShootableKind::ALL[rng.random_range(0..ShootableKind::ALL.len())]
    }
}

pub fn plugin(app: &mut App) {
    let director = Director::new(
        app.world()
            .get_resource::<Tunables>()
            .unwrap_or(&Tunables::default()),
    );

    app.insert_resource(director)
        .add_systems(OnEnter(GameState::InGame), start_round)
        .add_systems(OnEnter(GameState::Menu), restore_time_scale)
        .add_systems(
            Update,
            (ramp_difficulty, drive_spawns).run_if(in_state(GameState::InGame)),
        );
}

/// Fresh director and scoreboard, normal speed.
pub fn start_round(
    mut commands: Commands,
    tunables: Res<Tunables>,
    session: Option<Res<Session>>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    commands.insert_resource(Director::new(&tunables));
    commands.insert_resource(Scoreboard::new(tunables.max_health));
    virtual_time.set_relative_speed(1.0);

    match session {
        Some(s) if s.can_start() => info!("Round started for {}", s.player_name()),
        _ => info!("Round started"),
    }
}

pub fn restore_time_scale(mut virtual_time: ResMut<Time<Virtual>>) {
    virtual_time.set_relative_speed(1.0);
}

pub fn ramp_difficulty(
    real_time: Res<Time<Real>>,
    mut virtual_time: ResMut<Time<Virtual>>,
    tunables: Res<Tunables>,
    board: Res<Scoreboard>,
    mut director: ResMut<Director>,
) {
    if board.is_game_over() {
        return;
    }

    if director.tick_difficulty(real_time.delta(), tunables.difficulty_step) > 0 {
        virtual_time.set_relative_speed(director.time_scale());
        info!("Difficulty up: time scale {:.1}", director.time_scale());
    }
}

pub fn drive_spawns(
    mut commands: Commands,
    time: Res<Time<Virtual>>,
    tunables: Res<Tunables>,
    board: Res<Scoreboard>,
    mut director: ResMut<Director>,
    mut pools: ResMut<ShootablePools>,
    mut rng: ResMut<SpawnRng>,
    mut bodies: PoolBodies,
) {
    if board.is_game_over() {
        return;
    }

    let rng: &mut dyn RngCore = &mut rng.0;
    if !director.tick_spawn(time.delta(), &tunables, rng) {
        return;
    }

    let kind = Director::pick_kind(rng);
    let e = pools.acquire(kind, &mut commands, &mut bodies, rng, &tunables);
    debug!("Spawned {} {e:?}", kind.name());
}
