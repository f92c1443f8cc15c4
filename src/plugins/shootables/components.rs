use bevy::prelude::*;

use super::kind::{ImpactPolicy, ShootableKind, SpawnStats};
use crate::plugins::scoreboard::ScoreHealthSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShootableState {
    #[default]
    Inactive,
    Spawning,
    Active,
    Deactivating,
}

/// What the caller must do after a transition into `Deactivating`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deactivation {
    /// Call [`Shootable::complete_deactivation`] now.
    Immediate,
    /// Play destruction feedback and complete once `delay` seconds have passed.
    /// The completion must carry `generation` so it can tell a stale entry apart.
    Delayed { generation: u32, delay: f32 },
}

/// A pooled target and its lifecycle.
///
/// ```text
///   Inactive ──begin_spawn──► Spawning ──finish_spawn──► Active
///      ▲                                                  │ hit / ground / boundary
///      └──────── complete_deactivation ◄──── Deactivating ◄┘
/// ```
///
/// `deactivation_triggered` is sticky: it is set on entry to `Deactivating` and only the
/// completion clears it, so every trigger after the first one is a no-op.
#[derive(Component, Debug, Clone)]
pub struct Shootable {
    kind: ShootableKind,
    state: ShootableState,
    stats: SpawnStats,
    deactivation_triggered: bool,
    feedback_playing: bool,
    generation: u32,
}

impl Shootable {
    pub fn new(kind: ShootableKind) -> Self {
        Self {
            kind,
            state: ShootableState::Inactive,
            stats: SpawnStats::default(),
            deactivation_triggered: false,
            feedback_playing: false,
            generation: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShootableKind {
        self.kind
    }

    #[inline]
    pub fn state(&self) -> ShootableState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> &SpawnStats {
        &self.stats
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.state == ShootableState::Inactive
    }

    #[inline]
    pub fn deactivation_triggered(&self) -> bool {
        self.deactivation_triggered
    }

    /// True while a hit target is showing its destruction feedback.
    #[inline]
    pub fn feedback_playing(&self) -> bool {
        self.feedback_playing
    }

    /// `Inactive → Spawning` with freshly rolled stats. Starts a new spawn cycle.
    pub fn begin_spawn(&mut self, stats: SpawnStats) {
        debug_assert_eq!(self.state, ShootableState::Inactive, "spawned a busy {:?}", self.kind);

        self.stats = stats;
        self.state = ShootableState::Spawning;
        self.deactivation_triggered = false;
        self.feedback_playing = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// `Spawning → Active`.
    pub fn finish_spawn(&mut self) {
        debug_assert_eq!(self.state, ShootableState::Spawning);
        self.state = ShootableState::Active;
    }

    /// The player shot this target. Rewards go to `sink` at most once per spawn.
    pub fn register_hit<S: ScoreHealthSink + ?Sized>(
        &mut self,
        sink: &mut S,
        feedback_duration: f32,
    ) -> Option<Deactivation> {
        if self.state != ShootableState::Active {
            return None;
        }

        sink.add_points(self.stats.points);
        let bonus = self.kind.profile().hit_health_bonus;
        if bonus != 0 {
            sink.add_health(bonus);
        }

        self.enter_deactivating();
        self.feedback_playing = true;
        Some(Deactivation::Delayed {
            generation: self.generation,
            delay: feedback_duration,
        })
    }

    /// The body touched the ground. Only kinds with a penalty policy react.
    pub fn register_ground_impact<S: ScoreHealthSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Option<Deactivation> {
        if self.state != ShootableState::Active || self.deactivation_triggered {
            return None;
        }

        match self.kind.profile().impact {
            ImpactPolicy::Ignore => None,
            ImpactPolicy::Penalty { health } => {
                sink.add_health(health);
                self.enter_deactivating();
                Some(Deactivation::Immediate)
            }
        }
    }

    /// The body left the play area. Silent; also cuts a running feedback window short.
    pub fn register_boundary_exit(&mut self) -> Option<Deactivation> {
        match self.state {
            ShootableState::Active => {
                self.enter_deactivating();
                Some(Deactivation::Immediate)
            }
            ShootableState::Deactivating if self.deactivation_triggered => {
                Some(Deactivation::Immediate)
            }
            _ => None,
        }
    }

    /// `Deactivating → Inactive`, only if the sticky flag is still set.
    ///
    /// Returns whether the transition happened.
    pub fn complete_deactivation(&mut self) -> bool {
        if !self.deactivation_triggered {
            return false;
        }

        self.deactivation_triggered = false;
        self.feedback_playing = false;
        self.state = ShootableState::Inactive;
        true
    }

    /// Completion coming from the deadline heap. Ignored if it belongs to an older spawn.
    pub fn complete_scheduled(&mut self, generation: u32) -> bool {
        generation == self.generation && self.complete_deactivation()
    }

    #[inline]
    fn enter_deactivating(&mut self) {
        self.deactivation_triggered = true;
        self.state = ShootableState::Deactivating;
    }
}
