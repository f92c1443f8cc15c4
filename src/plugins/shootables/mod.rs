//! Shootables plugin: pooled targets with an explicit lifecycle.
//!
//! # Invariants first
//! Each target is one [`components::Shootable`] component that carries its own state
//! machine. Everything else (visibility, velocity, collision filters) is derived from
//! that state by a single commit system, so there is exactly one truth to reason about.
//!
//! - A spawn cycle enters `Deactivating` exactly once. The sticky
//!   `deactivation_triggered` flag turns repeated triggers (click + contact in the same
//!   frame, ground + boundary in the same step) into no-ops.
//! - Delayed completions live in a deadline heap and are never cancelled. They carry
//!   the spawn generation, so a completion for a body that was already recycled and
//!   respawned does nothing.
//! - Pools only grow. `acquire` flips state synchronously, so the scan can never hand
//!   out a body twice.
//!
//! # Data flow
//! ```text
//!   Update (virtual time)
//!┌──────────────────────────────────────────────────────────────────────┐
//!│ (A) director::drive_spawns ── ShootablePools::acquire ──► Active body │
//!│ (B) aim::shoot_on_click        writes ShotFired                       │
//!│ (C) hits::resolve_shots        Active → Deactivating (+ points)       │
//!│                                pushes (entity, generation, due)       │
//!│ (D) hits::fire_due_deactivations  Deactivating → Inactive (guarded)   │
//!│ (E) commit::sync_shootable_bodies  state → visibility/velocity/layers │
//!└──────────────────────────────────────────────────────────────────────┘
//!   FixedUpdate / FixedPostUpdate
//!┌──────────────────────────────────────────────────────────────────────┐
//!│ (F) movement::apply_thrust     speed × direction → LinearVelocity     │
//!│ (G) Avian emits CollisionStart (ground / boundary sensors)            │
//!│ (H) collision::process_shootable_collisions                           │
//!│        ground → penalty, boundary → silent; both finish immediately   │
//!└──────────────────────────────────────────────────────────────────────┘
//! ```

pub mod aim;
pub mod collision;
pub mod commit;
pub mod components;
pub mod hits;
pub mod kind;
pub mod messages;
pub mod movement;
pub mod pool;
pub mod schedule;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ShootablesPlugin;

impl Plugin for ShootablesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pool::ShootablePools>()
            .init_resource::<pool::SpawnRng>()
            .init_resource::<schedule::DeactivationSchedule>()
            .add_message::<messages::ShotFired>()
            .add_message::<messages::DestructionFeedback>();

        app.add_systems(OnEnter(GameState::InGame), clear_shootables)
            .add_systems(OnEnter(GameState::Menu), clear_shootables);

        app.add_systems(
            Update,
            (
                aim::shoot_on_click,
                hits::resolve_shots,
                hits::fire_due_deactivations,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        // Runs in every state so a round cleared mid-feedback still parks its bodies.
        app.add_systems(
            Update,
            commit::sync_shootable_bodies.after(hits::fire_due_deactivations),
        );

        app.add_systems(
            FixedUpdate,
            movement::apply_thrust.run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            collision::process_shootable_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

/// Despawn every pooled body and forget pending deactivations.
pub fn clear_shootables(
    mut commands: Commands,
    mut pools: ResMut<pool::ShootablePools>,
    mut schedule: ResMut<schedule::DeactivationSchedule>,
) {
    let bodies = pools.take_all();
    if !bodies.is_empty() {
        debug!("Clearing {} pooled shootables", bodies.len());
    }
    for e in bodies {
        commands.entity(e).despawn();
    }
    schedule.clear();
}
