//! Body commit: derive the physics/visual components from lifecycle state.
//!
//! This system is the only writer of the *Inactive invariants*:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)
//! - parked off-field, gravity off
//!
//! A hit target keeps flying with its sprite hidden while feedback plays, and keeps its
//! filters so a boundary can still end it early.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Shootable, ShootableState};
use super::pool::{active_shootable_layers, inactive_shootable_layers};
use crate::common::tunables::Tunables;

pub fn sync_shootable_bodies(
    tunables: Res<Tunables>,
    mut q: Query<(
        &Shootable,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
        &mut GravityScale,
        &mut Transform,
    )>,
) {
    for (shootable, mut vis, mut vel, mut layers, mut gravity, mut tf) in &mut q {
        match shootable.state() {
            ShootableState::Inactive => {
                vis.set_if_neq(Visibility::Hidden);
                layers.set_if_neq(inactive_shootable_layers());
                if gravity.0 != 0.0 {
                    gravity.0 = 0.0;
                }
                if vel.0 != Vec2::ZERO {
                    vel.0 = Vec2::ZERO;
                }
                let park = tunables.parking_spot;
                if tf.translation.truncate() != park {
                    tf.translation.x = park.x;
                    tf.translation.y = park.y;
                }
            }
            ShootableState::Spawning | ShootableState::Active => {
                vis.set_if_neq(Visibility::Visible);
                layers.set_if_neq(active_shootable_layers());
                let scale = shootable.kind().profile().gravity_scale;
                if gravity.0 != scale {
                    gravity.0 = scale;
                }
            }
            ShootableState::Deactivating => {
                if shootable.feedback_playing() {
                    vis.set_if_neq(Visibility::Hidden);
                }
            }
        }
    }
}
