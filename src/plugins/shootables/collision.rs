//! Ground and boundary contacts.
//!
//! Both arrive as Avian `CollisionStart` messages in the fixed step. A body may touch the
//! ground and a boundary in the same step. There is no per-frame dedupe: the sticky flag
//! on [`Shootable`] turns every trigger after the first into a no-op.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Deactivation, Shootable};
use crate::common::layers::Layer;
use crate::plugins::scoreboard::Scoreboard;

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

pub fn process_shootable_collisions(
    mut started: MessageReader<CollisionStart>,
    q_is_shootable: Query<(), With<Shootable>>,
    mut q_shootables: Query<&mut Shootable>,
    q_layers: Query<&CollisionLayers>,
    mut board: ResMut<Scoreboard>,
) {
    for ev in started.read() {
        let a = q_is_shootable.contains(ev.collider1);
        let b = q_is_shootable.contains(ev.collider2);
        if !(a ^ b) {
            continue;
        }
        let (body, other) = if a {
            (ev.collider1, ev.collider2)
        } else {
            (ev.collider2, ev.collider1)
        };

        let Ok(other_layers) = q_layers.get(other) else {
            continue;
        };
        let Ok(mut shootable) = q_shootables.get_mut(body) else {
            continue;
        };

        let outcome = if is_in_layer(other_layers, Layer::Ground) {
            shootable.register_ground_impact(board.as_mut())
        } else if is_in_layer(other_layers, Layer::Boundary) {
            shootable.register_boundary_exit()
        } else {
            None
        };

        // Contacts never schedule feedback; they finish on the spot.
        if let Some(Deactivation::Immediate) = outcome {
            shootable.complete_deactivation();
        }
    }
}
