//! World plugin: the sensors that end a target's flight.
//!
//! ```text
//!   ┌──────────────── BoundaryTop ────────────────┐
//!   │                                             │
//!   B   plane ►        visible area       ◄ plane  B
//!   │                                             │
//!   │═══════════════════ Ground ══════════════════│
//!   │               balloon lane                  │
//!   └─────────────── BoundaryBottom ──────────────┘
//! ```
//!
//! Boundaries sit `exit_margin` beyond the outermost spawn lanes, so nothing spawns
//! touching one. The ground spans the full width below the visible area; only kinds with
//! an impact penalty react to it.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

const THICKNESS: f32 = 1.0;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_arena);
}

pub fn spawn_arena(mut commands: Commands, tunables: Res<Tunables>) {
    let b = tunables.bounds;

    let half_w = b.outside(b.x) + tunables.exit_margin;
    let half_h = b.outside(b.y) + tunables.exit_margin;

    let boundary_layers = CollisionLayers::new(Layer::Boundary, [Layer::Shootable]);
    let ground_layers = CollisionLayers::new(Layer::Ground, [Layer::Shootable]);

    let mut spawn_sensor = |name: &str, pos: Vec2, size: Vec2, layers: CollisionLayers| {
        commands.spawn((
            Name::new(name.to_owned()),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            layers,
        ));
    };

    let span_w = half_w * 2.0 + THICKNESS * 2.0;
    let span_h = half_h * 2.0;

    spawn_sensor(
        "BoundaryTop",
        Vec2::new(0.0, half_h + THICKNESS * 0.5),
        Vec2::new(span_w, THICKNESS),
        boundary_layers,
    );
    spawn_sensor(
        "BoundaryBottom",
        Vec2::new(0.0, -half_h - THICKNESS * 0.5),
        Vec2::new(span_w, THICKNESS),
        boundary_layers,
    );
    spawn_sensor(
        "BoundaryLeft",
        Vec2::new(-half_w - THICKNESS * 0.5, 0.0),
        Vec2::new(THICKNESS, span_h),
        boundary_layers,
    );
    spawn_sensor(
        "BoundaryRight",
        Vec2::new(half_w + THICKNESS * 0.5, 0.0),
        Vec2::new(THICKNESS, span_h),
        boundary_layers,
    );

    spawn_sensor(
        "Ground",
        Vec2::new(0.0, tunables.ground_height - THICKNESS * 0.5),
        Vec2::new(half_w * 2.0, THICKNESS),
        ground_layers,
    );
}

#[cfg(test)]
mod tests;
