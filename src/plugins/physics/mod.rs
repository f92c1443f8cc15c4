//! Physics plugin: Avian with world units in meters and gravity pointing down.
//!
//! Only `FallingHeavy` targets feel gravity; the other kinds zero it through their
//! `GravityScale`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let gravity = app.world().resource::<Tunables>().gravity;
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec2::NEG_Y * gravity));
}
