//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::shootables::ShootablesPlugin;

pub mod core;
pub mod director;
pub mod physics;
pub mod scoreboard;
pub mod session;
pub mod shootables;
pub mod world;

// Render-only
pub mod camera;
pub mod hud;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    session::plugin(app);
    scoreboard::plugin(app);
    director::plugin(app);
    app.add_plugins(ShootablesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    hud::plugin(app);
    app.add_systems(Update, session::keyboard_menu);
}
