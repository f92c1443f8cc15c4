//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render/log) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::common::tunables::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::plugins;
use crate::plugins::session::Session;

/// Log filter for the windowed build. `RUST_LOG` still overrides it.
const LOG_FILTER: &str = "wgpu=error,naga=warn,sky_shooter=debug";

pub fn run(session: Session) {
    App::new()
        .insert_resource(session)
        .add_plugins(configure_full)
        .run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sky Shooter".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                ..default()
            }),
            ..default()
        })
        .set(LogPlugin {
            level: Level::INFO,
            filter: LOG_FILTER.into(),
            ..default()
        });

    app.add_plugins(default_plugins);

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (Firefly/camera/keyboard menu).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
