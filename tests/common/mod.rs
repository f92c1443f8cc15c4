//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `sky_shooter::game::configure_headless` installs the gameplay plugins.
//! - time advances by a fixed step per `update`, so rounds play out deterministically
//!   in wall-clock terms.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use sky_shooter::common::state::GameState;
use sky_shooter::plugins::session::MenuCommand;

/// Real time added by every `app.update()`.
pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    sky_shooter::game::configure_headless(&mut app);
    app
}

/// Write a menu command and let the resulting transition (if any) apply.
pub fn send(app: &mut App, cmd: MenuCommand) {
    app.world_mut().write_message(cmd);
    app.update();
    app.update();
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// From a fresh app to a running round.
pub fn start_round(app: &mut App, name: &str) {
    app.update();
    send(app, MenuCommand::SetPlayerName(name.to_owned()));
    send(app, MenuCommand::Start);
    assert_eq!(state(app), GameState::InGame);
}
