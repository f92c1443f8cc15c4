use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::common::state::GameState;
use crate::common::test_utils::drain_messages;

use super::*;

fn menu_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    plugin(&mut app);
    app.init_resource::<Messages<AppExit>>();
    app.update();
    app
}

fn send(app: &mut App, cmd: MenuCommand) {
    app.world_mut().write_message(cmd);
    app.update();
    // One more frame so the queued transition is applied.
    app.update();
}

fn current(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn blank_names_are_cleared() {
    let mut s = Session::new("Ada");
    assert_eq!(s.player_name(), "Ada");
    assert!(s.can_start());

    s.set_player_name("   \t");
    assert_eq!(s.player_name(), "");
    assert!(!s.can_start());

    s.set_player_name(" Bo ");
    assert_eq!(s.player_name(), " Bo ");
}

#[test]
fn score_label_falls_back_to_player() {
    assert_eq!(Session::default().score_label(), "Player's Score: ");
    assert_eq!(Session::new("Ada").score_label(), "Ada's Score: ");
}

#[test]
fn start_requires_a_name() {
    let mut app = menu_app();

    send(&mut app, MenuCommand::Start);
    assert_eq!(current(&app), GameState::Menu);

    send(&mut app, MenuCommand::SetPlayerName("Ada".into()));
    send(&mut app, MenuCommand::Start);
    assert_eq!(current(&app), GameState::InGame);
}

#[test]
fn restart_and_menu_only_apply_after_game_over() {
    let mut app = menu_app();
    send(&mut app, MenuCommand::SetPlayerName("Ada".into()));
    send(&mut app, MenuCommand::Start);
    assert_eq!(current(&app), GameState::InGame);

    send(&mut app, MenuCommand::ToMenu);
    assert_eq!(current(&app), GameState::InGame);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();
    assert_eq!(current(&app), GameState::GameOver);

    send(&mut app, MenuCommand::Restart);
    assert_eq!(current(&app), GameState::InGame);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();
    send(&mut app, MenuCommand::ToMenu);
    assert_eq!(current(&app), GameState::Menu);
}

#[test]
fn quit_requests_app_exit() {
    let mut app = menu_app();
    app.world_mut().write_message(MenuCommand::Quit);
    app.update();

    let exits = drain_messages::<AppExit>(app.world_mut());
    assert!(exits.iter().any(|e| *e == AppExit::Success));
}
