use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::Virtual;

use crate::common::state::GameState;
use crate::common::test_utils::{drain_messages, run_system_once};

use super::*;

#[test]
fn starts_full_and_empty() {
    let board = Scoreboard::new(10);
    assert_eq!(board.score(), 0);
    assert_eq!(board.health(), 10);
    assert_eq!(board.health_fraction(), 1.0);
    assert!(!board.is_game_over());
}

#[test]
fn add_points_only_grows() {
    let mut board = Scoreboard::new(10);
    board.add_points(4);
    board.add_points(0);
    board.add_points(6);
    assert_eq!(board.score(), 10);

    board.add_points(u32::MAX);
    assert_eq!(board.score(), u32::MAX);
}

#[test]
fn health_is_clamped_to_range() {
    let mut board = Scoreboard::new(10);

    board.add_health(5);
    assert_eq!(board.health(), 10);

    board.add_health(-4);
    assert_eq!(board.health(), 6);

    board.add_health(-100);
    assert_eq!(board.health(), 0);

    board.add_health(i32::MIN);
    assert_eq!(board.health(), 0);
}

#[test]
fn reaching_zero_signals_game_over_once() {
    let mut board = Scoreboard::new(8);

    board.add_health(-4);
    assert!(!board.is_game_over());
    assert!(!board.take_game_over_signal());

    board.add_health(-4);
    assert!(board.is_game_over());
    assert!(board.take_game_over_signal());
    assert!(!board.take_game_over_signal());

    // Further penalties and a later recovery must not raise it again.
    board.add_health(-4);
    board.add_health(1);
    board.add_health(-1);
    assert!(!board.take_game_over_signal());
    assert!(board.is_game_over());
}

#[test]
fn announce_game_over_freezes_time_and_writes_message() {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();

    let world = app.world_mut();
    world.insert_resource(Time::<Virtual>::default());
    world.init_resource::<Messages<GameOver>>();

    let mut board = Scoreboard::new(4);
    board.add_points(12);
    board.add_health(-4);
    world.insert_resource(board);

    run_system_once(world, announce_game_over);

    assert_eq!(world.resource::<Time<Virtual>>().relative_speed(), 0.0);
    assert_eq!(drain_messages::<GameOver>(world), vec![GameOver { score: 12 }]);

    // Signal already consumed: a second run is silent.
    run_system_once(world, announce_game_over);
    assert!(drain_messages::<GameOver>(world).is_empty());

    app.update();
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::GameOver);
}
