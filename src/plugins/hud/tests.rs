use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;

fn hud_world(state: GameState, name: &str) -> World {
    let mut world = World::new();
    world.insert_resource(State::new(state));
    world.insert_resource(Session::new(name));
    world.insert_resource(Scoreboard::new(10));
    world
}

#[test]
fn score_line_uses_the_session_label() {
    let mut board = Scoreboard::new(10);
    board.add_points(12);

    assert_eq!(score_line(&Session::new("Ada"), &board), "Ada's Score: 12");
    assert_eq!(score_line(&Session::default(), &board), "Player's Score: 12");
}

#[test]
fn score_text_follows_the_board() {
    let mut world = hud_world(GameState::InGame, "Ada");
    world.resource_mut::<Scoreboard>().add_points(7);
    let e = world.spawn((ScoreText, Text::new(""))).id();

    run_system_once(&mut world, update_score_text);

    assert_eq!(world.get::<Text>(e).unwrap().0, "Ada's Score: 7");
}

#[test]
fn health_bar_width_tracks_health() {
    let mut world = hud_world(GameState::InGame, "Ada");
    world.resource_mut::<Scoreboard>().add_health(-5);
    let e = world
        .spawn((HealthFill, Node { width: Val::Percent(100.0), ..default() }))
        .id();

    run_system_once(&mut world, update_health_bar);

    assert_eq!(world.get::<Node>(e).unwrap().width, Val::Percent(50.0));
}

#[test]
fn banner_shows_only_after_game_over() {
    let mut world = hud_world(GameState::InGame, "Ada");
    let e = world
        .spawn((GameOverBanner, Text::new(""), Visibility::Hidden))
        .id();

    run_system_once(&mut world, update_game_over_banner);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);

    world.resource_mut::<Scoreboard>().add_points(30);
    world.insert_resource(State::new(GameState::GameOver));
    run_system_once(&mut world, update_game_over_banner);

    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Visible);
    assert!(world.get::<Text>(e).unwrap().0.contains("Ada's Score: 30"));
}
