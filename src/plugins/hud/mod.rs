//! HUD plugin (render-only): score line, health bar and the game-over banner.
//!
//! Everything here reads [`Scoreboard`] and [`Session`]; nothing writes gameplay state.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::scoreboard::Scoreboard;
use crate::plugins::session::Session;

const HEALTH_BAR_WIDTH: f32 = 220.0;
const HEALTH_BAR_HEIGHT: f32 = 14.0;

#[derive(Component)]
pub struct ScoreText;

/// Inner bar whose width tracks the health fraction.
#[derive(Component)]
pub struct HealthFill;

#[derive(Component)]
pub struct GameOverBanner;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud).add_systems(
        Update,
        (update_score_text, update_health_bar, update_game_over_banner),
    );
}

/// `"Ada's Score: 12"`.
pub fn score_line(session: &Session, board: &Scoreboard) -> String {
    format!("{}{}", session.score_label(), board.score())
}

pub fn health_width(board: &Scoreboard) -> Val {
    Val::Percent(board.health_fraction() * 100.0)
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|hud| {
            hud.spawn((
                ScoreText,
                Text::new(""),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            hud.spawn((
                Node {
                    width: Val::Px(HEALTH_BAR_WIDTH),
                    height: Val::Px(HEALTH_BAR_HEIGHT),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            ))
            .with_children(|bar| {
                bar.spawn((
                    HealthFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.3, 0.85, 0.4)),
                ));
            });
        });

    commands.spawn((
        Name::new("GameOverBanner"),
        GameOverBanner,
        Text::new(""),
        TextFont {
            font_size: 44.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.85, 0.3)),
        TextLayout::new_with_justify(bevy::text::Justify::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(35.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        Visibility::Hidden,
    ));
}

pub fn update_score_text(
    session: Res<Session>,
    board: Res<Scoreboard>,
    mut q: Query<&mut Text, With<ScoreText>>,
) {
    if !session.is_changed() && !board.is_changed() {
        return;
    }

    let line = score_line(&session, &board);
    for mut text in &mut q {
        if text.0 != line {
            text.0.clone_from(&line);
        }
    }
}

pub fn update_health_bar(board: Res<Scoreboard>, mut q: Query<&mut Node, With<HealthFill>>) {
    let width = health_width(&board);
    for mut node in &mut q {
        if node.width != width {
            node.width = width;
        }
    }
}

pub fn update_game_over_banner(
    state: Res<State<GameState>>,
    session: Res<Session>,
    board: Res<Scoreboard>,
    mut q: Query<(&mut Text, &mut Visibility), With<GameOverBanner>>,
) {
    let over = *state.get() == GameState::GameOver;

    for (mut text, mut vis) in &mut q {
        if over {
            let banner = format!(
                "GAME OVER\n{}\nEnter: restart   M: menu",
                score_line(&session, &board)
            );
            if text.0 != banner {
                text.0 = banner;
            }
            vis.set_if_neq(Visibility::Visible);
        } else {
            vis.set_if_neq(Visibility::Hidden);
        }
    }
}

#[cfg(test)]
mod tests;
