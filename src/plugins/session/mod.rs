//! Session plugin: player identity and menu commands.
//!
//! The session is an ordinary resource inserted at startup. Menus write
//! [`MenuCommand`] messages; `apply_menu_commands` is the single place that turns
//! them into state transitions.

use bevy::prelude::*;

use crate::common::state::GameState;

/// Data that outlives a single round.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    player_name: String,
}

impl Session {
    pub fn new(name: &str) -> Self {
        let mut session = Self::default();
        session.set_player_name(name);
        session
    }

    #[inline]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Blank input clears the name. Anything else is stored as typed.
    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = if name.trim().is_empty() {
            String::new()
        } else {
            name.to_owned()
        };
    }

    #[inline]
    pub fn can_start(&self) -> bool {
        !self.player_name.is_empty()
    }

    /// Prefix for the score readout, e.g. `"Ada's Score: "`.
    pub fn score_label(&self) -> String {
        if self.player_name.is_empty() {
            "Player's Score: ".to_owned()
        } else {
            format!("{}'s Score: ", self.player_name)
        }
    }
}

#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    SetPlayerName(String),
    Start,
    Restart,
    ToMenu,
    Quit,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Session>()
        .add_message::<MenuCommand>()
        .add_systems(Update, apply_menu_commands);
}

pub fn apply_menu_commands(
    mut reader: MessageReader<MenuCommand>,
    mut session: ResMut<Session>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for cmd in reader.read() {
        let current = *state.get();

        match (cmd, current) {
            (MenuCommand::SetPlayerName(name), _) => session.set_player_name(name),
            (MenuCommand::Start, GameState::Menu) => {
                if session.can_start() {
                    info!("Starting game as {}", session.player_name());
                    next_state.set(GameState::InGame);
                } else {
                    warn!("Start ignored: player name is empty");
                }
            }
            (MenuCommand::Restart, GameState::GameOver) => next_state.set(GameState::InGame),
            (MenuCommand::ToMenu, GameState::GameOver) => next_state.set(GameState::Menu),
            (MenuCommand::Quit, _) => {
                exit.write(AppExit::Success);
            }
            (cmd, state) => debug!("{cmd:?} has no effect in {state:?}"),
        }
    }
}

/// Stand-in menu for the windowed build: Enter starts or restarts, M returns to the
/// menu, Escape quits.
pub fn keyboard_menu(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    state: Res<State<GameState>>,
    mut writer: MessageWriter<MenuCommand>,
) {
    let Some(keys) = keys else { return; };

    let cmd = if keys.just_pressed(KeyCode::Escape) {
        Some(MenuCommand::Quit)
    } else if keys.just_pressed(KeyCode::Enter) {
        match state.get() {
            GameState::Menu => Some(MenuCommand::Start),
            GameState::GameOver => Some(MenuCommand::Restart),
            GameState::InGame => None,
        }
    } else if keys.just_pressed(KeyCode::KeyM) {
        Some(MenuCommand::ToMenu)
    } else {
        None
    };

    if let Some(cmd) = cmd {
        writer.write(cmd);
    }
}

#[cfg(test)]
mod tests;
