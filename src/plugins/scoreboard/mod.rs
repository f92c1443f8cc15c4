//! Scoreboard plugin: score/health truth and the game-over signal.
//!
//! Shootables never touch this resource directly. They report outcomes through the
//! [`ScoreHealthSink`] trait, which keeps the lifecycle code testable against any
//! counter and leaves the UI free to read the board however it likes.
//!
//! ```text
//!   Shootable::register_hit / register_ground_impact
//!        │  add_points / add_health
//!        v
//!   Scoreboard (Resource) ──► take_game_over_signal() ──► GameOver message
//!                                                     └─► GameState::GameOver + frozen time
//! ```

use bevy::prelude::*;
use bevy::time::Virtual;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::session::Session;

/// Where shootables report rewards and penalties.
pub trait ScoreHealthSink {
    /// Add to the score. Never decreases it.
    fn add_points(&mut self, points: u32);

    /// Add (or remove, when negative) health.
    fn add_health(&mut self, delta: i32);
}

/// Score and health for the running round.
#[derive(Resource, Debug, Clone)]
pub struct Scoreboard {
    score: u32,
    health: i32,
    max_health: i32,
    game_over: bool,
    // Raised once when health first reaches zero; consumed by `announce_game_over`.
    game_over_signal: bool,
}

impl Scoreboard {
    pub fn new(max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            score: 0,
            health: max_health,
            max_health,
            game_over: false,
            game_over_signal: false,
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Health bar fill in `[0, 1]`.
    #[inline]
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns `true` exactly once after health has reached zero.
    pub fn take_game_over_signal(&mut self) -> bool {
        std::mem::take(&mut self.game_over_signal)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(Tunables::default().max_health)
    }
}

impl ScoreHealthSink for Scoreboard {
    fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    fn add_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta).clamp(0, self.max_health);

        if self.health == 0 && !self.game_over {
            self.game_over = true;
            self.game_over_signal = true;
        }
    }
}

/// The round ended because health reached zero.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
}

pub fn plugin(app: &mut App) {
    let max_health = app
        .world()
        .get_resource::<Tunables>()
        .map_or(Tunables::default().max_health, |t| t.max_health);

    app.insert_resource(Scoreboard::new(max_health))
        .add_message::<GameOver>()
        .add_systems(
            PostUpdate,
            announce_game_over.run_if(in_state(GameState::InGame)),
        );
}

/// Turn the scoreboard's one-shot signal into a message, a state change and frozen time.
pub fn announce_game_over(
    mut board: ResMut<Scoreboard>,
    session: Option<Res<Session>>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut writer: MessageWriter<GameOver>,
) {
    if !board.take_game_over_signal() {
        return;
    }

    let label = session.map_or_else(|| Session::default().score_label(), |s| s.score_label());
    info!("Game over. {label}{}", board.score());

    virtual_time.set_relative_speed(0.0);
    next_state.set(GameState::GameOver);
    writer.write(GameOver { score: board.score() });
}

#[cfg(test)]
mod tests;
