//! Per-kind behaviour, expressed as data.
//!
//! Every kind supplies the same four things: a stat roll, a start position, what a
//! player hit is worth, and how it reacts to the ground. They live in one const table
//! indexed by [`ShootableKind`], so adding a kind is a new row rather than a new type.

use bevy::prelude::*;
use rand::{Rng, RngCore};

use crate::common::tunables::SpawnBounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShootableKind {
    /// Balloon: floats up from below the screen.
    Rising,
    /// Plane: crosses the screen sideways.
    LateralDrifter,
    /// Bomb: falls and costs health when it reaches the ground.
    FallingHeavy,
}

impl ShootableKind {
    pub const ALL: [ShootableKind; 3] = [
        ShootableKind::Rising,
        ShootableKind::LateralDrifter,
        ShootableKind::FallingHeavy,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ShootableKind::Rising => 0,
            ShootableKind::LateralDrifter => 1,
            ShootableKind::FallingHeavy => 2,
        }
    }

    #[inline]
    pub fn profile(self) -> &'static KindProfile {
        &PROFILES[self.index()]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

/// Values rolled once per spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnStats {
    pub speed: f32,
    pub points: u32,
    /// Direction only; magnitude comes from `speed`.
    pub move_dir: Vec3,
    pub scale: f32,
    pub mass: f32,
}

impl Default for SpawnStats {
    fn default() -> Self {
        Self { speed: 0.0, points: 0, move_dir: Vec3::ZERO, scale: 1.0, mass: 1.0 }
    }
}

/// What reaching the ground means for a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactPolicy {
    /// Passes through the ground sensor.
    Ignore,
    /// Lose health, no points, no feedback.
    Penalty { health: i32 },
}

pub struct KindProfile {
    pub name: &'static str,
    pub roll_stats: fn(&mut dyn RngCore) -> SpawnStats,
    pub start_position: fn(&SpawnStats, &SpawnBounds, &mut dyn RngCore) -> Vec3,
    /// Health granted on top of points when the player hits it.
    pub hit_health_bonus: i32,
    pub impact: ImpactPolicy,
    /// Converts `speed` into a push per second for the physics body.
    pub thrust: f32,
    pub damping: f32,
    pub gravity_scale: f32,
    pub color: Color,
}

pub static PROFILES: [KindProfile; 3] = [
    KindProfile {
        name: "Balloon",
        roll_stats: roll_rising,
        start_position: rising_start,
        hit_health_bonus: 1,
        impact: ImpactPolicy::Ignore,
        thrust: 0.05,
        damping: 0.3,
        gravity_scale: 0.0,
        color: Color::srgb(0.95, 0.3, 0.35),
    },
    KindProfile {
        name: "Plane",
        roll_stats: roll_lateral,
        start_position: lateral_start,
        hit_health_bonus: 0,
        impact: ImpactPolicy::Ignore,
        thrust: 0.0025,
        damping: 1.0,
        gravity_scale: 0.0,
        color: Color::srgb(0.75, 0.8, 0.9),
    },
    KindProfile {
        name: "Bomb",
        roll_stats: roll_heavy,
        start_position: heavy_start,
        hit_health_bonus: 0,
        impact: ImpactPolicy::Penalty { health: -4 },
        thrust: 0.004,
        damping: 0.1,
        gravity_scale: 0.25,
        color: Color::srgb(0.15, 0.15, 0.18),
    },
];

/// `1` when `round(speed)` is odd, `-1` otherwise.
#[inline]
fn parity_sign(speed: f32) -> f32 {
    if (speed.round_ties_even() as i64).rem_euclid(2) == 1 { 1.0 } else { -1.0 }
}

/// Random depth drawn from the half-open integer range `lo..hi`.
#[inline]
fn depth_in(lo: i32, hi: i32, rng: &mut dyn RngCore) -> f32 {
    rng.random_range(lo..hi) as f32
}

// --- Rising --------------------------------------------------------------

/// Stats for a balloon of size `r ∈ [1, 2]`: smaller balloons are faster and worth more.
pub fn rising_stats(r: f32) -> SpawnStats {
    SpawnStats {
        speed: 24.0 - r * 2.0,
        points: (6.0 / r).ceil() as u32,
        move_dir: Vec3::Y,
        scale: r,
        mass: 1.0,
    }
}

fn roll_rising(rng: &mut dyn RngCore) -> SpawnStats {
    rising_stats(rng.random_range(1.0..=2.0))
}

fn rising_start(_: &SpawnStats, bounds: &SpawnBounds, rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(
        SpawnBounds::within(bounds.x, rng),
        -bounds.outside(bounds.y),
        depth_in(1, 5, rng),
    )
}

// --- LateralDrifter ------------------------------------------------------

pub const LATERAL_MIN_SPEED: f32 = 1000.0;
pub const LATERAL_MAX_SPEED: f32 = 3000.0;

pub fn lateral_stats(speed: f32) -> SpawnStats {
    SpawnStats {
        speed,
        points: (speed / LATERAL_MIN_SPEED).round_ties_even() as u32 * 2,
        move_dir: Vec3::new(parity_sign(speed), 0.0, 0.0),
        scale: 1.0,
        mass: 1.0,
    }
}

fn roll_lateral(rng: &mut dyn RngCore) -> SpawnStats {
    lateral_stats(rng.random_range(LATERAL_MIN_SPEED..LATERAL_MAX_SPEED))
}

/// Enters from the side opposite to its travel direction.
fn lateral_start(stats: &SpawnStats, bounds: &SpawnBounds, rng: &mut dyn RngCore) -> Vec3 {
    let lane = bounds.outside(bounds.x);
    let x = if stats.move_dir.x < 0.0 { lane } else { -lane };
    Vec3::new(x, SpawnBounds::within(bounds.y, rng), depth_in(3, 6, rng))
}

// --- FallingHeavy --------------------------------------------------------

pub const HEAVY_MAX_BASE_SPEED: f32 = 250.0;

/// Stats for a bomb of size `r ∈ [0.5, 2]` with sideways base speed `base ∈ [0, 250)`.
pub fn heavy_stats(r: f32, base: f32) -> SpawnStats {
    let speed = base * r;
    SpawnStats {
        speed,
        points: (5.0 / r).round_ties_even() as u32,
        move_dir: Vec3::new(parity_sign(speed), 0.0, 0.0),
        scale: r,
        mass: r,
    }
}

fn roll_heavy(rng: &mut dyn RngCore) -> SpawnStats {
    let r = rng.random_range(0.5..=2.0);
    let base = rng.random_range(0.0..HEAVY_MAX_BASE_SPEED);
    heavy_stats(r, base)
}

fn heavy_start(_: &SpawnStats, bounds: &SpawnBounds, rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(
        SpawnBounds::within(bounds.x, rng),
        SpawnBounds::within(bounds.y, rng),
        depth_in(0, 2, rng),
    )
}
