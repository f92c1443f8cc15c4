//! Tunable gameplay constants.

use bevy::prelude::*;

/// Half-extents of the visible play area plus the distance past it where lanes start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBounds {
    pub x: f32,
    pub y: f32,
    pub offset: f32,
}

impl SpawnBounds {
    /// Uniform value in `[-bound, bound)`.
    #[inline]
    pub fn within(bound: f32, rng: &mut dyn rand::RngCore) -> f32 {
        use rand::Rng;
        rng.random_range(-bound..bound)
    }

    /// Lane coordinate just past `bound`.
    #[inline]
    pub fn outside(&self, bound: f32) -> f32 {
        bound + self.offset
    }
}

/// Window size of the windowed build, in pixels.
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Camera zoom: how many screen pixels one world unit covers. Chosen so the spawn
    /// lanes, body radius included, stay outside the view.
    pub pixels_per_meter: f32,
    /// Size of the area the camera shows, in pixels.
    pub viewport: Vec2,
    pub gravity: f32,
    pub bounds: SpawnBounds,
    /// Gap between the outermost spawn lane and the boundary sensors.
    pub exit_margin: f32,
    /// Top edge of the ground sensor.
    pub ground_height: f32,
    /// Where inactive bodies wait for reuse.
    pub parking_spot: Vec2,
    pub max_health: i32,
    pub first_spawn_delay: f32,
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,
    pub difficulty_period: f32,
    pub difficulty_step: f32,
    /// How long destruction feedback plays before a hit target returns to its pool.
    pub feedback_duration: f32,
}

impl Tunables {
    /// Half-size of the visible area in world units.
    pub fn view_half_extents(&self) -> Vec2 {
        self.viewport / (2.0 * self.pixels_per_meter.max(f32::EPSILON))
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 64.0,
            viewport: Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
            gravity: 9.81,
            bounds: SpawnBounds { x: 9.0, y: 4.0, offset: 3.5 },
            exit_margin: 2.0,
            ground_height: -5.5,
            parking_spot: Vec2::new(0.0, -100.0),
            max_health: 10,
            first_spawn_delay: 0.5,
            spawn_interval_min: 1.0,
            spawn_interval_max: 2.0,
            difficulty_period: 5.0,
            difficulty_step: 0.1,
            feedback_duration: 2.0,
        }
    }
}
