//! Camera plugin (render-only).
//!
//! The world is laid out in meters; the camera's transform scale maps them to pixels.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let zoom = 1.0 / tunables.pixels_per_meter.max(f32::EPSILON);

    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0).with_scale(Vec3::splat(zoom)),
    ));
}
