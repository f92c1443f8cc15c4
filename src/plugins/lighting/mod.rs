//! Lighting plugin (Firefly) (render-only): destruction feedback as a fading flash.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::shootables::kind::ShootableKind;
use crate::plugins::shootables::messages::DestructionFeedback;

const FLASH_RANGE: f32 = 3.0;

#[derive(Component, Debug)]
pub struct ExplosionFlash {
    timer: Timer,
    base_range: f32,
}

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Update, (spawn_flashes, fade_flashes).chain());
}

fn flash_color(kind: ShootableKind) -> Color {
    match kind {
        ShootableKind::Rising => Color::srgb(1.0, 0.6, 0.65),
        ShootableKind::LateralDrifter => Color::srgb(1.0, 0.85, 0.5),
        ShootableKind::FallingHeavy => Color::srgb(1.0, 0.55, 0.2),
    }
}

fn spawn_flashes(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut feedback: MessageReader<DestructionFeedback>,
) {
    for fb in feedback.read() {
        commands.spawn((
            Name::new("ExplosionFlash"),
            ExplosionFlash {
                timer: Timer::from_seconds(tunables.feedback_duration, TimerMode::Once),
                base_range: FLASH_RANGE,
            },
            PointLight2d {
                color: flash_color(fb.kind),
                range: FLASH_RANGE,
                ..default()
            },
            Transform::from_translation(fb.position),
        ));
    }
}

/// Shrink each flash over the feedback window, then remove it.
fn fade_flashes(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut ExplosionFlash, &mut PointLight2d)>,
) {
    for (e, mut flash, mut light) in &mut q {
        flash.timer.tick(time.delta());

        let dur = flash.timer.duration().as_secs_f32().max(0.0001);
        let t = (flash.timer.elapsed_secs() / dur).clamp(0.0, 1.0);
        light.range = flash.base_range * (1.0 - t);

        if flash.timer.is_finished() {
            commands.entity(e).despawn();
        }
    }
}
