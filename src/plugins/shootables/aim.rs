//! Producer: mouse click → `ShotFired`.
//!
//! This system only decides *what* was clicked. It never touches the scoreboard or the
//! lifecycle; `resolve_shots` is the single consumer.

use bevy::prelude::*;

use super::components::{Shootable, ShootableState};
use super::messages::ShotFired;
use super::pool::BODY_DIAMETER;
use crate::plugins::camera::MainCamera;

/// The nearest (highest `z`) active target whose circle contains `point`.
pub fn pick_target<'a>(
    point: Vec2,
    candidates: impl IntoIterator<Item = (Entity, &'a Shootable, &'a Transform)>,
) -> Option<Entity> {
    candidates
        .into_iter()
        .filter(|(_, s, _)| s.state() == ShootableState::Active)
        .filter(|(_, _, tf)| {
            let radius = BODY_DIAMETER * 0.5 * tf.scale.x.abs();
            tf.translation.truncate().distance_squared(point) <= radius * radius
        })
        .max_by(|(_, _, a), (_, _, b)| a.translation.z.total_cmp(&b.translation.z))
        .map(|(e, _, _)| e)
}

pub fn shoot_on_click(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_targets: Query<(Entity, &Shootable, &Transform)>,
    mut writer: MessageWriter<ShotFired>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) { return; }

    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => { debug!("No single Window: {e:?}"); return; }
    };

    let Some(cursor) = window.cursor_position() else {
        debug!("Cursor position is None");
        return;
    };

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    let world_cursor = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); return; }
    };

    if let Some(target) = pick_target(world_cursor, &q_targets) {
        writer.write(ShotFired { target });
    }
}
