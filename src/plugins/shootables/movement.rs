use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::time::Fixed;

use super::components::{Shootable, ShootableState};

/// Velocity change from one tick of thrust. Zero unless the target is `Active`.
pub fn thrust_delta(shootable: &Shootable, dt: f32) -> Vec2 {
    if shootable.state() != ShootableState::Active {
        return Vec2::ZERO;
    }

    let stats = shootable.stats();
    let accel = stats.speed * shootable.kind().profile().thrust / stats.mass.max(f32::EPSILON);
    stats.move_dir.truncate() * accel * dt
}

/// Push active targets along their travel direction; physics integrates the rest.
pub fn apply_thrust(time: Res<Time<Fixed>>, mut q: Query<(&Shootable, &mut LinearVelocity)>) {
    let dt = time.delta_secs();

    for (shootable, mut vel) in &mut q {
        let dv = thrust_delta(shootable, dt);
        if dv != Vec2::ZERO {
            vel.0 += dv;
        }
    }
}
