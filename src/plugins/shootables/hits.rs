//! Player hits and the delayed half of their deactivation.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::Virtual;

use super::components::{Deactivation, Shootable};
use super::messages::{DestructionFeedback, ShotFired};
use super::schedule::DeactivationSchedule;
use crate::common::tunables::Tunables;
use crate::plugins::scoreboard::Scoreboard;

/// Reward shot targets and queue their return to the pool.
pub fn resolve_shots(
    mut shots: MessageReader<ShotFired>,
    time: Res<Time<Virtual>>,
    tunables: Res<Tunables>,
    mut board: ResMut<Scoreboard>,
    mut schedule: ResMut<DeactivationSchedule>,
    mut q: Query<(&mut Shootable, &Transform)>,
    mut feedback: MessageWriter<DestructionFeedback>,
) {
    for shot in shots.read() {
        let Ok((mut shootable, tf)) = q.get_mut(shot.target) else {
            debug!("Shot at {:?} which is not a shootable", shot.target);
            continue;
        };

        match shootable.register_hit(board.as_mut(), tunables.feedback_duration) {
            Some(Deactivation::Delayed { generation, delay }) => {
                let due = time.elapsed() + Duration::from_secs_f32(delay.max(0.0));
                schedule.schedule(shot.target, generation, due);
                feedback.write(DestructionFeedback {
                    position: tf.translation,
                    kind: shootable.kind(),
                });
            }
            Some(Deactivation::Immediate) => {
                shootable.complete_deactivation();
            }
            None => {}
        }
    }
}

/// Fire every deadline that has passed. Stale entries fall through harmlessly.
pub fn fire_due_deactivations(
    time: Res<Time<Virtual>>,
    mut schedule: ResMut<DeactivationSchedule>,
    mut q: Query<&mut Shootable>,
) {
    for entry in schedule.pop_due(time.elapsed()) {
        let Ok(mut shootable) = q.get_mut(entry.entity) else {
            continue;
        };
        if !shootable.complete_scheduled(entry.generation) {
            debug!("Dropped stale deactivation for {:?}", entry.entity);
        }
    }
}
