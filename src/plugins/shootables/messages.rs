//! Messages crossing the shootable boundary.
//!
//! - input produces [`ShotFired`]; the hit resolver is its only consumer
//! - the lifecycle produces [`DestructionFeedback`]; presentation decides how it looks

use bevy::prelude::*;

use super::kind::ShootableKind;

/// The player clicked on a shootable.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotFired {
    pub target: Entity,
}

/// A hit target started its destruction feedback.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct DestructionFeedback {
    pub position: Vec3,
    pub kind: ShootableKind,
}
