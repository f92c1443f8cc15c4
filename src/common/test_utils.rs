//! Test helpers.
//!
//! Most tests build a bare `World`, insert the resources a system reads and run the
//! system once through `RunSystemOnce`. Systems that spawn through `Commands` only
//! enqueue work, so the helper flushes the world before handing control back to the
//! assertions.

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Drain every buffered message of type `M`.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
