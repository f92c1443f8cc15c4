//! Deadline heap for delayed deactivations.
//!
//! Entries are never cancelled. Each one remembers the spawn generation it was made
//! for, and the shootable re-checks both that and its sticky flag when the entry
//! fires, so a late entry for a recycled body does nothing.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PendingDeactivation {
    // Field order matters: entries sort by deadline first.
    pub due: Duration,
    pub entity: Entity,
    pub generation: u32,
}

#[derive(Resource, Debug, Default)]
pub struct DeactivationSchedule {
    heap: BinaryHeap<Reverse<PendingDeactivation>>,
}

impl DeactivationSchedule {
    pub fn schedule(&mut self, entity: Entity, generation: u32, due: Duration) {
        self.heap.push(Reverse(PendingDeactivation { due, entity, generation }));
    }

    /// Remove and return every entry due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Duration) -> Vec<PendingDeactivation> {
        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.heap.peek() {
            if next.due > now {
                break;
            }
            if let Some(Reverse(entry)) = self.heap.pop() {
                due.push(entry);
            }
        }
        due
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
