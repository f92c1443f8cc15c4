//! Grow-only pools, one per kind.
//!
//! A pool never frees anything. Bodies go back to being available by reaching
//! `ShootableState::Inactive`, and `acquire` rediscovers them with a linear scan in
//! insertion order. The scan is O(n) in the number of bodies ever created, which is
//! bounded by how many targets can be on screen at once.
//!
//! Recycling is done without structural changes: inactive bodies keep every component,
//! are hidden, parked off-field with gravity off, and collide with nothing (empty
//! filters).

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::components::Shootable;
use super::kind::{ShootableKind, SpawnStats};
use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

/// Sprite/collider diameter before per-spawn scaling.
pub const BODY_DIAMETER: f32 = 1.0;

/// Depth `d` is drawn at `z = DEPTH_Z_BASE - d`, so nearer targets render on top.
pub const DEPTH_Z_BASE: f32 = 10.0;

/// Everything `acquire` rewrites on a recycled body.
pub type PoolBodies<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Shootable,
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut GravityScale,
    ),
>;

#[inline]
pub fn active_shootable_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Shootable, [Layer::Boundary, Layer::Ground])
}

/// Parked bodies never generate collision events.
#[inline]
pub fn inactive_shootable_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Shootable, [] as [Layer; 0])
}

#[inline]
pub fn spawn_transform(position: Vec3, stats: &SpawnStats) -> Transform {
    Transform::from_xyz(position.x, position.y, DEPTH_Z_BASE - position.z)
        .with_scale(Vec3::splat(stats.scale))
}

/// Components for a freshly created body.
fn shootable_bundle(shootable: Shootable, transform: Transform) -> impl Bundle {
    let profile = shootable.kind().profile();

    (
        Name::new(format!("{}(Pooled)", profile.name)),
        shootable,
        Sprite {
            color: profile.color,
            custom_size: Some(Vec2::splat(BODY_DIAMETER)),
            ..default()
        },
        transform,
        Visibility::Visible,
        RigidBody::Dynamic,
        Collider::circle(BODY_DIAMETER * 0.5),
        active_shootable_layers(),
        LinearVelocity::ZERO,
        LinearDamping(profile.damping),
        GravityScale(profile.gravity_scale),
        CollisionEventsEnabled,
    )
}

/// Randomness for spawns. Seeded in tests, OS-seeded otherwise.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

#[derive(Debug, Clone)]
pub struct ShootablePool {
    kind: ShootableKind,
    members: Vec<Entity>,
}

impl ShootablePool {
    pub fn new(kind: ShootableKind) -> Self {
        Self { kind, members: Vec::new() }
    }

    #[inline]
    pub fn kind(&self) -> ShootableKind {
        self.kind
    }

    /// Every body this pool has created, in creation order.
    #[inline]
    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Spawn a target: reuse the first inactive body, or create one.
    ///
    /// The returned body is already `Active` when this returns; nothing about the state
    /// change is deferred, so a second call in the same system run can't pick it again.
    /// A newly created body only exists once `commands` are applied, and until then the
    /// scan simply doesn't see it.
    pub fn acquire(
        &mut self,
        commands: &mut Commands,
        bodies: &mut PoolBodies,
        rng: &mut dyn RngCore,
        tunables: &Tunables,
    ) -> Entity {
        let profile = self.kind.profile();
        let stats = (profile.roll_stats)(rng);
        let position = (profile.start_position)(&stats, &tunables.bounds, rng);
        let transform = spawn_transform(position, &stats);

        for &e in &self.members {
            let Ok((mut shootable, mut tf, mut vel, mut gravity)) = bodies.get_mut(e) else {
                continue;
            };
            if !shootable.is_available() {
                continue;
            }

            shootable.begin_spawn(stats);
            shootable.finish_spawn();
            *tf = transform;
            vel.0 = Vec2::ZERO;
            gravity.0 = profile.gravity_scale;
            return e;
        }

        let mut shootable = Shootable::new(self.kind);
        shootable.begin_spawn(stats);
        shootable.finish_spawn();

        let e = commands.spawn(shootable_bundle(shootable, transform)).id();
        self.members.push(e);
        debug!("{} pool grew to {}", profile.name, self.members.len());
        e
    }

    fn drain(&mut self) -> std::vec::Drain<'_, Entity> {
        self.members.drain(..)
    }
}

/// One pool per [`ShootableKind`].
#[derive(Resource, Debug, Clone)]
pub struct ShootablePools {
    pools: [ShootablePool; 3],
}

impl Default for ShootablePools {
    fn default() -> Self {
        Self { pools: ShootableKind::ALL.map(ShootablePool::new) }
    }
}

impl ShootablePools {
    #[inline]
    pub fn pool(&self, kind: ShootableKind) -> &ShootablePool {
        &self.pools[kind.index()]
    }

    pub fn acquire(
        &mut self,
        kind: ShootableKind,
        commands: &mut Commands,
        bodies: &mut PoolBodies,
        rng: &mut dyn RngCore,
        tunables: &Tunables,
    ) -> Entity {
        self.pools[kind.index()].acquire(commands, bodies, rng, tunables)
    }

    /// Total bodies across all pools.
    pub fn len(&self) -> usize {
        self.pools.iter().map(ShootablePool::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(ShootablePool::is_empty)
    }

    /// Forget every body and hand the ids back for despawning.
    pub fn take_all(&mut self) -> Vec<Entity> {
        self.pools.iter_mut().flat_map(ShootablePool::drain).collect()
    }
}
