use bevy::prelude::*;
use avian2d::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn spawns_four_boundaries_and_a_ground() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn_arena);

    let mut boundaries = 0;
    let mut ground = 0;
    for (name, rb, layers) in world
        .query_filtered::<(&Name, &RigidBody, &CollisionLayers), With<Sensor>>()
        .iter(&world)
    {
        assert!(matches!(*rb, RigidBody::Static));
        assert!(layers.filters.has_all(Layer::Shootable));
        if name.as_str().starts_with("Boundary") {
            assert!(layers.memberships.has_all(Layer::Boundary));
            boundaries += 1;
        } else if name.as_str() == "Ground" {
            assert!(layers.memberships.has_all(Layer::Ground));
            ground += 1;
        }
    }

    assert_eq!(boundaries, 4);
    assert_eq!(ground, 1);
}

#[test]
fn boundaries_clear_every_spawn_lane() {
    let mut world = World::new();
    let tunables = Tunables::default();
    world.insert_resource(tunables.clone());
    run_system_once(&mut world, super::spawn_arena);

    let b = tunables.bounds;
    let lane_x = b.outside(b.x);
    let lane_y = b.outside(b.y);

    for (name, tf) in world.query::<(&Name, &Transform)>().iter(&world) {
        match name.as_str() {
            "BoundaryLeft" | "BoundaryRight" => assert!(tf.translation.x.abs() > lane_x + 1.0),
            "BoundaryTop" | "BoundaryBottom" => assert!(tf.translation.y.abs() > lane_y + 1.0),
            "Ground" => {
                assert!(tf.translation.y < -b.y);
                assert!(tf.translation.y > -lane_y);
            }
            _ => {}
        }
    }
}
