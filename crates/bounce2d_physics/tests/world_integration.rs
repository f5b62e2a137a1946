//! Integration tests for the physics facade
//!
//! These run the real rapier pipeline headless and check the behaviors
//! the playground relies on.

use bounce2d_physics::{BoxFixture, PhysicsConfig, PhysicsWorld};
use glam::Vec2;

#[test]
fn falling_box_lands_on_fixed_platform() {
    let mut world = PhysicsWorld::new();
    world.add_fixed_box(Vec2::new(0.0, -5.0), Vec2::new(5.0, 0.5), BoxFixture::STATIC);
    let actor = world.add_dynamic_box(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        BoxFixture::BOUNCY,
        0.2,
        0.3,
    );

    // Strictly falling until first contact
    let mut last_y = world.position(actor).y;
    for _ in 0..20 {
        world.step();
        let y = world.position(actor).y;
        assert!(y < last_y, "actor should fall tick-over-tick, got {y} after {last_y}");
        last_y = y;
    }

    // Ten simulated seconds is plenty for the bounces to die out
    for _ in 0..600 {
        world.step();
    }

    // Resting on the platform: box bottom near the platform top (-4.5)
    let y = world.position(actor).y;
    assert!(y > -4.0 && y < -3.0, "actor should rest on the platform, got y={y}");
    assert!(world.linvel(actor).length() < 0.5);
}

#[test]
fn custom_gravity_is_honored() {
    let mut world = PhysicsWorld::with_config(PhysicsConfig::new(Vec2::new(0.0, -5.0), 1.0 / 60.0));
    let body = world.add_dynamic_box(
        Vec2::new(0.0, 10.0),
        Vec2::new(1.0, 1.0),
        BoxFixture::BOUNCY,
        0.0,
        0.0,
    );

    world.step();

    let v = world.linvel(body);
    assert!((v.y - (-5.0 / 60.0)).abs() < 1e-4);
}

#[test]
fn force_applied_after_step_takes_effect_next_step() {
    let mut world = PhysicsWorld::with_config(PhysicsConfig::new(Vec2::ZERO, 1.0 / 60.0));
    let body = world.add_dynamic_box(
        Vec2::ZERO,
        Vec2::new(1.0, 1.0),
        BoxFixture::BOUNCY,
        0.0,
        0.0,
    );

    // Mirrors the tick ordering of the playground: step, then apply
    world.step();
    world.apply_force(body, Vec2::new(100.0, 0.0));
    assert_eq!(world.linvel(body).x, 0.0);

    world.step();
    assert!(world.linvel(body).x > 0.0);
}
