use airtime_engine::{
    BodyClass, Collider, CollisionFilter, ContactEvent, DirectionalGate, EngineContext, Entity,
    EntityId, FilterMode, InputQueue, PhysicsBody, Rect,
};
use glam::Vec2;

const TICK_MS: u32 = 16;

fn world(w: f32, h: f32) -> EngineContext {
    let mut ctx = EngineContext::new();
    ctx.scene.set_bounds(Rect::new(0.0, 0.0, w, h));
    ctx
}

fn block(id: u32, rect: Rect) -> Entity {
    Entity::new(EntityId(id))
        .with_rect(rect)
        .with_collider(Collider::new(BodyClass::Sprite))
}

fn falling_box(id: u32, rect: Rect) -> Entity {
    Entity::new(EntityId(id))
        .with_rect(rect)
        .with_collider(Collider::new(BodyClass::PhysicsEntity))
        .with_body(PhysicsBody::new())
}

fn run(ctx: &mut EngineContext, ticks: usize) {
    let input = InputQueue::new();
    for _ in 0..ticks {
        ctx.step(TICK_MS, &input);
    }
}

#[test]
fn body_falls_and_rests_on_a_block() {
    let mut ctx = world(1000.0, 1000.0);
    ctx.spawn(block(1, Rect::new(400.0, 900.0, 100.0, 100.0)));
    ctx.spawn(falling_box(2, Rect::new(420.0, 0.0, 50.0, 50.0)));

    run(&mut ctx, 120);

    let b = ctx.scene.get(EntityId(2)).unwrap();
    let rect = b.collision_rect().unwrap();
    let body = b.body.unwrap();
    assert!((rect.bottom() - 900.0).abs() < 1e-3, "bottom = {}", rect.bottom());
    assert_eq!(rect.left(), 420.0);
    assert!(body.on_ground);
    assert_eq!(body.velocity.y, 0.0);
    assert!(ctx.contacts().contains(&ContactEvent::SteppedOn {
        surface: EntityId(1),
        entity: EntityId(2),
    }));
}

#[test]
fn body_moving_through_a_trigger_is_not_stopped() {
    let mut ctx = world(1000.0, 1000.0);
    ctx.spawn(
        Entity::new(EntityId(1))
            .with_rect(Rect::new(200.0, 0.0, 50.0, 1000.0))
            .with_collider(Collider::trigger(BodyClass::Collider)),
    );
    ctx.spawn(
        Entity::new(EntityId(2))
            .with_rect(Rect::new(100.0, 500.0, 20.0, 20.0))
            .with_collider(Collider::new(BodyClass::PhysicsEntity).with_collision_tag("Player"))
            .with_body(
                PhysicsBody::new()
                    .without_gravity()
                    .with_friction(0.0)
                    .with_velocity(Vec2::new(0.5, 0.0)),
            ),
    );

    let trigger_pos = ctx.scene.get(EntityId(1)).unwrap().pos;
    let input = InputQueue::new();
    let mut fired = 0;
    for _ in 0..40 {
        ctx.step(TICK_MS, &input);
        fired += ctx
            .contacts()
            .iter()
            .filter(|c| {
                **c == ContactEvent::TriggerFired {
                    trigger: EntityId(1),
                    other: EntityId(2),
                }
            })
            .count();
    }

    let b = ctx.scene.get(EntityId(2)).unwrap();
    assert!((b.pos.x - (100.0 + 0.5 * 16.0 * 40.0)).abs() < 1e-2);
    assert_eq!(b.pos.y, 500.0);
    assert_eq!(b.body.unwrap().velocity.x, 0.5);
    assert_eq!(ctx.scene.get(EntityId(1)).unwrap().pos, trigger_pos);
    assert!(fired > 0);
}

#[test]
fn one_way_platform_lets_bodies_jump_through() {
    let mut ctx = world(1000.0, 1000.0);
    ctx.spawn(
        block(1, Rect::new(0.0, 500.0, 1000.0, 100.0))
            .with_gate(DirectionalGate::from_tag("DirectionalColliderBottom")),
    );
    let mut body = falling_box(2, Rect::new(100.0, 620.0, 80.0, 20.0));
    body.body.as_mut().unwrap().velocity.y = -3.0;
    ctx.spawn(body);

    // Rising through the platform.
    run(&mut ctx, 10);
    let top = ctx.scene.get(EntityId(2)).unwrap().collision_rect().unwrap().top();
    assert!(top < 500.0);

    // Falling back lands on top of it.
    run(&mut ctx, 200);
    let b = ctx.scene.get(EntityId(2)).unwrap();
    assert!((b.collision_rect().unwrap().bottom() - 500.0).abs() < 1e-3);
    assert!(b.body.unwrap().on_ground);
}

#[test]
fn filter_lets_bodies_ignore_untagged_blocks() {
    let mut ctx = world(1000.0, 1000.0);
    ctx.spawn(block(1, Rect::new(0.0, 300.0, 1000.0, 20.0)));
    ctx.spawn(
        Entity::new(EntityId(2))
            .with_rect(Rect::new(0.0, 900.0, 1000.0, 100.0))
            .with_collider(Collider::new(BodyClass::Collider).with_collision_tag("Floor")),
    );
    ctx.spawn(
        Entity::new(EntityId(3))
            .with_rect(Rect::new(100.0, 200.0, 100.0, 20.0))
            .with_collider(
                Collider::new(BodyClass::PhysicsEntity)
                    .with_filter(CollisionFilter::none(FilterMode::Tag).with_tag("Floor")),
            )
            .with_body(PhysicsBody::new()),
    );

    run(&mut ctx, 200);
    let rect = ctx.scene.get(EntityId(3)).unwrap().collision_rect().unwrap();
    assert!((rect.bottom() - 900.0).abs() < 1e-3);
}

#[test]
fn world_edges_hold_bodies_in() {
    let mut ctx = world(300.0, 300.0);
    ctx.spawn(falling_box(1, Rect::new(280.0, 100.0, 20.0, 20.0)));
    ctx.scene
        .get_mut(EntityId(1))
        .unwrap()
        .body
        .as_mut()
        .unwrap()
        .velocity
        .x = 2.0;

    run(&mut ctx, 100);
    let b = ctx.scene.get(EntityId(1)).unwrap();
    let rect = b.collision_rect().unwrap();
    assert_eq!(rect.right(), 300.0);
    assert_eq!(rect.bottom(), 300.0);
    assert!(b.body.unwrap().on_ground);

    // The floor clamp keeps velocity, so a resting body's vy alternates
    // between zero and one tick of gravity.
    let mut vys = Vec::new();
    for _ in 0..2 {
        run(&mut ctx, 1);
        let b = ctx.scene.get(EntityId(1)).unwrap();
        assert_eq!(b.collision_rect().unwrap().bottom(), 300.0);
        vys.push(b.body.unwrap().velocity.y);
    }
    vys.sort_by(f32::total_cmp);
    assert_eq!(vys[0], 0.0);
    assert!((vys[1] - 9.81 * 0.016).abs() < 1e-3, "vy = {}", vys[1]);
}
