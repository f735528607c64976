use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::classifier::{resolve, Collidable, Resolution, SpatialQuery};
use crate::collision::filter::CollisionFilter;
use crate::core::geometry::{Axis, Rect};
use crate::physics::body::PhysicsBody;
use crate::physics::grounded::{evaluate_grounded, GroundProbe};

/// The moving body as seen by the integrator.
#[derive(Debug, Clone, Copy)]
pub struct Mover<'a> {
    pub id: EntityId,
    /// Collision rectangle before the move.
    pub rect: Rect,
    pub filter: &'a CollisionFilter,
}

/// Result of one integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Collision rectangle after clamping and correction.
    pub rect: Rect,
    /// Translation to apply to the entity.
    pub delta: Vec2,
    /// Triggers and blockers found at the destination.
    pub resolution: Resolution,
    pub ground: GroundProbe,
}

/// Advance `body` by one tick of `elapsed_ms`.
///
/// Gravity, then friction, then displacement of `velocity * elapsed_ms`.
/// Explicit Euler without sub-stepping: results depend on tick length.
pub fn integrate<W>(
    body: &mut PhysicsBody,
    mover: &Mover<'_>,
    world: &W,
    elapsed_ms: u32,
    grounded_distance: f32,
) -> StepOutcome
where
    W: SpatialQuery + ?Sized,
{
    let dt_s = elapsed_ms as f32 / 1000.0;
    body.apply_gravity(dt_s);
    body.apply_friction(dt_s);
    let displacement = body.velocity * elapsed_ms as f32;
    move_by(body, mover, world, displacement, grounded_distance)
}

/// Move by `displacement`: clamp to the world, resolve, correct, re-ground.
pub fn move_by<W>(
    body: &mut PhysicsBody,
    mover: &Mover<'_>,
    world: &W,
    displacement: Vec2,
    grounded_distance: f32,
) -> StepOutcome
where
    W: SpatialQuery + ?Sized,
{
    let target = mover
        .rect
        .translated(displacement)
        .clamped_to(&world.bounds());
    let resolution = resolve(world, mover.id, mover.filter, target, body.velocity);
    let rect = correct_penetration(mover.rect, target, &resolution.blockers, &mut body.velocity);
    let ground = evaluate_grounded(world, mover.id, mover.filter, rect, grounded_distance);
    body.on_ground = ground.grounded;
    StepOutcome {
        rect,
        delta: rect.min() - mover.rect.min(),
        resolution,
        ground,
    }
}

/// Push `target` out of every blocker, one axis per blocker.
///
/// Blockers are handled deepest first (largest intersection area, ties by
/// id), each against the rectangle corrected so far; a blocker no longer
/// overlapping is skipped. The side is chosen by comparing the centre of the
/// rectangle before the move with the blocker's centre. The corrected axis of
/// `velocity` is zeroed.
pub fn correct_penetration(
    origin: Rect,
    target: Rect,
    blockers: &[Collidable],
    velocity: &mut Vec2,
) -> Rect {
    let depth = |b: &Collidable| target.intersection(&b.rect).map_or(0.0, |r| r.area());
    let mut ordered: Vec<&Collidable> = blockers.iter().collect();
    ordered.sort_by(|a, b| {
        depth(b)
            .total_cmp(&depth(a))
            .then(a.id.0.cmp(&b.id.0))
    });

    let from = origin.center();
    let mut rect = target;
    for blocker in ordered {
        let Some(overlap) = rect.intersection(&blocker.rect) else {
            continue;
        };
        let other = blocker.rect;
        match Axis::for_intersection(&overlap) {
            Axis::X => {
                rect.x = if from.x < other.center().x {
                    other.left() - rect.w
                } else {
                    other.right()
                };
                velocity.x = 0.0;
            }
            Axis::Y => {
                rect.y = if from.y < other.center().y {
                    other.top() - rect.h
                } else {
                    other.bottom()
                };
                velocity.y = 0.0;
            }
        }
    }
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::classifier::tests::{body, ListWorld};
    use crate::collision::filter::BodyClass;

    fn world_with(bodies: Vec<Collidable>) -> ListWorld {
        ListWorld {
            bodies,
            bounds: Rect::new(0.0, 0.0, 1000.0, 1000.0),
        }
    }

    #[test]
    fn bounds_clamp_stops_at_right_edge() {
        let w = world_with(Vec::new());
        let filter = CollisionFilter::default();
        let mut b = PhysicsBody::kinematic().with_velocity(Vec2::new(1.0, 0.0));
        let mover = Mover {
            id: EntityId(1),
            rect: Rect::new(950.0, 100.0, 50.0, 50.0),
            filter: &filter,
        };
        let out = integrate(&mut b, &mover, &w, 16, 1.0);
        assert_eq!(out.rect.right(), 1000.0);
        assert_eq!(out.delta, Vec2::ZERO);
        // Clamping alone does not touch velocity.
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn landing_on_blocker_corrects_upward() {
        let w = world_with(vec![body(2, BodyClass::Sprite, "", Rect::new(0.0, 100.0, 200.0, 50.0))]);
        let filter = CollisionFilter::default();
        let mut b = PhysicsBody::kinematic().with_velocity(Vec2::new(0.0, 1.0));
        let mover = Mover {
            id: EntityId(1),
            rect: Rect::new(50.0, 40.0, 20.0, 50.0),
            filter: &filter,
        };
        let out = integrate(&mut b, &mover, &w, 16, 1.0);
        assert_eq!(out.rect.bottom(), 100.0);
        assert_eq!(b.velocity.y, 0.0);
        assert!(b.on_ground);
        assert_eq!(out.ground.surfaces, vec![EntityId(2)]);
        assert_eq!(out.resolution.blockers.len(), 1);
    }

    #[test]
    fn side_hit_corrects_horizontally() {
        let wall = body(2, BodyClass::Sprite, "", Rect::new(100.0, 0.0, 20.0, 200.0));
        let mut v = Vec2::new(2.0, 0.5);
        let origin = Rect::new(70.0, 50.0, 20.0, 40.0);
        let target = Rect::new(95.0, 55.0, 20.0, 40.0);
        let out = correct_penetration(origin, target, &[wall], &mut v);
        assert_eq!(out.x, 80.0);
        assert_eq!(out.y, 55.0);
        assert_eq!(v, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn hitting_a_ceiling_corrects_downward() {
        let ceiling = body(2, BodyClass::Sprite, "", Rect::new(0.0, 0.0, 200.0, 50.0));
        let mut v = Vec2::new(0.0, -1.0);
        let origin = Rect::new(50.0, 60.0, 20.0, 40.0);
        let target = Rect::new(50.0, 45.0, 20.0, 40.0);
        let out = correct_penetration(origin, target, &[ceiling], &mut v);
        assert_eq!(out.y, 50.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn equal_overlap_always_resolves_vertically() {
        let block = body(2, BodyClass::Sprite, "", Rect::new(10.0, 10.0, 10.0, 10.0));
        for _ in 0..3 {
            let mut v = Vec2::new(1.0, 1.0);
            let origin = Rect::new(0.0, 0.0, 10.0, 10.0);
            let target = Rect::new(5.0, 5.0, 10.0, 10.0);
            let out = correct_penetration(origin, target, std::slice::from_ref(&block), &mut v);
            assert_eq!(out, Rect::new(5.0, 0.0, 10.0, 10.0));
            assert_eq!(v, Vec2::new(1.0, 0.0));
        }
    }

    #[test]
    fn deepest_blocker_first_then_skip_cleared() {
        // Two floor tiles under a wide body: the deeper one lifts it clear of both.
        let shallow = body(2, BodyClass::Sprite, "", Rect::new(0.0, 102.0, 50.0, 50.0));
        let deep = body(3, BodyClass::Sprite, "", Rect::new(50.0, 100.0, 50.0, 50.0));
        let mut v = Vec2::new(0.0, 1.0);
        let origin = Rect::new(20.0, 40.0, 60.0, 50.0);
        let target = Rect::new(20.0, 55.0, 60.0, 50.0);
        let out = correct_penetration(origin, target, &[shallow, deep], &mut v);
        assert_eq!(out.bottom(), 100.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn triggers_never_push() {
        let mut zone = body(2, BodyClass::Collectible, "", Rect::new(0.0, 0.0, 100.0, 100.0));
        zone.is_trigger = true;
        let w = world_with(vec![zone]);
        let filter = CollisionFilter::default();
        let mut b = PhysicsBody::kinematic().with_velocity(Vec2::new(0.5, 0.0));
        let mover = Mover {
            id: EntityId(1),
            rect: Rect::new(10.0, 10.0, 20.0, 20.0),
            filter: &filter,
        };
        let out = integrate(&mut b, &mover, &w, 10, 1.0);
        assert_eq!(out.delta, Vec2::new(5.0, 0.0));
        assert_eq!(out.resolution.triggers.len(), 1);
        assert_eq!(b.velocity.x, 0.5);
    }

    #[test]
    fn settling_just_above_a_floor_stops_the_fall_next_tick() {
        let w = world_with(vec![body(2, BodyClass::Sprite, "", Rect::new(0.0, 100.0, 200.0, 50.0))]);
        let filter = CollisionFilter::default();
        let mut b = PhysicsBody::new().with_friction(0.0);

        // Tick 1 ends 0.49 above the floor: no overlap, but inside the ground probe.
        let first = Mover {
            id: EntityId(1),
            rect: Rect::new(50.0, 47.0, 20.0, 50.0),
            filter: &filter,
        };
        let out = integrate(&mut b, &first, &w, 16, 1.0);
        assert!(out.resolution.blockers.is_empty());
        assert!(out.rect.bottom() < 100.0);
        assert!(b.on_ground);
        assert!(b.velocity.y > 0.0);

        // Tick 2: grounded and moving down, so gravity zeroes the fall.
        let second = Mover {
            rect: out.rect,
            ..first
        };
        let out = integrate(&mut b, &second, &w, 16, 1.0);
        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(out.delta, Vec2::ZERO);
        assert!(b.on_ground);
    }
}
