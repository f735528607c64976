use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::classifier::{resolve, SpatialQuery};
use crate::collision::filter::CollisionFilter;
use crate::core::geometry::Rect;

/// Distance below a body that still counts as standing on something.
pub const DEFAULT_GROUNDED_DISTANCE: f32 = 1.0;

/// Result of a grounded evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundProbe {
    pub grounded: bool,
    /// Blockers found just below the body, in scene order.
    pub surfaces: Vec<EntityId>,
}

/// Whether the body at `rect` is standing on something.
///
/// The probe uses zero velocity, so one-way colliders always count as floor.
/// The world's bottom edge counts as floor too.
pub fn evaluate_grounded<W>(
    world: &W,
    self_id: EntityId,
    filter: &CollisionFilter,
    rect: Rect,
    distance: f32,
) -> GroundProbe
where
    W: SpatialQuery + ?Sized,
{
    let probe = rect.translated(Vec2::new(0.0, distance));
    let surfaces: Vec<EntityId> = resolve(world, self_id, filter, probe, Vec2::ZERO)
        .blockers
        .into_iter()
        .map(|b| b.id)
        .collect();
    let on_world_floor = rect.bottom() >= world.bounds().bottom() - distance;
    GroundProbe {
        grounded: !surfaces.is_empty() || on_world_floor,
        surfaces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::classifier::tests::{body, ListWorld};
    use crate::collision::filter::BodyClass;
    use crate::collision::gate::DirectionalGate;

    fn world_with(bodies: Vec<crate::collision::Collidable>) -> ListWorld {
        ListWorld {
            bodies,
            bounds: Rect::new(0.0, 0.0, 1000.0, 1000.0),
        }
    }

    #[test]
    fn standing_on_a_blocker() {
        let w = world_with(vec![body(2, BodyClass::Sprite, "", Rect::new(0.0, 100.0, 200.0, 20.0))]);
        let rect = Rect::new(10.0, 50.0, 20.0, 50.0);
        let probe = evaluate_grounded(&w, EntityId(1), &CollisionFilter::default(), rect, 1.0);
        assert!(probe.grounded);
        assert_eq!(probe.surfaces, vec![EntityId(2)]);
    }

    #[test]
    fn hovering_above_probe_distance_is_airborne() {
        let w = world_with(vec![body(2, BodyClass::Sprite, "", Rect::new(0.0, 100.0, 200.0, 20.0))]);
        let rect = Rect::new(10.0, 48.0, 20.0, 50.0);
        let probe = evaluate_grounded(&w, EntityId(1), &CollisionFilter::default(), rect, 1.0);
        assert!(!probe.grounded);
        assert!(probe.surfaces.is_empty());
    }

    #[test]
    fn world_floor_counts_as_ground() {
        let w = world_with(Vec::new());
        let rect = Rect::new(10.0, 949.5, 20.0, 50.0);
        let probe = evaluate_grounded(&w, EntityId(1), &CollisionFilter::default(), rect, 1.0);
        assert!(probe.grounded);
        assert!(probe.surfaces.is_empty());
    }

    #[test]
    fn one_way_platform_from_above_counts() {
        let mut ledge = body(2, BodyClass::DirectionalCollider, "", Rect::new(0.0, 100.0, 200.0, 20.0));
        ledge.gate = Some(DirectionalGate {
            bottom: true,
            ..Default::default()
        });
        let w = world_with(vec![ledge]);
        let rect = Rect::new(10.0, 50.0, 20.0, 50.0);
        let probe = evaluate_grounded(&w, EntityId(1), &CollisionFilter::default(), rect, 1.0);
        assert!(probe.grounded);
    }

    #[test]
    fn triggers_are_not_ground() {
        let mut zone = body(2, BodyClass::Collectible, "", Rect::new(0.0, 100.0, 200.0, 20.0));
        zone.is_trigger = true;
        let w = world_with(vec![zone]);
        let rect = Rect::new(10.0, 50.0, 20.0, 50.0);
        let probe = evaluate_grounded(&w, EntityId(1), &CollisionFilter::default(), rect, 1.0);
        assert!(!probe.grounded);
    }
}
