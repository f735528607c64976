use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::filter::{BodyClass, CollisionFilter};
use crate::collision::gate::DirectionalGate;
use crate::core::geometry::Rect;

/// What the classifier needs to know about another body.
#[derive(Debug, Clone, PartialEq)]
pub struct Collidable {
    pub id: EntityId,
    pub class: BodyClass,
    pub tag: String,
    pub rect: Rect,
    pub is_trigger: bool,
    pub gate: Option<DirectionalGate>,
}

/// The world as seen by collision code.
pub trait SpatialQuery {
    /// Every collidable body whose collision rectangle strictly overlaps
    /// `rect`, in scene insertion order.
    fn overlapping(&self, rect: Rect) -> Vec<Collidable>;

    /// The world's bounding rectangle.
    fn bounds(&self) -> Rect;
}

/// Triggers and blockers found at a destination rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub triggers: Vec<Collidable>,
    pub blockers: Vec<Collidable>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty() && self.blockers.is_empty()
    }
}

/// Bodies overlapping `rect` that the mover `self_id` reacts to.
pub fn query_candidates<W>(
    world: &W,
    self_id: EntityId,
    filter: &CollisionFilter,
    rect: Rect,
) -> Vec<Collidable>
where
    W: SpatialQuery + ?Sized,
{
    let mut candidates = world.overlapping(rect);
    candidates.retain(|c| c.id != self_id);
    if !filter.accepts_all() {
        candidates.retain(|c| filter.accepts(c.class, &c.tag));
    }
    candidates
}

/// Split candidates at `rect` into triggers and blockers.
///
/// A one-way body that does not block the mover's `velocity` is dropped
/// entirely: it is neither a trigger nor a blocker.
pub fn resolve<W>(
    world: &W,
    self_id: EntityId,
    filter: &CollisionFilter,
    rect: Rect,
    velocity: Vec2,
) -> Resolution
where
    W: SpatialQuery + ?Sized,
{
    let mut out = Resolution::default();
    for candidate in query_candidates(world, self_id, filter, rect) {
        if candidate.is_trigger {
            out.triggers.push(candidate);
            continue;
        }
        if let Some(gate) = candidate.gate {
            if !gate.is_blocking(velocity) {
                continue;
            }
        }
        out.blockers.push(candidate);
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::collision::filter::FilterMode;

    /// Flat list world for collision tests.
    pub(crate) struct ListWorld {
        pub bodies: Vec<Collidable>,
        pub bounds: Rect,
    }

    impl SpatialQuery for ListWorld {
        fn overlapping(&self, rect: Rect) -> Vec<Collidable> {
            self.bodies
                .iter()
                .filter(|b| b.rect.intersects(&rect))
                .cloned()
                .collect()
        }

        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    pub(crate) fn body(id: u32, class: BodyClass, tag: &str, rect: Rect) -> Collidable {
        Collidable {
            id: EntityId(id),
            class,
            tag: tag.to_string(),
            rect,
            is_trigger: false,
            gate: None,
        }
    }

    fn world(bodies: Vec<Collidable>) -> ListWorld {
        ListWorld {
            bodies,
            bounds: Rect::new(0.0, 0.0, 1000.0, 1000.0),
        }
    }

    #[test]
    fn excludes_self_from_candidates() {
        let w = world(vec![
            body(1, BodyClass::Player, "Player", Rect::new(0.0, 0.0, 10.0, 10.0)),
            body(2, BodyClass::Sprite, "", Rect::new(5.0, 5.0, 10.0, 10.0)),
        ]);
        let c = query_candidates(&w, EntityId(1), &CollisionFilter::default(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].id, EntityId(2));
    }

    #[test]
    fn trigger_and_blocker_are_partitioned() {
        let mut trigger = body(2, BodyClass::Collectible, "Coin", Rect::new(0.0, 0.0, 10.0, 10.0));
        trigger.is_trigger = true;
        let blocker = body(3, BodyClass::Collider, "Wall", Rect::new(5.0, 0.0, 10.0, 10.0));
        let w = world(vec![trigger, blocker]);
        let filter = CollisionFilter::by_tag().with_tag("Coin").with_tag("Wall");

        let res = resolve(&w, EntityId(1), &filter, Rect::new(2.0, 2.0, 6.0, 6.0), Vec2::ZERO);
        assert_eq!(res.triggers.len(), 1);
        assert_eq!(res.triggers[0].id, EntityId(2));
        assert_eq!(res.blockers.len(), 1);
        assert_eq!(res.blockers[0].id, EntityId(3));
    }

    #[test]
    fn filtered_out_candidates_are_ignored() {
        let w = world(vec![body(2, BodyClass::Collider, "Water", Rect::new(0.0, 0.0, 10.0, 10.0))]);
        let filter = CollisionFilter::by_tag().with_tag("Wall");
        let res = resolve(&w, EntityId(1), &filter, Rect::new(0.0, 0.0, 5.0, 5.0), Vec2::ZERO);
        assert!(res.is_empty());

        let empty = CollisionFilter::none(FilterMode::Tag);
        let res = resolve(&w, EntityId(1), &empty, Rect::new(0.0, 0.0, 5.0, 5.0), Vec2::ZERO);
        assert!(res.is_empty());
    }

    #[test]
    fn one_way_body_passes_when_not_blocking() {
        let mut floor = body(2, BodyClass::DirectionalCollider, "", Rect::new(0.0, 10.0, 100.0, 10.0));
        floor.gate = Some(DirectionalGate {
            bottom: true,
            ..Default::default()
        });
        let w = world(vec![floor]);
        let probe = Rect::new(0.0, 5.0, 10.0, 10.0);
        let filter = CollisionFilter::default();

        let rising = resolve(&w, EntityId(1), &filter, probe, Vec2::new(0.0, -1.0));
        assert!(rising.is_empty());

        let falling = resolve(&w, EntityId(1), &filter, probe, Vec2::new(0.0, 1.0));
        assert_eq!(falling.blockers.len(), 1);
    }
}
