use crate::collision::filter::{BodyClass, CollisionFilter};
use crate::core::geometry::Rect;

/// Collision data of an entity.
///
/// An entity without a `Collider` is decoration: spatial queries never
/// return it and it never moves anything.
#[derive(Debug, Clone)]
pub struct Collider {
    /// Declared kind, matched by class-based filters.
    pub class: BodyClass,
    /// Identity matched by tag-based filters. Empty means untagged.
    pub collision_tag: String,
    /// Triggers raise notifications and never push anything.
    pub is_trigger: bool,
    /// Which bodies this collider reacts to when it moves.
    pub filter: CollisionFilter,
    /// Collision rectangle relative to the visual rectangle: `w`/`h` is the
    /// size, centred on the visual rect, then shifted by `x`/`y`.
    pub override_rect: Option<Rect>,
}

impl Collider {
    pub fn new(class: BodyClass) -> Self {
        Self {
            class,
            collision_tag: String::new(),
            is_trigger: false,
            filter: CollisionFilter::default(),
            override_rect: None,
        }
    }

    /// A non-moving trigger zone.
    pub fn trigger(class: BodyClass) -> Self {
        Self {
            is_trigger: true,
            ..Self::new(class)
        }
    }

    pub fn with_collision_tag(mut self, tag: impl Into<String>) -> Self {
        self.collision_tag = tag.into();
        self
    }

    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_override(mut self, rect: Rect) -> Self {
        self.override_rect = Some(rect);
        self
    }

    /// World-space collision rectangle for an entity drawn at `visual`.
    ///
    /// An override with no area falls back to the visual rectangle so a
    /// collider never ends up empty by accident.
    pub fn world_rect(&self, visual: Rect) -> Rect {
        match self.override_rect {
            Some(o) if !o.is_empty() => {
                Rect::centered_at(visual.center(), o.size()).translated(o.min())
            }
            _ => visual,
        }
    }
}
