use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::filter::BodyClass;
use crate::components::collider::Collider;
use crate::components::entity::Entity;

/// Zone that loads another level when the player enters it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTrigger {
    pub level: String,
}

impl LevelTrigger {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }

    /// Parse the target out of a level tag such as `LevelTrigger-level2`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let (_, level) = tag.split_once('-')?;
        let level = level.split('-').next().unwrap_or(level);
        if level.is_empty() {
            return None;
        }
        Some(Self::new(level))
    }

    pub fn spawn(id: EntityId, pos: Vec2, size: Vec2, trigger: LevelTrigger) -> Entity {
        Entity::new(id)
            .with_tag(format!("LevelTrigger-{}", trigger.level))
            .with_pos(pos)
            .with_size(size)
            .with_collider(Collider::trigger(BodyClass::LevelTrigger))
            .with_level_trigger(trigger)
    }
}
