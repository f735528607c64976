use crate::api::types::EntityId;

/// Notifications raised while moving bodies.
///
/// They are queued during the physics step and handled once afterwards, so
/// handlers never run while the scene is being iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// `other` entered the trigger zone `trigger`.
    TriggerFired { trigger: EntityId, other: EntityId },
    /// The moving `body` was stopped by `other`.
    Collision { body: EntityId, other: EntityId },
    /// `entity` is standing on `surface`.
    SteppedOn { surface: EntityId, entity: EntityId },
}
