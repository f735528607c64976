//! Game objects built out of the fat [`Entity`](crate::components::entity::Entity).

pub mod collectible;
pub mod level_trigger;
pub mod particle;
pub mod platform;
pub mod player;

use crate::api::types::EntityId;

/// Work deferred to a later tick through the engine schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Finish the player's dash.
    EndDash(EntityId),
    /// Send a platform back along its path.
    ReturnPlatform(EntityId),
    /// Bring a collected pickup back.
    Respawn(EntityId),
}

impl ScheduledAction {
    pub fn entity(&self) -> EntityId {
        match *self {
            ScheduledAction::EndDash(id)
            | ScheduledAction::ReturnPlatform(id)
            | ScheduledAction::Respawn(id) => id,
        }
    }
}
