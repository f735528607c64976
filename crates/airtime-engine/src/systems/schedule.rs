use log::debug;
use crate::api::game::EngineContext;
use crate::entities::ScheduledAction;

/// Advance simulation time and run every action that came due.
/// Actions whose entity is gone are dropped.
pub fn run_due_actions(ctx: &mut EngineContext, elapsed_ms: u32) {
    for action in ctx.schedule.advance(elapsed_ms) {
        let Some(entity) = ctx.scene.get_mut(action.entity()) else {
            debug!("Dropping {:?}: entity is gone", action);
            continue;
        };
        match action {
            ScheduledAction::EndDash(_) => {
                if let (Some(player), Some(body)) = (entity.player.as_mut(), entity.body.as_mut()) {
                    player.end_dash(body);
                }
            }
            ScheduledAction::ReturnPlatform(_) => {
                if let Some(platform) = entity.platform.as_mut() {
                    platform.start_move();
                }
            }
            ScheduledAction::Respawn(_) => {
                entity.active = true;
                if let Some(anim) = entity.animation.as_mut() {
                    anim.restart();
                }
            }
        }
    }
}
