use glam::Vec2;
use crate::api::game::EngineContext;
use crate::api::types::GameEvent;
use crate::entities::player::{PlayerRequest, DASH_TIME_MS};
use crate::entities::ScheduledAction;
use crate::input::queue::InputQueue;

/// Feed this tick's key events to every player.
///
/// Jumps and dashes act immediately; the dash end is scheduled.
pub fn apply_input(ctx: &mut EngineContext, input: &InputQueue) {
    for (key_code, down) in input.keys() {
        let Some(control) = ctx.bindings.control_for(key_code) else {
            continue;
        };

        for entity in ctx.scene.iter_mut() {
            let id = entity.id;
            let feet = entity
                .collision_rect()
                .map(|r| Vec2::new(r.center().x, r.bottom()))
                .unwrap_or(entity.pos);
            let (Some(player), Some(body)) = (entity.player.as_mut(), entity.body.as_mut()) else {
                continue;
            };
            if !down {
                player.release(control);
                continue;
            }
            match player.press(control) {
                Some(PlayerRequest::Jump) => {
                    if player.jump(body) {
                        ctx.events.push(GameEvent::new(GameEvent::PLAYER_JUMPED, feet.x, feet.y, 0.0));
                    }
                }
                Some(PlayerRequest::Dash) => {
                    if player.start_dash(body) {
                        ctx.schedule.after(DASH_TIME_MS, ScheduledAction::EndDash(id));
                        let dir = player.dash_vector.normalize_or_zero();
                        ctx.events.push(GameEvent::new(GameEvent::PLAYER_DASHED, dir.x, dir.y, 0.0));
                    }
                }
                None => {}
            }
        }
    }
}
