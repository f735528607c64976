use glam::Vec2;
use crate::api::game::EngineContext;
use crate::api::types::GameEvent;
use crate::collision::contact::ContactEvent;
use crate::physics::integrator::{integrate, Mover};

/// Integrate every active body once, in scene order, against the scene as
/// it stands. Platforms move on their own and are skipped.
///
/// Contacts are queued on the context; nothing reacts to them until
/// every body has moved.
pub fn step_bodies(ctx: &mut EngineContext, elapsed_ms: u32) {
    for idx in 0..ctx.scene.len() {
        let Some(entity) = ctx.scene.entity_at(idx) else {
            continue;
        };
        if !entity.active || entity.platform.is_some() {
            continue;
        }
        let (Some(mut body), Some(collider), Some(rect)) =
            (entity.body, entity.collider.as_ref(), entity.collision_rect())
        else {
            continue;
        };
        let id = entity.id;
        let filter = collider.filter.clone();

        let mover = Mover { id, rect, filter: &filter };
        let outcome = integrate(&mut body, &mover, &ctx.scene, elapsed_ms, ctx.grounded_distance);

        for trigger in &outcome.resolution.triggers {
            ctx.contacts.push(ContactEvent::TriggerFired {
                trigger: trigger.id,
                other: id,
            });
        }
        for blocker in &outcome.resolution.blockers {
            ctx.contacts.push(ContactEvent::Collision {
                body: id,
                other: blocker.id,
            });
        }
        for &surface in &outcome.ground.surfaces {
            ctx.contacts.push(ContactEvent::SteppedOn { surface, entity: id });
        }

        let Some(entity) = ctx.scene.entity_at_mut(idx) else {
            continue;
        };
        entity.translate(outcome.delta);
        entity.body = Some(body);
        if let Some(player) = entity.player.as_mut() {
            if player.after_ground_check(outcome.ground.grounded) {
                let feet = Vec2::new(outcome.rect.center().x, outcome.rect.bottom());
                ctx.events.push(GameEvent::new(GameEvent::PLAYER_LANDED, feet.x, feet.y, 0.0));
            }
        }
    }
}
