//! Reactions to the contacts of a physics step.

use glam::Vec2;
use log::{debug, info};
use crate::api::game::EngineContext;
use crate::api::types::{EntityId, GameEvent};
use crate::collision::contact::ContactEvent;
use crate::entities::collectible::{
    CollectibleKind, PICKUP_PARTICLES, PICKUP_PARTICLE_ACCELERATION, PICKUP_PARTICLE_SIZE,
    PICKUP_PARTICLE_SPEED,
};
use crate::entities::particle::{Particle, ParticleKind};
use crate::entities::player::{KILL_ZONE_TAG, PLAYER_TAG};
use crate::entities::ScheduledAction;

/// Handle the queued contacts in the order they were raised. The queue
/// stays readable through [`EngineContext::contacts`] until the next step.
pub fn dispatch_contacts(ctx: &mut EngineContext) {
    let contacts = std::mem::take(&mut ctx.contacts);
    for contact in &contacts {
        match *contact {
            ContactEvent::TriggerFired { trigger, other } => on_trigger(ctx, trigger, other),
            ContactEvent::Collision { body, other } => on_collision(ctx, body, other),
            ContactEvent::SteppedOn { surface, entity } => {
                if let Some(platform) = ctx.scene.get_mut(surface).and_then(|e| e.platform.as_mut()) {
                    platform.on_stepped_on(entity);
                }
            }
        }
    }
    ctx.contacts = contacts;
}

fn is_player(ctx: &EngineContext, id: EntityId) -> bool {
    ctx.scene
        .get(id)
        .map_or(false, |e| e.collision_tag() == PLAYER_TAG)
}

fn on_trigger(ctx: &mut EngineContext, trigger: EntityId, other: EntityId) {
    let Some(entity) = ctx.scene.get(trigger) else {
        return;
    };
    if !entity.active {
        return;
    }

    if let Some(ParticleKind::Travel { target }) = entity.particle.as_ref().map(|p| p.kind) {
        if target == other {
            if let Some(particle) = ctx.scene.get_mut(trigger).and_then(|e| e.particle.as_mut()) {
                particle.reach();
            }
        }
        return;
    }

    if !is_player(ctx, other) {
        return;
    }
    if let Some(level) = entity.level_trigger.as_ref().map(|t| t.level.clone()) {
        info!("Level trigger {:?} requests {}", trigger, level);
        ctx.request_level(&level);
    } else if entity.collectible.is_some() {
        collect(ctx, trigger, other);
    }
}

fn on_collision(ctx: &mut EngineContext, body: EntityId, other: EntityId) {
    let killed = ctx
        .scene
        .get(other)
        .map_or(false, |e| e.collision_tag() == KILL_ZONE_TAG);
    if !killed || !is_player(ctx, body) {
        return;
    }
    // One death per step.
    if ctx.pending_level().is_some() {
        return;
    }
    let center = ctx
        .scene
        .get(body)
        .map_or(Vec2::ZERO, |e| e.visual_rect().center());
    info!("Player {:?} hit a kill zone", body);
    ctx.emit_event(GameEvent::new(GameEvent::PLAYER_DIED, center.x, center.y, 0.0));
    ctx.request_reload();
}

/// Pick `id` up for `player`: hide it, schedule its return, reward the player.
fn collect(ctx: &mut EngineContext, id: EntityId, player: EntityId) {
    let can_dash = ctx
        .scene
        .get(player)
        .and_then(|e| e.player.as_ref())
        .map_or(true, |p| p.can_dash);

    let Some(entity) = ctx.scene.get_mut(id) else {
        return;
    };
    let Some(collectible) = entity.collectible.clone() else {
        return;
    };
    if !collectible.wants(can_dash) {
        return;
    }
    entity.active = false;
    let center = entity.visual_rect().center();
    debug!("Collected {:?}", id);

    if collectible.respawn_ms > 0 {
        ctx.schedule.after(collectible.respawn_ms, ScheduledAction::Respawn(id));
    } else {
        ctx.despawn_later(id);
    }
    if collectible.kind == CollectibleKind::DashRefill {
        if let Some(p) = ctx.scene.get_mut(player).and_then(|e| e.player.as_mut()) {
            p.recharge_dash();
        }
    }
    if let Some(sound) = collectible.sound {
        ctx.emit_sound(sound);
    }
    ctx.emit_event(GameEvent::new(GameEvent::COLLECTED, center.x, center.y, id.0 as f32));

    if let Some(texture) = collectible.particle_texture {
        for _ in 0..PICKUP_PARTICLES {
            ctx.spawn_particle(
                center,
                Vec2::splat(PICKUP_PARTICLE_SIZE),
                Particle::travel(player, PICKUP_PARTICLE_SPEED, PICKUP_PARTICLE_ACCELERATION),
                Some(texture),
            );
        }
    }
}
