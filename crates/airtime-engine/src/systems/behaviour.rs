//! Entity behaviours that run before physics: platforms, player control,
//! particle steering and fading.

use glam::Vec2;
use log::warn;
use crate::api::game::EngineContext;
use crate::api::types::EntityId;
use crate::entities::particle::ParticleKind;
use crate::entities::platform::RETURN_DELAY_MS;
use crate::entities::ScheduledAction;
use crate::physics::integrator::{move_by, Mover};

/// Move every travelling platform and carry the bodies that stood on it
/// during the previous step.
pub fn move_platforms(ctx: &mut EngineContext, elapsed_ms: u32) {
    for idx in 0..ctx.scene.len() {
        let Some(entity) = ctx.scene.entity_at_mut(idx) else {
            continue;
        };
        if !entity.active {
            continue;
        }
        let id = entity.id;
        let Some(platform) = entity.platform.as_mut() else {
            continue;
        };
        let step = platform.advance(elapsed_ms);
        let riders = std::mem::take(&mut platform.riders);
        entity.translate(step.delta);

        if step.schedule_return {
            ctx.schedule.after(RETURN_DELAY_MS, ScheduledAction::ReturnPlatform(id));
        }
        if step.delta != Vec2::ZERO {
            for rider in riders {
                carry(ctx, rider, step.delta);
            }
        }
    }
}

/// Move a rider with its platform. The rider still collides with the rest
/// of the world on the way.
fn carry(ctx: &mut EngineContext, id: EntityId, delta: Vec2) {
    let Some(idx) = ctx.scene.index_of(id) else {
        return;
    };
    let Some(entity) = ctx.scene.entity_at(idx) else {
        return;
    };
    let (Some(rect), Some(collider), Some(mut body)) =
        (entity.collision_rect(), entity.collider.as_ref(), entity.body)
    else {
        return;
    };
    let filter = collider.filter.clone();
    let mover = Mover { id, rect, filter: &filter };
    let outcome = move_by(&mut body, &mover, &ctx.scene, delta, ctx.grounded_distance);

    if let Some(entity) = ctx.scene.entity_at_mut(idx) {
        entity.translate(outcome.delta);
        entity.body = Some(body);
    }
}

/// Horizontal control for every player that is not dashing.
pub fn steer_players(ctx: &mut EngineContext, elapsed_ms: u32) {
    for entity in ctx.scene.iter_mut() {
        if !entity.active {
            continue;
        }
        if let (Some(player), Some(body)) = (entity.player.as_mut(), entity.body.as_mut()) {
            if !player.dashing {
                player.walk(body, elapsed_ms);
            }
        }
    }
}

/// Steer travel particles and fade the ones that are fading.
/// A travel particle whose target is gone despawns.
pub fn update_particles(ctx: &mut EngineContext, elapsed_ms: u32) {
    for idx in 0..ctx.scene.len() {
        let Some(entity) = ctx.scene.entity_at(idx) else {
            continue;
        };
        let Some(particle) = entity.particle.as_ref().filter(|_| entity.active) else {
            continue;
        };
        let kind = particle.kind;
        let id = entity.id;
        let center = entity.visual_rect().center();

        let target_center = match kind {
            ParticleKind::Travel { target } => {
                match ctx.scene.get(target).map(|t| t.visual_rect().center()) {
                    Some(c) => Some(c),
                    None => {
                        warn!("Particle {:?} lost its target {:?}", id, target);
                        ctx.despawn_later(id);
                        continue;
                    }
                }
            }
            _ => None,
        };

        let Some(entity) = ctx.scene.entity_at_mut(idx) else {
            continue;
        };
        let opacity = entity.opacity;
        let (Some(particle), Some(body)) = (entity.particle.as_mut(), entity.body.as_mut()) else {
            continue;
        };
        if let Some(target_center) = target_center {
            if !particle.is_fading() {
                body.velocity = particle.steer(body.velocity, target_center - center, elapsed_ms, &mut ctx.rng);
            }
        }
        let faded = particle.fade(opacity, elapsed_ms);
        match faded {
            Some(o) => entity.opacity = o,
            None => ctx.despawn_later(id),
        }
    }
}
