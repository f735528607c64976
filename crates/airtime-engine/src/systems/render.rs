use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Instances are ordered back to front by `z_index`; equal indices keep
/// scene order. Inactive and untextured entities are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut visible: Vec<&Entity> = entities
        .filter(|e| e.active && e.texture.is_some())
        .collect();
    visible.sort_by_key(|e| e.z_index);

    for entity in visible {
        let Some(texture) = entity.texture else {
            continue;
        };
        let (state, facing) = entity
            .player
            .as_ref()
            .map_or((0.0, 1.0), |p| (p.anim.code(), p.facing));

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            w: entity.size.x,
            h: entity.size.y,
            rotation: entity.rotation,
            opacity: entity.opacity,
            texture: texture as f32,
            frame: entity.animation.as_ref().map_or(0.0, |a| a.frame as f32),
            state,
            facing,
            z_index: entity.z_index as f32,
            entity_id: entity.id.0 as f32,
        };
        if !buffer.push(instance) {
            break;
        }
    }
}
