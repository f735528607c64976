//! Advances sprite-strip clocks.

use crate::core::scene::Scene;

/// Tick every active entity's animation by `elapsed_ms`.
pub fn tick_animations(scene: &mut Scene, elapsed_ms: u32) {
    for entity in scene.iter_mut() {
        if !entity.active {
            continue;
        }
        if let Some(ref mut anim) = entity.animation {
            anim.tick(elapsed_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::animation::FrameAnimation;
    use crate::components::entity::Entity;
    use crate::core::geometry::Rect;

    #[test]
    fn tick_advances_frame() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        scene.spawn(Entity::new(EntityId(1)).with_animation(FrameAnimation::new(vec![100, 100])));

        tick_animations(&mut scene, 150);
        assert_eq!(scene.get(EntityId(1)).unwrap().animation.as_ref().unwrap().frame, 1);
    }

    #[test]
    fn hidden_entities_keep_their_frame() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut e = Entity::new(EntityId(1)).with_animation(FrameAnimation::new(vec![100, 100]));
        e.active = false;
        scene.spawn(e);

        tick_animations(&mut scene, 150);
        assert_eq!(scene.get(EntityId(1)).unwrap().animation.as_ref().unwrap().frame, 0);
    }
}
