use std::collections::HashMap;
use glam::Vec2;
use log::debug;
use crate::api::types::EntityId;
use crate::assets::manifest::AssetManifest;
use crate::collision::filter::BodyClass;
use crate::components::animation::FrameAnimation;
use crate::components::collider::Collider;
use crate::components::entity::Entity;
use crate::core::geometry::Rect;
use crate::entities::collectible::Collectible;
use crate::entities::level_trigger::LevelTrigger;
use crate::entities::platform::MovingPlatform;
use crate::entities::player::{self, Player};
use crate::level::data::{LevelData, SpriteRecord};
use crate::level::tag::{parse_tag, ParsedTag, TagKind};
use crate::level::LevelError;

/// Texture released by pickups as travel particles, when the manifest has it.
pub const PICKUP_PARTICLE_TEXTURE: &str = "particle.png";

/// A level turned into entities, ready to replace the scene.
#[derive(Debug, Clone)]
pub struct LoadedLevel {
    pub name: String,
    pub bounds: Rect,
    pub background: Option<String>,
    pub entities: Vec<Entity>,
}

/// Registry of level documents plus the manifest used to size sprites.
#[derive(Debug, Default)]
pub struct LevelLoader {
    levels: HashMap<String, String>,
    manifest: AssetManifest,
    current: Option<String>,
}

/// Level names are accepted with or without the `.json` suffix.
fn level_key(name: &str) -> &str {
    name.strip_suffix(".json").unwrap_or(name)
}

fn default_texture(kind: &TagKind) -> &'static str {
    match kind {
        TagKind::Player => "idle-player.png",
        TagKind::DashRefill => "energy.png",
        TagKind::MovingPlatform => "plateform.png",
        TagKind::LevelTrigger(_) => "kill-zone.png",
        _ => "",
    }
}

impl LevelLoader {
    pub fn new(manifest: AssetManifest) -> Self {
        Self {
            manifest,
            ..Self::default()
        }
    }

    pub fn set_manifest(&mut self, manifest: AssetManifest) {
        self.manifest = manifest;
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Register (or replace) a level document under `name`.
    pub fn register(&mut self, name: &str, json: impl Into<String>) {
        self.levels.insert(level_key(name).to_string(), json.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.levels.contains_key(level_key(name))
    }

    /// Name of the level currently in the scene.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn set_current(&mut self, name: &str) {
        self.current = Some(level_key(name).to_string());
    }

    /// Build the entities of a level. Nothing is changed on failure.
    pub fn build(
        &self,
        name: &str,
        mut next_id: impl FnMut() -> EntityId,
    ) -> Result<LoadedLevel, LevelError> {
        let key = level_key(name);
        let json = self
            .levels
            .get(key)
            .ok_or_else(|| LevelError::UnknownLevel(name.to_string()))?;
        let data = LevelData::from_json(json)?;

        let entities = data
            .sprites
            .iter()
            .map(|record| self.build_sprite(record, next_id()))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built level {} with {} entities", key, entities.len());

        Ok(LoadedLevel {
            name: key.to_string(),
            bounds: Rect::new(0.0, 0.0, data.scene_width, data.scene_height),
            background: data.background,
            entities,
        })
    }

    fn build_sprite(&self, record: &SpriteRecord, id: EntityId) -> Result<Entity, LevelError> {
        let tag = parse_tag(&record.tag)?;
        let texture_name = if record.texture_name.is_empty() {
            default_texture(&tag.kind)
        } else {
            record.texture_name.as_str()
        };
        let texture = self.manifest.texture(texture_name);
        let size = sprite_size(record, &tag, texture.map(|(_, t)| t.frame_size()), texture_name)?;
        let pos = Vec2::new(record.x, record.y);

        let mut entity = match &tag.kind {
            TagKind::Sprite => Entity::new(id)
                .with_pos(pos)
                .with_size(size)
                .with_collider(Collider::new(BodyClass::Sprite)),
            TagKind::LevelTrigger(trigger) => LevelTrigger::spawn(id, pos, size, trigger.clone()),
            TagKind::Directional(gate) => Entity::new(id)
                .with_pos(pos)
                .with_size(size)
                .with_collider(Collider::new(BodyClass::DirectionalCollider))
                .with_gate(*gate),
            TagKind::Player => Player::spawn(id, pos, size),
            TagKind::DashRefill => {
                let mut refill = Collectible::dash_refill();
                if let Some((idx, _)) = self.manifest.texture(PICKUP_PARTICLE_TEXTURE) {
                    refill = refill.with_particles(idx);
                }
                Collectible::spawn(id, pos, size, refill)
            }
            TagKind::MovingPlatform => {
                let missing = |what: &str| LevelError::BadTag {
                    tag: record.tag.clone(),
                    reason: format!("moving platform needs a {} parameter", what),
                };
                let move_vector = tag.move_vector().ok_or_else(|| missing("Move"))?;
                let duration = tag.duration_ms().ok_or_else(|| missing("Duration"))?;
                MovingPlatform::spawn(id, pos, size, MovingPlatform::new(move_vector, duration))
            }
            TagKind::Collider(collision_tag) => Entity::new(id)
                .with_pos(pos)
                .with_size(size)
                .with_collider(
                    Collider::new(BodyClass::Collider).with_collision_tag(collision_tag.clone()),
                ),
        };

        if !tag.base.is_empty() {
            entity.tag = tag.base.clone();
        }
        let mut entity = entity
            .with_rotation(record.rotation)
            .with_z_index(record.z_index)
            .with_opacity(record.opacity);
        entity.texture = texture.map(|(idx, _)| idx);
        if let Some(frames) = tag.anim() {
            entity.animation = Some(FrameAnimation::new(frames.to_vec()));
        }
        Ok(entity)
    }
}

/// Explicit `width`/`height`, else the texture's frame size, else the
/// player default; then scaled.
fn sprite_size(
    record: &SpriteRecord,
    tag: &ParsedTag,
    texture_size: Option<Vec2>,
    texture_name: &str,
) -> Result<Vec2, LevelError> {
    let fallback = texture_size.or(match tag.kind {
        TagKind::Player => Some(player::DEFAULT_SIZE),
        _ => None,
    });
    let w = record.width.or(fallback.map(|s| s.x));
    let h = record.height.or(fallback.map(|s| s.y));
    match (w, h) {
        (Some(w), Some(h)) => Ok(Vec2::new(w, h) * record.scale),
        _ => Err(LevelError::MissingSize {
            tag: record.tag.clone(),
            texture: texture_name.to_string(),
        }),
    }
}
