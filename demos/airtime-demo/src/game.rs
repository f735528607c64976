use airtime_engine::*;
use airtime_engine::entities::particle::{Particle, ParticleKind};
use glam::Vec2;
use log::{error, info};

const MANIFEST: &str = include_str!("../assets/manifest.json");

const LEVELS: [(&str, &str); 3] = [
    ("level1", include_str!("../levels/level1.json")),
    ("level2", include_str!("../levels/level2.json")),
    ("level3", include_str!("../levels/level3.json")),
];

const FIRST_LEVEL: &str = "level1";

const LAND_SOUND: SoundEvent = SoundEvent(2);
const DEATH_SOUND: SoundEvent = SoundEvent(3);

const DUST_TEXTURE: &str = "dust.png";
const DUST_PUFFS: usize = 3;
const DUST_SIZE: f32 = 12.0;
const DUST_SPEED: f32 = 0.4;
const DUST_FADE_MS: u32 = 300;

/// Custom host events (`game_custom_event`).
const CUSTOM_RESTART: u32 = 1;
const CUSTOM_SKIP_LEVEL: u32 = 2;

/// Three short levels: walk, dash, ride platforms, climb.
pub struct AirtimeGame {
    deaths: u32,
    dust_texture: Option<u32>,
}

impl AirtimeGame {
    pub fn new() -> Self {
        Self {
            deaths: 0,
            dust_texture: None,
        }
    }

    fn kick_up_dust(&self, ctx: &mut EngineContext, feet: Vec2) {
        for _ in 0..DUST_PUFFS {
            let dust = Particle::new(ParticleKind::Dust)
                .with_initial_speed(DUST_SPEED)
                .with_fade_ms(DUST_FADE_MS);
            let center = feet - Vec2::new(0.0, DUST_SIZE * 0.5);
            ctx.spawn_particle(center, Vec2::splat(DUST_SIZE), dust, self.dust_texture);
        }
    }

    fn skip_level(ctx: &mut EngineContext) {
        let current = ctx.levels.current().unwrap_or(FIRST_LEVEL);
        let index = LEVELS.iter().position(|(name, _)| *name == current).unwrap_or(0);
        let (next, _) = LEVELS[(index + 1) % LEVELS.len()];
        ctx.request_level(next);
    }
}

impl Game for AirtimeGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        match AssetManifest::from_json(MANIFEST) {
            Ok(manifest) => {
                self.dust_texture = manifest.texture(DUST_TEXTURE).map(|(idx, _)| idx);
                ctx.levels.set_manifest(manifest);
            }
            Err(e) => error!("Bundled manifest is invalid: {}", e),
        }
        for (name, json) in LEVELS {
            ctx.levels.register(name, json);
        }
        if let Err(e) = ctx.load_level(FIRST_LEVEL) {
            error!("Cannot load {}: {}", FIRST_LEVEL, e);
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if input.custom(CUSTOM_RESTART).next().is_some() {
            ctx.request_reload();
        }
        if input.custom(CUSTOM_SKIP_LEVEL).next().is_some() {
            Self::skip_level(ctx);
        }

        let events = ctx.events.clone();
        for event in events {
            if event.kind == GameEvent::PLAYER_LANDED {
                self.kick_up_dust(ctx, Vec2::new(event.a, event.b));
                ctx.emit_sound(LAND_SOUND);
            } else if event.kind == GameEvent::PLAYER_DIED {
                self.deaths += 1;
                info!("Deaths: {}", self.deaths);
                ctx.emit_sound(DEATH_SOUND);
            }
        }
    }
}
