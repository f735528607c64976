use glam::Vec2;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::api::types::{EntityId, GameEvent, SoundEvent};
use crate::collision::contact::ContactEvent;
use crate::components::entity::Entity;
use crate::core::geometry::Rect;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::schedule::Schedule;
use crate::entities::particle::Particle;
use crate::entities::ScheduledAction;
use crate::input::bindings::KeyBindings;
use crate::input::queue::InputQueue;
use crate::level::{LevelError, LevelLoader};
use crate::physics::grounded::DEFAULT_GROUNDED_DISTANCE;
use crate::renderer::camera::Camera;
use crate::systems;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World width before a level sets its own (default: 800).
    pub world_width: f32,
    /// World height before a level sets its own (default: 600).
    pub world_height: f32,
    /// Visible area handed to the camera.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Probe distance for the grounded check.
    pub grounded_distance: f32,
    /// Longest single tick; longer host frames are cut down to this.
    pub max_tick_ms: u32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for particle randomness.
    pub rng_seed: u64,
    pub key_bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            grounded_distance: DEFAULT_GROUNDED_DISTANCE,
            max_tick_ms: 100,
            max_instances: 512,
            max_sounds: 32,
            max_events: 32,
            rng_seed: 42,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Register levels, load the first one.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Called after the engine step of every tick. Contacts of that step are
    /// available through [`EngineContext::contacts`].
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Level change requested during a tick, applied at its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelRequest {
    Load(String),
    Reload,
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub schedule: Schedule<ScheduledAction>,
    pub levels: LevelLoader,
    pub camera: Camera,
    pub rng: Rng,
    pub bindings: KeyBindings,
    pub grounded_distance: f32,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    pub(crate) contacts: Vec<ContactEvent>,
    pending_level: Option<LevelRequest>,
    pending_despawns: Vec<EntityId>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let bounds = Rect::new(0.0, 0.0, config.world_width, config.world_height);
        Self {
            scene: Scene::new(bounds),
            schedule: Schedule::new(),
            levels: LevelLoader::default(),
            camera: Camera::new(config.viewport_width, config.viewport_height, bounds),
            rng: Rng::new(config.rng_seed),
            bindings: config.key_bindings.clone(),
            grounded_distance: config.grounded_distance,
            sounds: Vec::new(),
            events: Vec::new(),
            contacts: Vec::new(),
            pending_level: None,
            pending_despawns: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Contacts produced by the last step, in the order they happened.
    pub fn contacts(&self) -> &[ContactEvent] {
        &self.contacts
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.scene.spawn(entity);
        id
    }

    /// Spawn a particle centred on `center`.
    pub fn spawn_particle(
        &mut self,
        center: Vec2,
        size: Vec2,
        particle: Particle,
        texture: Option<u32>,
    ) -> EntityId {
        let id = self.next_id();
        let mut entity = Particle::spawn(id, center, size, particle, &mut self.rng);
        entity.texture = texture;
        self.spawn(entity)
    }

    /// Remove an entity at the end of the current step.
    pub fn despawn_later(&mut self, id: EntityId) {
        if !self.pending_despawns.contains(&id) {
            self.pending_despawns.push(id);
        }
    }

    /// Load `name` at the end of the current step.
    pub fn request_level(&mut self, name: &str) {
        self.pending_level = Some(LevelRequest::Load(name.to_string()));
    }

    /// Restart the current level at the end of the current step.
    pub fn request_reload(&mut self) {
        if self.pending_level.is_none() {
            self.pending_level = Some(LevelRequest::Reload);
        }
    }

    pub fn pending_level(&self) -> Option<&LevelRequest> {
        self.pending_level.as_ref()
    }

    /// Replace the scene with the level `name`.
    ///
    /// The level is built before anything is touched, so on error the
    /// current scene stays as it was.
    pub fn load_level(&mut self, name: &str) -> Result<(), LevelError> {
        let next_id = &mut self.next_id;
        let level = self.levels.build(name, || {
            let id = EntityId(*next_id);
            *next_id += 1;
            id
        })?;

        let previous = self.scene.player().and_then(|e| e.player.clone());
        self.scene.clear();
        self.schedule.clear();
        self.pending_despawns.clear();
        self.scene.set_bounds(level.bounds);
        self.camera.set_bounds(level.bounds);

        let count = level.entities.len();
        for mut entity in level.entities {
            if let (Some(player), Some(previous)) = (entity.player.as_mut(), previous.as_ref()) {
                player.carry_input_from(previous);
            }
            self.scene.spawn(entity);
        }
        if let Some(center) = self.scene.player().map(|e| e.visual_rect().center()) {
            self.camera.look_at(center);
        }

        self.levels.set_current(&level.name);
        info!("Loaded level {} ({} entities)", level.name, count);
        self.emit_event(GameEvent::new(
            GameEvent::LEVEL_LOADED,
            level.bounds.w,
            level.bounds.h,
            0.0,
        ));
        Ok(())
    }

    /// Reload the level currently in the scene.
    pub fn reload_level(&mut self) -> Result<(), LevelError> {
        let name = self
            .levels
            .current()
            .ok_or(LevelError::NoCurrentLevel)?
            .to_string();
        self.load_level(&name)
    }

    /// Advance the simulation by one tick.
    ///
    /// Input, due scheduled actions, platforms, player control, particles,
    /// then physics for every body in scene order. Contacts are dispatched
    /// after all bodies moved. Despawns and level changes happen last.
    pub fn step(&mut self, elapsed_ms: u32, input: &InputQueue) {
        self.contacts.clear();

        systems::input::apply_input(self, input);
        systems::schedule::run_due_actions(self, elapsed_ms);
        systems::behaviour::move_platforms(self, elapsed_ms);
        systems::behaviour::steer_players(self, elapsed_ms);
        systems::behaviour::update_particles(self, elapsed_ms);
        systems::physics::step_bodies(self, elapsed_ms);
        systems::contacts::dispatch_contacts(self);
        systems::animation::tick_animations(&mut self.scene, elapsed_ms);

        if let Some(center) = self.scene.player().map(|e| e.visual_rect().center()) {
            self.camera.look_at(center);
        }

        for id in std::mem::take(&mut self.pending_despawns) {
            self.scene.despawn(id);
        }
        self.apply_level_request();
    }

    fn apply_level_request(&mut self) {
        let result = match self.pending_level.take() {
            None => return,
            Some(LevelRequest::Load(name)) => self.load_level(&name),
            Some(LevelRequest::Reload) => self.reload_level(),
        };
        if let Err(e) = result {
            warn!("Level change failed, keeping current level: {}", e);
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
