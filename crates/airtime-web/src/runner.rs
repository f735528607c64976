use airtime_engine::bridge::protocol::{
    HEADER_CAMERA_X, HEADER_CAMERA_Y, HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER,
    HEADER_INSTANCE_COUNT, HEADER_SOUND_COUNT, HEADER_TIME_MS, HEADER_VIEW_HEIGHT,
    HEADER_VIEW_WIDTH, HEADER_WORLD_HEIGHT, HEADER_WORLD_WIDTH,
};
use airtime_engine::{
    build_render_buffer, AssetManifest, EngineContext, Game, GameConfig, GameEvent, InputEvent,
    InputQueue, ProtocolLayout, RenderBuffer, SpatialQuery, TickClock,
};
use log::{error, warn};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `airtime-demo`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: TickClock,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    header: [f32; HEADER_FLOATS],
    /// Sound ids of the last tick, one float each.
    sound_buffer: Vec<f32>,
    /// Game events of the last tick, capped at `max_events`.
    event_buffer: Vec<GameEvent>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_config(game, &config)
    }

    fn with_config(game: G, config: &GameConfig) -> Self {
        let layout = ProtocolLayout::from_config(config);
        Self {
            game,
            ctx: EngineContext::from_config(config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            clock: TickClock::new(config.max_tick_ms),
            header: layout.initial_header(),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            event_buffer: Vec::with_capacity(config.max_events),
            layout,
            initialized: false,
            frame: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.write_header();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: a single engine step sized by the frame delta,
    /// then the game's own update, then repack everything the host reads.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let elapsed_ms = self.clock.frame(frame_dt);
        self.ctx.step(elapsed_ms, &self.input);
        self.game.update(&mut self.ctx, &self.input);

        self.input.clear();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        self.sound_buffer.clear();
        self.sound_buffer.extend(
            self.ctx
                .sounds
                .iter()
                .take(self.layout.max_sounds)
                .map(|s| s.0 as f32),
        );
        self.event_buffer.clear();
        self.event_buffer
            .extend(self.ctx.events.iter().take(self.layout.max_events).copied());
        if self.ctx.events.len() > self.layout.max_events {
            warn!(
                "Dropped {} game events this frame",
                self.ctx.events.len() - self.layout.max_events
            );
        }

        self.frame = self.frame.wrapping_add(1);
        self.write_header();
    }

    fn write_header(&mut self) {
        let bounds = self.ctx.scene.bounds();
        let view = self.ctx.camera.view();
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_WORLD_WIDTH] = bounds.w;
        h[HEADER_WORLD_HEIGHT] = bounds.h;
        h[HEADER_SOUND_COUNT] = self.sound_buffer.len() as f32;
        h[HEADER_EVENT_COUNT] = self.event_buffer.len() as f32;
        h[HEADER_CAMERA_X] = view.x;
        h[HEADER_CAMERA_Y] = view.y;
        h[HEADER_VIEW_WIDTH] = view.w;
        h[HEADER_VIEW_HEIGHT] = view.h;
        h[HEADER_TIME_MS] = self.clock.now_ms() as f32;
    }

    // ---- Level and asset plumbing ----

    pub fn register_level(&mut self, name: &str, json: &str) {
        self.ctx.levels.register(name, json);
    }

    /// Load a level right away. Returns false (and logs why) on failure.
    pub fn load_level(&mut self, name: &str) -> bool {
        match self.ctx.load_level(name) {
            Ok(()) => {
                self.write_header();
                true
            }
            Err(e) => {
                error!("Cannot load level {}: {}", name, e);
                false
            }
        }
    }

    pub fn load_manifest(&mut self, json: &str) -> bool {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.levels.set_manifest(manifest);
                true
            }
            Err(e) => {
                error!("Invalid asset manifest: {}", e);
                false
            }
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.camera.resize(width, height);
        self.write_header();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const f32 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.header[HEADER_WORLD_WIDTH]
    }

    pub fn world_height(&self) -> f32 {
        self.header[HEADER_WORLD_HEIGHT]
    }

    pub fn camera_x(&self) -> f32 {
        self.header[HEADER_CAMERA_X]
    }

    pub fn camera_y(&self) -> f32 {
        self.header[HEADER_CAMERA_Y]
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }
}
