//! Headless 2D platformer engine.
//!
//! Bodies are axis-aligned rectangles in a Y-down world. Each tick moves
//! them one at a time in scene order, pushes them out of whatever blocks
//! them, works out whether they stand on something, and queues the
//! contacts for the game to react to.

pub mod api;
pub mod assets;
pub mod bridge;
pub mod collision;
pub mod components;
pub mod core;
pub mod entities;
pub mod input;
pub mod level;
pub mod physics;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, LevelRequest};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use bridge::protocol::ProtocolLayout;
pub use collision::{
    BodyClass, Collidable, CollisionFilter, ContactEvent, DirectionalGate, FilterMode,
    Resolution, SpatialQuery, ACCEPT_ALL,
};
pub use components::animation::FrameAnimation;
pub use components::collider::Collider;
pub use components::entity::Entity;
pub use crate::core::geometry::{Axis, Rect};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::schedule::Schedule;
pub use crate::core::time::TickClock;
pub use entities::ScheduledAction;
pub use input::bindings::KeyBindings;
pub use input::queue::{InputEvent, InputQueue};
pub use level::{LevelError, LevelLoader, LoadedLevel};
pub use physics::{evaluate_grounded, integrate, GroundProbe, Mover, PhysicsBody, StepOutcome};
pub use renderer::camera::Camera;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::render::build_render_buffer;
