pub mod game;
pub mod types;

pub use game::{EngineContext, Game, GameConfig, LevelRequest};
pub use types::{EntityId, GameEvent, SoundEvent};
