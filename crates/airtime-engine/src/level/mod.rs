//! Level files: JSON documents placing tagged sprites in a scene.

pub mod data;
pub mod loader;
pub mod tag;

use thiserror::Error;

pub use data::{LevelData, SpriteRecord};
pub use loader::{LevelLoader, LoadedLevel};
pub use tag::{parse_tag, ParsedTag, TagKind, TagParam};

/// Error type for level loading failures.
///
/// A failed load leaves the current level untouched.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Unknown level: {0}")]
    UnknownLevel(String),
    #[error("Failed to parse level JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid tag `{tag}`: {reason}")]
    BadTag { tag: String, reason: String },
    #[error("Invalid parameter `{param}` in tag `{tag}`")]
    BadParameter { tag: String, param: String },
    #[error("No size for sprite `{tag}`: texture `{texture}` is not in the manifest")]
    MissingSize { tag: String, texture: String },
    #[error("No level loaded")]
    NoCurrentLevel,
}
