use std::collections::HashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the textures and sounds a game ships with.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Textures, addressed by their index in this list.
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
    /// Optional audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single texture, possibly a horizontal strip of frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name used by level files (e.g., "plateform.png").
    pub name: String,
    /// Relative path to the image file.
    pub path: String,
    /// Pixel width of the whole image.
    pub width: f32,
    /// Pixel height of the whole image.
    pub height: f32,
    /// Number of frames laid out side by side (default: 1).
    #[serde(default = "default_frames")]
    pub frames: u32,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from Rust.
    #[serde(default)]
    pub event_id: Option<u32>,
}

fn default_frames() -> u32 {
    1
}

impl TextureDescriptor {
    /// Size of one frame.
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.width / self.frames.max(1) as f32, self.height)
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look a texture up by name or path. Returns its index and descriptor.
    pub fn texture(&self, name: &str) -> Option<(u32, &TextureDescriptor)> {
        self.textures
            .iter()
            .enumerate()
            .find(|(_, t)| t.name == name || t.path == name)
            .map(|(i, t)| (i as u32, t))
    }
}
