use serde::{Deserialize, Serialize};

/// A level document as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    pub scene_width: f32,
    pub scene_height: f32,
    /// Background texture, drawn by the host over the whole scene.
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub sprites: Vec<SpriteRecord>,
}

/// One placed sprite.
///
/// `tag` selects what the sprite becomes; see
/// [`parse_tag`](super::tag::parse_tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteRecord {
    #[serde(default)]
    pub tag: String,
    #[serde(rename = "textureName", default)]
    pub texture_name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default = "one")]
    pub scale: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(rename = "z-index", default)]
    pub z_index: i32,
    #[serde(default = "one")]
    pub opacity: f32,
    /// Explicit size, overriding the texture's.
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

fn one() -> f32 {
    1.0
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
