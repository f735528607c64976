//! Sprite tags in level files.
//!
//! A tag is `<kind>[?<param>&<param>...]`. The kind prefix decides what the
//! sprite becomes:
//!
//! | prefix | entity |
//! |---|---|
//! | (empty) | plain collidable sprite |
//! | `LevelTrigger-<level>` | zone loading `<level>` |
//! | `DirectionalCollider<Sides>` | one-way collider, sides from `Top/Bottom/Left/Right` |
//! | `Player` | the player |
//! | `DashRefill` | dash pickup |
//! | `MovingPlatform` | platform, needs `Move:dx,dy` and `Duration:ms` |
//! | anything else | collider whose collision tag is the prefix |
//!
//! Parameters: `Anim:ms,ms,...` frame durations, `Move:dx,dy`, `Duration:ms`.
//! Unknown parameters are ignored.

use glam::Vec2;
use log::warn;
use crate::collision::gate::DirectionalGate;
use crate::entities::level_trigger::LevelTrigger;
use crate::level::LevelError;

#[derive(Debug, Clone, PartialEq)]
pub enum TagKind {
    Sprite,
    LevelTrigger(LevelTrigger),
    Directional(DirectionalGate),
    Player,
    DashRefill,
    MovingPlatform,
    /// Plain collider carrying this collision tag.
    Collider(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TagParam {
    Anim(Vec<u32>),
    Move(Vec2),
    Duration(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTag {
    /// Tag without parameters.
    pub base: String,
    pub kind: TagKind,
    pub params: Vec<TagParam>,
}

impl ParsedTag {
    pub fn anim(&self) -> Option<&[u32]> {
        self.params.iter().find_map(|p| match p {
            TagParam::Anim(frames) => Some(frames.as_slice()),
            _ => None,
        })
    }

    pub fn move_vector(&self) -> Option<Vec2> {
        self.params.iter().find_map(|p| match p {
            TagParam::Move(v) => Some(*v),
            _ => None,
        })
    }

    pub fn duration_ms(&self) -> Option<u32> {
        self.params.iter().find_map(|p| match p {
            TagParam::Duration(ms) => Some(*ms),
            _ => None,
        })
    }
}

pub fn parse_tag(raw: &str) -> Result<ParsedTag, LevelError> {
    let (base, params) = match raw.split_once('?') {
        Some((base, params)) => (base, Some(params)),
        None => (raw, None),
    };

    let kind = if base.is_empty() {
        TagKind::Sprite
    } else if base.starts_with("LevelTrigger") {
        let trigger = LevelTrigger::from_tag(base).ok_or_else(|| LevelError::BadTag {
            tag: raw.to_string(),
            reason: "level trigger without a target level".to_string(),
        })?;
        TagKind::LevelTrigger(trigger)
    } else if base.starts_with("DirectionalCollider") {
        TagKind::Directional(DirectionalGate::from_tag(base))
    } else if base.starts_with("Player") {
        TagKind::Player
    } else if base.starts_with("DashRefill") {
        TagKind::DashRefill
    } else if base.starts_with("MovingPlatform") {
        TagKind::MovingPlatform
    } else {
        TagKind::Collider(base.to_string())
    };

    let mut parsed = Vec::new();
    for param in params.into_iter().flat_map(|p| p.split('&')) {
        if let Some(p) = parse_param(raw, param)? {
            parsed.push(p);
        }
    }

    Ok(ParsedTag {
        base: base.to_string(),
        kind,
        params: parsed,
    })
}

fn parse_param(tag: &str, param: &str) -> Result<Option<TagParam>, LevelError> {
    let bad = || LevelError::BadParameter {
        tag: tag.to_string(),
        param: param.to_string(),
    };
    let Some((name, value)) = param.split_once(':') else {
        if !param.is_empty() {
            warn!("Ignoring parameter `{}` in tag `{}`", param, tag);
        }
        return Ok(None);
    };

    let numbers = |value: &str| -> Result<Vec<f32>, LevelError> {
        value
            .split(',')
            .map(|n| n.trim().parse::<f32>().map_err(|_| bad()))
            .collect()
    };

    match name {
        "Anim" => {
            let frames = value
                .split(',')
                .map(|n| n.trim().parse::<u32>().map_err(|_| bad()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(TagParam::Anim(frames)))
        }
        "Move" => match numbers(value)?.as_slice() {
            [dx, dy] => Ok(Some(TagParam::Move(Vec2::new(*dx, *dy)))),
            _ => Err(bad()),
        },
        "Duration" => {
            let ms = value.trim().parse::<u32>().map_err(|_| bad())?;
            Ok(Some(TagParam::Duration(ms)))
        }
        _ => {
            warn!("Ignoring parameter `{}` in tag `{}`", param, tag);
            Ok(None)
        }
    }
}
