use serde::{Deserialize, Serialize};
use crate::entities::player::Control;

/// Key codes (JavaScript `keyCode` values) mapped to player controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: u32,
    pub right: u32,
    pub up: u32,
    pub down: u32,
    pub jump: u32,
    pub dash: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: 65,  // A
            right: 68, // D
            up: 87,    // W
            down: 83,  // S
            jump: 32,  // Space
            dash: 16,  // Shift
        }
    }
}

impl KeyBindings {
    pub fn control_for(&self, key_code: u32) -> Option<Control> {
        [
            (self.left, Control::Left),
            (self.right, Control::Right),
            (self.up, Control::Up),
            (self.down, Control::Down),
            (self.jump, Control::Jump),
            (self.dash, Control::Dash),
        ]
        .into_iter()
        .find(|(code, _)| *code == key_code)
        .map(|(_, control)| control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let b = KeyBindings::default();
        assert_eq!(b.control_for(65), Some(Control::Left));
        assert_eq!(b.control_for(32), Some(Control::Jump));
        assert_eq!(b.control_for(16), Some(Control::Dash));
        assert_eq!(b.control_for(13), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let b: KeyBindings = serde_json::from_str(r#"{ "jump": 87 }"#).unwrap();
        assert_eq!(b.jump, 87);
        assert_eq!(b.dash, 16);
        // First match wins when two controls share a key.
        assert_eq!(b.control_for(87), Some(Control::Up));
    }
}
