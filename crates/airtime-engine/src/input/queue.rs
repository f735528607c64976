/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed. Browser key repeats arrive as repeated `KeyDown`s.
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// Menu buttons and other UI actions. `kind` is game-defined.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// `(key_code, pressed)` for key events.
    pub fn key(&self) -> Option<(u32, bool)> {
        match *self {
            InputEvent::KeyDown { key_code } => Some((key_code, true)),
            InputEvent::KeyUp { key_code } => Some((key_code, false)),
            InputEvent::Custom { .. } => None,
        }
    }
}

/// Events the host delivered since the last tick, in arrival order.
/// Held-key state is not kept here; players track it themselves.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Forget everything; called once the tick has consumed the events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Key transitions as `(key_code, pressed)`.
    pub fn keys(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.events.iter().filter_map(InputEvent::key)
    }

    /// Payloads `(a, b, c)` of the custom events of one `kind`.
    pub fn custom(&self, kind: u32) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.events.iter().filter_map(move |e| match *e {
            InputEvent::Custom { kind: k, a, b, c } if k == kind => Some((a, b, c)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
