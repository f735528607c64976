use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// A sound event emitted by the game logic.
/// The numeric value maps to a game-defined sound on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event handed to the host after each tick.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Player touched ground after being airborne. `a/b`: feet position.
    pub const PLAYER_LANDED: f32 = 1.0;
    /// Player jumped. `a/b`: feet position.
    pub const PLAYER_JUMPED: f32 = 2.0;
    /// Player started a dash. `a/b`: dash direction.
    pub const PLAYER_DASHED: f32 = 3.0;
    /// Player hit a kill zone. The level reloads.
    pub const PLAYER_DIED: f32 = 4.0;
    /// A pickup was collected. `a/b`: pickup centre, `c`: pickup entity id.
    pub const COLLECTED: f32 = 5.0;
    /// A level finished loading. `a/b`: world size.
    pub const LEVEL_LOADED: f32 = 6.0;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
