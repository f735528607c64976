/// Converts host frame deltas into whole-millisecond tick lengths.
///
/// There is no fixed-step accumulation: each host frame produces exactly one
/// tick, so the simulation is frame-rate dependent. Sub-millisecond remainders
/// are carried to the next frame, and a single tick is capped at `max_tick_ms`
/// so a long pause (tab switch, debugger) does not launch bodies across the level.
pub struct TickClock {
    /// Longest tick handed to the simulation, in milliseconds.
    max_tick_ms: u32,
    /// Fractional milliseconds carried over from previous frames.
    carry_ms: f32,
    /// Total simulated time in milliseconds.
    now_ms: u64,
}

impl TickClock {
    pub fn new(max_tick_ms: u32) -> Self {
        Self {
            max_tick_ms: max_tick_ms.max(1),
            carry_ms: 0.0,
            now_ms: 0,
        }
    }

    /// Feed one host frame (seconds). Returns the tick length in milliseconds.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        let total = (frame_dt.max(0.0) * 1000.0) + self.carry_ms;
        let whole = total.floor();
        self.carry_ms = total - whole;
        let elapsed = (whole as u32).min(self.max_tick_ms);
        self.now_ms += elapsed as u64;
        elapsed
    }

    /// Simulated time so far, in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn max_tick_ms(&self) -> u32 {
        self.max_tick_ms
    }
}
