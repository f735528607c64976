//! Frame clock for sprite strips.
//!
//! The host owns the textures and draws frame `n` of a strip; the engine only
//! advances which frame is current.

/// Per-frame durations of a sprite strip, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameAnimation {
    pub frame_ms: Vec<u32>,
    pub frame: usize,
    timer_ms: u32,
    pub playing: bool,
}

impl FrameAnimation {
    pub fn new(frame_ms: Vec<u32>) -> Self {
        Self {
            frame_ms,
            frame: 0,
            timer_ms: 0,
            playing: true,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_ms.len()
    }

    /// Total length of one cycle.
    pub fn cycle_ms(&self) -> u32 {
        self.frame_ms.iter().sum()
    }

    pub fn restart(&mut self) {
        self.frame = 0;
        self.timer_ms = 0;
        self.playing = true;
    }

    /// Advance the clock, looping at the end of the strip.
    /// Zero-length frames are skipped.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.playing || self.cycle_ms() == 0 {
            return;
        }
        self.timer_ms += elapsed_ms;
        while self.timer_ms >= self.frame_ms[self.frame] {
            self.timer_ms -= self.frame_ms[self.frame];
            self.frame = (self.frame + 1) % self.frame_ms.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_uneven_frames() {
        let mut anim = FrameAnimation::new(vec![100, 50, 200]);
        anim.tick(99);
        assert_eq!(anim.frame, 0);
        anim.tick(1);
        assert_eq!(anim.frame, 1);
        anim.tick(60);
        assert_eq!(anim.frame, 2);
    }

    #[test]
    fn loops_back_to_first_frame() {
        let mut anim = FrameAnimation::new(vec![10, 10]);
        anim.tick(25);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn empty_strip_never_advances() {
        let mut anim = FrameAnimation::new(Vec::new());
        anim.tick(1000);
        assert_eq!(anim.frame, 0);
        let mut zero = FrameAnimation::new(vec![0, 0]);
        zero.tick(1000);
        assert_eq!(zero.frame, 0);
    }
}
