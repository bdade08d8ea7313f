//! Fixed-step frame clock
//!
//! Converts variable animation-frame deltas into whole simulation frames at a
//! fixed rate and keeps the monotonic frame counter the simulation keys on.

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
    frame_count: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            step: 1.0 / fps.max(1) as f32,
            accumulator: 0.0,
            frame_count: 0,
        }
    }

    /// Frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Add elapsed seconds; returns how many frames are due (at most
    /// `MAX_SUBSTEPS`; a long stall drops time instead of catching up)
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut due = 0;
        while self.accumulator >= self.step && due < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            due += 1;
        }
        if due == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
        due
    }

    /// Mark one frame as simulated
    pub fn finish_frame(&mut self) {
        self.frame_count += 1;
    }
}
