//! Per-frame wall-clock measurement with smoothed FPS for the overlay.
//!
//! The demo has no simulation, so there is no fixed-timestep accumulator here;
//! one `begin_frame()` call per redraw is the whole contract.

use std::time::Instant;

const FPS_SAMPLE_COUNT: usize = 60;

pub struct FrameClock {
    pub frame_count: u64,
    pub real_dt: f64,
    last_instant: Instant,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f64,
    pub smoothed_frame_time_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            real_dt: 0.0,
            last_instant: Instant::now(),
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 16.667,
        }
    }

    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.real_dt = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.frame_count += 1;

        if self.real_dt > 0.25 {
            log::warn!("Frame took {:.1}ms", self.real_dt * 1000.0);
        }

        self.fps_samples[self.fps_sample_index] = self.real_dt;
        self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
        let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
        self.smoothed_frame_time_ms = avg_dt * 1000.0;
        self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_frame_counts_frames() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count, 3);
    }

    #[test]
    fn real_dt_is_non_negative() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        assert!(clock.real_dt >= 0.0);
    }

    #[test]
    fn smoothed_fps_stays_finite() {
        let mut clock = FrameClock::new();
        for _ in 0..FPS_SAMPLE_COUNT + 5 {
            clock.begin_frame();
        }
        assert!(clock.smoothed_fps.is_finite());
        assert!(clock.smoothed_frame_time_ms.is_finite());
        assert!(clock.smoothed_frame_time_ms >= 0.0);
    }
}
