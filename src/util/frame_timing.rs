use std::time::{Duration, Instant};

/// Frame timing with a fixed FPS cap and a microsecond-derived FPS
/// readout.
///
/// The cap is an upper bound on ticks per second, not a true timer:
/// [`should_render`](Self::should_render) simply answers whether
/// enough wall time has passed since the last completed frame.
#[derive(Debug)]
pub struct FrameTiming {
    target_fps: u32,
    min_frame_duration: Duration,
    last_frame: Instant,
    last_frame_micros: u64,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS cap (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            last_frame_micros: 0,
        }
    }

    /// Whether enough time has passed since the last frame to render
    /// another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to record the completed frame's duration.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_frame_micros = elapsed.as_micros() as u64;
    }

    /// Duration of the last completed frame in microseconds.
    #[must_use]
    pub fn last_frame_micros(&self) -> u64 {
        self.last_frame_micros
    }

    /// Frames per second derived from the last frame duration
    /// (`1e6 / micros`); 0 before the first completed frame.
    #[must_use]
    pub fn fps(&self) -> f32 {
        if self.last_frame_micros == 0 {
            0.0
        } else {
            1_000_000.0 / self.last_frame_micros as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_timer_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn fps_derives_from_frame_micros() {
        let mut timing = FrameTiming::new(0);
        assert_eq!(timing.fps(), 0.0);

        std::thread::sleep(Duration::from_millis(2));
        timing.end_frame();
        assert!(timing.last_frame_micros() >= 2_000);
        let fps = timing.fps();
        assert!(fps > 0.0 && fps <= 500.0);
    }

    #[test]
    fn cap_blocks_immediately_after_a_frame() {
        // 1 FPS cap: right after end_frame, a full second has not
        // passed, so the next render is held back.
        let mut timing = FrameTiming::new(1);
        timing.end_frame();
        assert!(!timing.should_render());
    }
}
