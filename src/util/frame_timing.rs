use web_time::{Duration, Instant};

/// Update cadence the per-call damping alphas are tuned for.
pub const REFERENCE_FRAME: Duration = Duration::from_micros(16_667);

/// Rescale a per-frame damping alpha to an arbitrary elapsed time.
///
/// Applying the result once removes the same fraction of the error as
/// applying `alpha` once per [`REFERENCE_FRAME`] over `elapsed`.
pub fn frame_scaled_alpha(alpha: f32, elapsed: Duration) -> f32 {
    let frames = elapsed.as_secs_f32() / REFERENCE_FRAME.as_secs_f32();
    if frames <= 0.0 {
        return 0.0;
    }
    let keep = (1.0 - alpha.clamp(0.0, 1.0)).powf(frames);
    1.0 - keep
}

/// Measures time between rendered frames, with a smoothed FPS readout.
pub struct FrameClock {
    /// Last tick timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call once per frame. Returns the time since the previous tick.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reference_frame_keeps_alpha() {
        let scaled = frame_scaled_alpha(0.1, REFERENCE_FRAME);
        assert!((scaled - 0.1).abs() < 1e-4);
    }

    #[test]
    fn two_frames_compound() {
        let scaled = frame_scaled_alpha(0.1, REFERENCE_FRAME * 2);
        // 1 - 0.9^2
        assert!((scaled - 0.19).abs() < 1e-3);
    }

    #[test]
    fn zero_elapsed_does_not_move() {
        assert_eq!(frame_scaled_alpha(0.5, Duration::ZERO), 0.0);
        assert_eq!(frame_scaled_alpha(1.0, REFERENCE_FRAME / 4), 1.0);
    }

    #[test]
    fn clock_ticks_forward() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(first >= Duration::ZERO && second >= Duration::ZERO);
        assert!(clock.fps() > 0.0);
    }
}
