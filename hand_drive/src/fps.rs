//! Rolling frames-per-second estimate for the status bar.

use std::time::Instant;

/// Number of instantaneous samples averaged for the displayed value.
const WINDOW: usize = 10;

/// Averages the instantaneous FPS of the last few frames.
pub struct FpsCounter {
    samples: Vec<f32>,
    last_frame: Instant,
}

impl FpsCounter {
    pub fn new() -> Self {
        FpsCounter {
            samples: Vec::with_capacity(WINDOW),
            last_frame: Instant::now(),
        }
    }

    /// Record a frame boundary and return the smoothed FPS.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            if self.samples.len() >= WINDOW {
                self.samples.remove(0);
            }
            self.samples.push(1.0 / dt);
        }

        if self.samples.is_empty() {
            0.0
        } else {
            self.samples.iter().sum::<f32>() / self.samples.len() as f32
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        FpsCounter::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn reports_positive_fps_after_frames() {
        let mut fps = FpsCounter::new();
        for _ in 0..3 {
            thread::sleep(Duration::from_millis(5));
            assert!(fps.tick() > 0.0);
        }
    }

    #[test]
    fn window_stays_bounded() {
        let mut fps = FpsCounter::new();
        for _ in 0..50 {
            thread::sleep(Duration::from_millis(1));
            fps.tick();
        }
        assert!(fps.samples.len() <= WINDOW);
    }

    #[test]
    fn roughly_tracks_the_frame_interval() {
        let mut fps = FpsCounter::new();
        let mut value = 0.0;
        for _ in 0..10 {
            thread::sleep(Duration::from_millis(20));
            value = fps.tick();
        }
        // 20 ms frames ≈ 50 fps; allow generous slack for scheduler jitter.
        assert!(value > 20.0 && value < 60.0, "got {}", value);
    }
}
