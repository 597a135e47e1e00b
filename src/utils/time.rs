use std::time::{Duration, Instant};

/// Supplies the per-frame delta time that drives the animator.
pub trait TickSource {
    /// Seconds elapsed since the previous frame.
    fn next_delta(&mut self) -> f32;
}

/// Deterministic tick source returning the same delta every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    pub dt: f32,
}

impl FixedStep {
    #[must_use]
    pub const fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// A step of `1 / fps` seconds.
    #[must_use]
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::from_fps(60)
    }
}

impl TickSource for FixedStep {
    #[inline]
    fn next_delta(&mut self) -> f32 {
        self.dt
    }
}

/// Wall-clock tick source for real-time previews.
///
/// Each [`next_delta`](TickSource::next_delta) samples [`Instant::now`] and
/// hands the animator the real time spent since the previous frame, so clip
/// durations play out in seconds of real time.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Real time between the last two frames
    pub delta: Duration,
    /// Real time since the preview clock started
    pub elapsed: Duration,
    /// Frames sampled so far
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Starts the clock now; the first delta measures from this call.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Records the real time since the previous frame.
    pub fn sample(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Last frame delta in seconds, as fed to the animator.
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl TickSource for Timer {
    fn next_delta(&mut self) -> f32 {
        self.sample();
        self.dt_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_from_fps() {
        let mut step = FixedStep::from_fps(4);
        assert!((step.next_delta() - 0.25).abs() < f32::EPSILON);
        assert!((step.next_delta() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fixed_step_zero_fps_is_clamped() {
        assert!((FixedStep::from_fps(0).dt - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        let dt = timer.next_delta();
        timer.sample();

        assert!(dt >= 0.0);
        assert_eq!(timer.frame_count, 2);
        assert!(timer.elapsed >= timer.delta);
    }
}
