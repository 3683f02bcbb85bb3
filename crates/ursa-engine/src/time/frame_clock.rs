use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots and pacing the frame loop.
///
/// Delta time is clamped so a stalled loop (debugger, minimized window) does
/// not hand a huge step to the frame callback.
///
/// With a frame-rate limit, [`remaining_frame_budget`](Self::remaining_frame_budget)
/// reports how long the loop should sleep after finishing a frame. Presenting
/// does not always block (e.g. a fully hidden window), so the loop paces itself.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    min_frame: Option<Duration>,
}

impl FrameClock {
    /// Creates a new clock with default clamps and no frame-rate limit.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
            min_frame: None,
        }
    }

    /// Creates a clock with default clamps that paces frames to at most `fps`.
    pub fn with_fps_limit(fps: u32) -> Self {
        let mut clock = Self::new();
        clock.min_frame = (fps > 0).then(|| Duration::from_millis(1000 / u64::from(fps)));
        clock
    }

    /// Minimum duration of one frame, if a limit is configured.
    pub fn min_frame_duration(&self) -> Option<Duration> {
        self.min_frame
    }

    /// Resets the clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Time left in the current frame's budget, measured from the last tick.
    ///
    /// `None` when no limit is configured or the budget is already spent.
    pub fn remaining_frame_budget(&self) -> Option<Duration> {
        let min_frame = self.min_frame?;
        let spent = Instant::now().saturating_duration_since(self.last);
        min_frame.checked_sub(spent).filter(|d| !d.is_zero())
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
    fn frame_index_increments_per_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(5), Duration::from_millis(10));
        let ft = clock.tick();
        assert!(ft.dt >= 0.005);
        assert!(ft.dt <= 0.010);
    }

    #[test]
    fn fps_limit_sets_frame_duration() {
        let clock = FrameClock::with_fps_limit(60);
        assert_eq!(clock.min_frame_duration(), Some(Duration::from_millis(16)));
    }

    #[test]
    fn unlimited_clock_has_no_budget() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert!(clock.remaining_frame_budget().is_none());
    }

    #[test]
    fn budget_never_exceeds_frame_duration() {
        let mut clock = FrameClock::with_fps_limit(10);
        clock.tick();
        if let Some(budget) = clock.remaining_frame_budget() {
            assert!(budget <= Duration::from_millis(100));
        }
    }

    #[test]
    fn zero_fps_means_unlimited() {
        assert!(FrameClock::with_fps_limit(0).min_frame_duration().is_none());
    }
}
