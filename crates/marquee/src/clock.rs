use std::time::{Duration, Instant};

/// Frame timing for hosts that drive the banner from their own loop.
///
/// Delta time is capped so a stalled frame (a backgrounded window, a
/// debugger break) advances the effects by at most `max_delta`.
///
/// # Example
/// ```
/// use marquee::FrameClock;
///
/// let mut clock = FrameClock::new();
/// let dt = clock.tick();
/// assert!(dt <= clock.max_delta().as_secs_f32());
/// ```
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time elapsed since the previous tick, after capping
    delta: Duration,
    /// Sum of all capped deltas
    elapsed: Duration,
    frame_count: u64,
    max_delta: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Starts the clock now with a 250ms delta cap.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            max_delta: Duration::from_millis(250),
            last_tick: start,
        }
    }

    /// Advance to now and return the frame's delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`, which must not be earlier than the previous tick.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        marquee_core::profiling::new_frame();

        let raw_delta = now.saturating_duration_since(self.last_tick);
        self.delta = raw_delta.min(self.max_delta);
        self.elapsed += self.delta;
        self.last_tick = now;
        self.frame_count += 1;
        self.delta_seconds()
    }

    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }

    pub fn set_max_delta(&mut self, max_delta: Duration) {
        self.max_delta = max_delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
