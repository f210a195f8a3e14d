//! Deferred tasks driven by frame time.
//!
//! Effects schedule follow-up work (such as settling the assemble effect once
//! its animation has run) and the host advances time each frame. Each task
//! carries the generation it was scheduled in; [`Deferred::supersede`] starts
//! a new generation and tasks from older ones are dropped when they come due
//! instead of firing into a state they no longer belong to.

/// A scheduled task.
#[derive(Debug, Clone)]
struct Scheduled<T> {
    due: f64,
    generation: u64,
    task: T,
}

/// Queue of tasks that fire after a delay.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    now: f64,
    generation: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Deferred<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            generation: 0,
            pending: Vec::new(),
        }
    }

    /// Run `task` once `delay_s` seconds have passed.
    pub fn schedule(&mut self, delay_s: f32, task: T) {
        self.pending.push(Scheduled {
            due: self.now + delay_s.max(0.0) as f64,
            generation: self.generation,
            task,
        });
    }

    /// Invalidate everything scheduled so far.
    pub fn supersede(&mut self) {
        self.generation += 1;
    }

    /// Advance time and return the tasks that came due, in due order.
    pub fn advance(&mut self, delta_s: f32) -> Vec<T> {
        self.now += delta_s.max(0.0) as f64;

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        let current = self.generation;
        due.into_iter()
            .filter_map(|s| {
                if s.generation == current {
                    Some(s.task)
                } else {
                    tracing::trace!(
                        generation = s.generation,
                        current,
                        "Dropping superseded deferred task"
                    );
                    None
                }
            })
            .collect()
    }

    /// Number of tasks still waiting, stale ones included.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Seconds advanced so far.
    pub fn now(&self) -> f64 {
        self.now
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}
