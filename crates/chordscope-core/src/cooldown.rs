//! Minimum-interval gate for throttled calls against the remote data source.

use std::time::{Duration, Instant};

type Hook = Box<dyn FnMut()>;

/// Enforces a minimum wall-clock interval between the start times of
/// successive calls from a single caller. The first call runs immediately;
/// later calls block for the remaining interval. Not designed for
/// concurrent callers; no cancellation.
pub struct Cooldown {
    interval: Duration,
    last_started: Option<Instant>,
    on_wait_begin: Option<Hook>,
    on_wait_end: Option<Hook>,
}

impl Cooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_started: None,
            on_wait_begin: None,
            on_wait_end: None,
        }
    }

    /// Called right before a blocking wait starts.
    pub fn on_wait_begin(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_wait_begin = Some(Box::new(hook));
        self
    }

    /// Called right after a blocking wait ends.
    pub fn on_wait_end(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_wait_end = Some(Box::new(hook));
        self
    }

    pub fn run<T>(&mut self, call: impl FnOnce() -> T) -> T {
        if let Some(last) = self.last_started {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                if let Some(hook) = &mut self.on_wait_begin {
                    hook();
                }
                std::thread::sleep(self.interval - elapsed);
                if let Some(hook) = &mut self.on_wait_end {
                    hook();
                }
            }
        }
        self.last_started = Some(Instant::now());
        call()
    }
}

impl std::fmt::Debug for Cooldown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cooldown")
            .field("interval", &self.interval)
            .field("last_started", &self.last_started)
            .finish()
    }
}
