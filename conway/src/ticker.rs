// ticker.rs - Interval timer driven by the frame loop

use std::time::{Duration, Instant};

/// Fires once per `interval` while started. Polled with the current time
/// instead of owning a thread, so stopping is immediate: after `stop()` no
/// pending tick can fire.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect from the next scheduled tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// First tick fires one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// True when a tick is due. Missed ticks are dropped rather than
    /// replayed; the next one is scheduled one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn stopped_ticker_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(500 * MS);
        assert!(!ticker.poll(t0 + 10_000 * MS));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(500 * MS);
        ticker.start(t0);
        assert!(!ticker.poll(t0 + 499 * MS));
        assert!(ticker.poll(t0 + 500 * MS));
        assert!(!ticker.poll(t0 + 600 * MS));
        assert!(ticker.poll(t0 + 1000 * MS));
    }

    #[test]
    fn missed_ticks_collapse_into_one() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS);
        ticker.start(t0);
        assert!(ticker.poll(t0 + 1000 * MS));
        assert!(!ticker.poll(t0 + 1050 * MS));
        assert_eq!(ticker.next_due(), Some(t0 + 1100 * MS));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(500 * MS);
        ticker.start(t0);
        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(t0 + 500 * MS));
    }
}
