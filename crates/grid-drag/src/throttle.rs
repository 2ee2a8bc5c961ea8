// ABOUTME: Leading-edge rate limiter for pointer-move handling.
// ABOUTME: Admits one event per time window and drops the rest.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_admitted: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_admitted: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns true if an event at `now` may proceed.
    ///
    /// Dropped events do not extend the window.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last_admitted {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_admitted = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_admitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(24);

    #[test]
    fn first_event_is_admitted() {
        let mut throttle = Throttle::new(WINDOW);
        assert!(throttle.admit(Instant::now()));
    }

    #[test]
    fn burst_inside_window_admits_one() {
        let mut throttle = Throttle::new(WINDOW);
        let t = Instant::now();

        let admitted = (0..10)
            .filter(|i| throttle.admit(t + Duration::from_millis(i * 2)))
            .count();
        assert_eq!(admitted, 1);
    }

    #[test]
    fn window_reopens_after_it_elapses() {
        let mut throttle = Throttle::new(WINDOW);
        let t = Instant::now();

        assert!(throttle.admit(t));
        assert!(!throttle.admit(t + Duration::from_millis(23)));
        assert!(throttle.admit(t + WINDOW));
        assert!(!throttle.admit(t + Duration::from_millis(30)));
    }

    #[test]
    fn reset_reopens_immediately() {
        let mut throttle = Throttle::new(WINDOW);
        let t = Instant::now();

        assert!(throttle.admit(t));
        throttle.reset();
        assert!(throttle.admit(t + Duration::from_millis(1)));
    }

    #[test]
    fn zero_window_admits_everything() {
        let mut throttle = Throttle::new(Duration::ZERO);
        let t = Instant::now();
        assert!(throttle.admit(t));
        assert!(throttle.admit(t));
    }
}
