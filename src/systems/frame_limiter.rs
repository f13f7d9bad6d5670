//! Fixed-rate frame pacing
//!
//! The event loop waits until [`FrameLimiter::next_deadline`] and asks
//! [`FrameLimiter::tick`] whether a frame is due. A late frame schedules the
//! next one a full period later instead of bursting to catch up.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame_time: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    /// `fps` of zero is treated as one
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            next_frame: now,
        }
    }

    /// True when a frame should run at `now`; advances the deadline if so
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.frame_time;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_time;
        }
        true
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_due() {
        let t0 = Instant::now();
        let mut limiter = FrameLimiter::new(60, t0);
        assert!(limiter.tick(t0));
        assert!(!limiter.tick(t0));
    }

    #[test]
    fn test_sixty_fps_period() {
        let t0 = Instant::now();
        let limiter = FrameLimiter::new(60, t0);
        assert_eq!(limiter.frame_time(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_waits_for_deadline() {
        let t0 = Instant::now();
        let mut limiter = FrameLimiter::new(100, t0);
        assert!(limiter.tick(t0));
        assert_eq!(limiter.next_deadline(), t0 + Duration::from_millis(10));
        assert!(!limiter.tick(t0 + Duration::from_millis(9)));
        assert!(limiter.tick(t0 + Duration::from_millis(10)));
        assert_eq!(limiter.next_deadline(), t0 + Duration::from_millis(20));
    }

    #[test]
    fn test_late_frame_does_not_burst() {
        let t0 = Instant::now();
        let mut limiter = FrameLimiter::new(100, t0);
        limiter.tick(t0);

        let late = t0 + Duration::from_millis(55);
        assert!(limiter.tick(late));
        assert_eq!(limiter.next_deadline(), late + Duration::from_millis(10));
        assert!(!limiter.tick(late + Duration::from_millis(1)));
    }

    #[test]
    fn test_zero_fps_clamped() {
        let limiter = FrameLimiter::new(0, Instant::now());
        assert_eq!(limiter.frame_time(), Duration::from_secs(1));
    }
}
