//! Card entrance animation.
//!
//! The effect itself is opaque to the browser: all it needs is a start time
//! to reset and a progress value for the renderer to map onto opacity and
//! offset.

use std::time::{Duration, Instant};

/// Length of one entrance.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(520);

/// Extra delay per card position, so cards cascade in.
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(80);

/// Entrance animation state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    started: Instant,
    delay: Duration,
}

impl Entrance {
    /// Entrance for the card at `position`, starting at `now`.
    pub fn staggered(position: usize, now: Instant) -> Self {
        let steps = u32::try_from(position).unwrap_or(u32::MAX);
        Self {
            started: now,
            delay: ENTRANCE_STAGGER.saturating_mul(steps),
        }
    }

    /// Restart from the beginning with no delay.
    ///
    /// The stagger only applies to the first entrance.
    pub fn replay(&mut self, now: Instant) {
        self.started = now;
        self.delay = Duration::ZERO;
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now
            .saturating_duration_since(self.started)
            .saturating_sub(self.delay);
        let t = (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }

    /// Whether the entrance has not finished yet.
    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.delay + ENTRANCE_DURATION
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let start = Instant::now();
        let entrance = Entrance::staggered(0, start);
        assert_eq!(entrance.progress(start), 0.0);
        assert_eq!(entrance.progress(start + ENTRANCE_DURATION), 1.0);
        assert_eq!(entrance.progress(start + Duration::from_secs(5)), 1.0);

        let mid = entrance.progress(start + ENTRANCE_DURATION / 2);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn test_stagger_delays_start() {
        let start = Instant::now();
        let third = Entrance::staggered(2, start);
        assert_eq!(third.progress(start + Duration::from_millis(160)), 0.0);
        assert!(third.is_running(start + Duration::from_millis(600)));
        assert!(!third.is_running(start + Duration::from_millis(680)));
    }

    #[test]
    fn test_replay_restarts() {
        let start = Instant::now();
        let mut entrance = Entrance::staggered(0, start);
        let later = start + Duration::from_secs(2);
        assert!(!entrance.is_running(later));

        entrance.replay(later);
        assert!(entrance.is_running(later));
        assert_eq!(entrance.progress(later), 0.0);
    }

    #[test]
    fn test_replay_drops_stagger() {
        let start = Instant::now();
        let mut late = Entrance::staggered(8, start);
        let later = start + Duration::from_secs(5);

        late.replay(later);
        assert!(late.progress(later + ENTRANCE_DURATION / 4) > 0.0);
        assert_eq!(late.progress(later + ENTRANCE_DURATION), 1.0);
        assert!(!late.is_running(later + ENTRANCE_DURATION));
    }
}
