//! Frame pacing
//!
//! Only affects wall-clock frame rate, never the simulation.

use std::time::Duration;

/// Waits between frames
pub trait Pacer {
    fn pace(&mut self);
}

/// Sleep a fixed amount after every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    pub delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(crate::consts::FRAME_DELAY_MS)
    }
}

impl Pacer for FixedDelay {
    fn pace(&mut self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Never waits (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pace(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_default_delay_is_30ms() {
        assert_eq!(FixedDelay::default().delay, Duration::from_millis(30));
    }

    #[test]
    fn test_fixed_delay_sleeps_at_least_delay() {
        let mut pacer = FixedDelay::from_millis(5);
        let start = Instant::now();
        pacer.pace();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
