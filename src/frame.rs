use std::time::{Duration, Instant};

/// Frame metadata handed to the driver loop each step.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Fixed-interval frame clock for the animation driver.
///
/// `tick` blocks until the next frame deadline and returns the frame's
/// metadata, so the loop body is simply: tick, mutate scene, render. A
/// slow frame is not compensated for; the clock just re-anchors on the
/// current time.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    start: Instant,
    last: Instant,
    deadline: Instant,
    number: u64,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            start: now,
            last: now,
            deadline: now,
            number: 0,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        }
        let now = Instant::now();
        self.deadline = now + self.interval;

        let info = FrameInfo {
            number: self.number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last).as_secs_f32(),
        };
        self.number += 1;
        self.last = now;
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_increase() {
        let mut clock = FrameClock::new(Duration::ZERO);
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.tick().number, 2);
    }

    #[test]
    fn test_interval_is_respected() {
        let mut clock = FrameClock::new(Duration::from_millis(20));
        clock.tick();
        let info = clock.tick();
        // second tick cannot arrive before the interval has elapsed
        assert!(info.delta >= 0.019, "delta {} too short", info.delta);
    }
}
