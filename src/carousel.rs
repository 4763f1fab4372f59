use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Banner carousel
// ---------------------------------------------------------------------------

/// A fixed sequence of slides, one active at a time, advanced by a repeating
/// timer.  The timer is driven by the frame loop through [`Carousel::tick`];
/// there is no background thread.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<String>,
    index: usize,
    interval: Duration,
    /// Next advance time.  `None` while stopped.
    deadline: Option<Instant>,
}

impl Carousel {
    /// Create a stopped carousel showing the first slide.
    pub fn new(slides: Vec<String>, interval: Duration) -> Self {
        Self {
            slides,
            index: 0,
            interval,
            deadline: None,
        }
    }

    /// Arm the timer.  Has no effect if it is already running.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Cancel the timer; the active slide stays where it is.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Advance by however many whole intervals have elapsed.  Returns whether
    /// the timer fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline || self.slides.is_empty() {
            return false;
        }

        let period = self.interval.as_nanos().max(1);
        let steps = (now - deadline).as_nanos() / period + 1;
        let len = self.slides.len() as u128;
        let previous = self.index;
        self.index = ((self.index as u128 + steps % len) % len) as usize;
        self.deadline = Some(deadline + Duration::from_nanos((period * steps) as u64));

        if self.index != previous {
            log::trace!("carousel advanced to slide {}", self.index);
        }
        true
    }

    /// Time left until the next advance, for scheduling a repaint.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn active_slide(&self) -> Option<&str> {
        self.slides.get(self.index).map(String::as_str)
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }
}
