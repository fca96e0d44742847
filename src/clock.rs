//! Discussion countdown.
//!
//! The clock is driven from outside: the front end calls [`DiscussionClock::tick`]
//! once per second, or hands its input poll to [`DiscussionClock::run`], and
//! calls `begin_voting` on the engine when the clock reports
//! [`ClockStatus::Expired`]. Expiry is reported exactly once.

use std::fmt;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Result of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockStatus {
    /// Seconds left after this tick.
    Running(u32),
    /// The countdown just reached zero. Start voting now.
    Expired,
    /// Already expired or skipped earlier.
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscussionClock {
    total: u32,
    remaining: u32,
    finished: bool,
}

impl DiscussionClock {
    /// A countdown from `seconds`.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        assert!(seconds > 0, "Discussion must last at least 1 second");
        Self {
            total: seconds,
            remaining: seconds,
            finished: false,
        }
    }

    /// Count one second down.
    pub fn tick(&mut self) -> ClockStatus {
        if self.finished {
            return ClockStatus::Finished;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.finished = true;
            ClockStatus::Expired
        } else {
            ClockStatus::Running(self.remaining)
        }
    }

    /// End the discussion early. Returns `Expired` the first time, `Finished` after.
    pub fn skip(&mut self) -> ClockStatus {
        if self.finished {
            return ClockStatus::Finished;
        }
        self.remaining = 0;
        self.finished = true;
        ClockStatus::Expired
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fraction of the countdown left, 1.0 at the start.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.remaining as f32 / self.total as f32
    }

    /// Under ten seconds left.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.remaining < 10
    }

    /// Time left as a bar of `width` cells, `#` for remaining and `-` for elapsed.
    #[must_use]
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.progress() * width as f32).ceil() as usize).min(width);
        format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
    }

    /// Count down until expiry or a skip.
    ///
    /// `render` sees the clock before each second. `wait` blocks for up to one
    /// second and returns `true` when the players ask to skip. Returns as soon
    /// as the countdown reaches zero, without waiting again.
    pub fn run<E>(
        &mut self,
        mut wait: impl FnMut(Duration) -> Result<bool, E>,
        mut render: impl FnMut(&Self),
    ) -> Result<ClockStatus, E> {
        loop {
            render(self);
            if wait(TICK)? {
                return Ok(self.skip());
            }
            match self.tick() {
                ClockStatus::Running(_) => {}
                status => return Ok(status),
            }
        }
    }
}

impl fmt::Display for DiscussionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
