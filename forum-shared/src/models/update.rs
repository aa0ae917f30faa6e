//! # Thread update detection
//!
//! The update-check endpoint answers with the thread's last update time as
//! whole seconds in plain text. [`UpdateWatch`] compares every answer against
//! the time the page was rendered at and stops for good on the first newer one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A thread update time in whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStamp", into = "i64")]
pub struct UpdateStamp(i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStamp {
    Seconds(i64),
    Fractional(f64),
    Text(String),
}

impl UpdateStamp {
    #[must_use]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.0
    }

    /// Parse an endpoint body or descriptor value. Fractional seconds are
    /// truncated; anything that is not a finite number yields `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(seconds) = text.parse::<i64>() {
            return Some(Self(seconds));
        }
        text.parse::<f64>().ok().and_then(Self::from_fractional)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_fractional(value: f64) -> Option<Self> {
        value.is_finite().then(|| Self(value.trunc() as i64))
    }
}

impl TryFrom<RawStamp> for UpdateStamp {
    type Error = String;

    fn try_from(raw: RawStamp) -> Result<Self, Self::Error> {
        match raw {
            RawStamp::Seconds(seconds) => Ok(Self(seconds)),
            RawStamp::Fractional(value) => {
                Self::from_fractional(value).ok_or_else(|| format!("invalid update time {value}"))
            }
            RawStamp::Text(text) => {
                Self::parse(&text).ok_or_else(|| format!("invalid update time `{text}`"))
            }
        }
    }
}

impl From<UpdateStamp> for i64 {
    fn from(stamp: UpdateStamp) -> Self {
        stamp.0
    }
}

impl fmt::Display for UpdateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// The timer is active and each tick checks the endpoint.
    Watching,
    /// The timer was cancelled, or never started.
    Stopped,
}

/// What a single poll answer means for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    /// Nothing newer than the baseline; keep polling.
    Unchanged,
    /// The thread changed. Returned exactly once per watch.
    Updated(UpdateStamp),
    /// The watch had already stopped when the answer arrived.
    Ignored,
}

/// Two-state machine behind the update poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWatch {
    baseline: UpdateStamp,
    state: PollState,
}

impl UpdateWatch {
    #[must_use]
    pub const fn new(baseline: UpdateStamp) -> Self {
        Self {
            baseline,
            state: PollState::Watching,
        }
    }

    #[must_use]
    pub const fn baseline(&self) -> UpdateStamp {
        self.baseline
    }

    #[must_use]
    pub const fn state(&self) -> PollState {
        self.state
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.state == PollState::Watching
    }

    /// Feed one poll answer. `None` stands for a transport failure or a
    /// non-success status, both of which count as "no change".
    pub fn observe(&mut self, body: Option<&str>) -> PollDecision {
        if !self.is_watching() {
            return PollDecision::Ignored;
        }

        match body.and_then(UpdateStamp::parse) {
            Some(stamp) if stamp > self.baseline => {
                self.state = PollState::Stopped;
                PollDecision::Updated(stamp)
            }
            _ => PollDecision::Unchanged,
        }
    }
}
