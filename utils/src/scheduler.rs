//! Manual and interval based refresh scheduling with a visible countdown.
//!
//! The scheduler only decides *when* a refresh should happen. Callers feed it
//! one [`RefreshSchedule::tick`] per second and start a fetch whenever a
//! [`RefreshTrigger`] comes back.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub enum RefreshInterval {
    FiveSeconds,
    TenSeconds,
    #[default]
    ThirtySeconds,
    OneMinute,
    FiveMinutes,
}

impl RefreshInterval {
    pub fn as_secs(self) -> u64 {
        match self {
            Self::FiveSeconds => 5,
            Self::TenSeconds => 10,
            Self::ThirtySeconds => 30,
            Self::OneMinute => 60,
            Self::FiveMinutes => 300,
        }
    }

    /// The next option in the list, wrapping back to the shortest.
    pub fn next(self) -> Self {
        match self {
            Self::FiveSeconds => Self::TenSeconds,
            Self::TenSeconds => Self::ThirtySeconds,
            Self::ThirtySeconds => Self::OneMinute,
            Self::OneMinute => Self::FiveMinutes,
            Self::FiveMinutes => Self::FiveSeconds,
        }
    }
}

impl Display for RefreshInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::FiveSeconds => "5 seconds",
            Self::TenSeconds => "10 seconds",
            Self::ThirtySeconds => "30 seconds",
            Self::OneMinute => "1 minute",
            Self::FiveMinutes => "5 minutes",
        };
        write!(f, "{label}")
    }
}

impl TryFrom<u64> for RefreshInterval {
    type Error = crate::Error;

    fn try_from(secs: u64) -> crate::Result<Self> {
        Self::iter()
            .find(|interval| interval.as_secs() == secs)
            .ok_or(crate::Error::UnsupportedRefreshInterval(secs))
    }
}

impl From<RefreshInterval> for u64 {
    fn from(interval: RefreshInterval) -> Self {
        interval.as_secs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshTrigger {
    Manual,
    Auto,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefreshSchedule {
    enabled: bool,
    interval: RefreshInterval,
    seconds_remaining: u64,
    last_refresh: Option<DateTime<Local>>,
}

impl RefreshSchedule {
    /// Disabled schedule which will use `interval` once enabled.
    pub fn new(interval: RefreshInterval) -> Self {
        Self {
            interval,
            ..Default::default()
        }
    }

    pub fn enable(&mut self, interval: RefreshInterval) {
        self.enabled = true;
        self.interval = interval;
        self.seconds_remaining = interval.as_secs();
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.seconds_remaining = 0;
    }

    /// Stores a new interval. A running countdown is left alone and picks up
    /// the new value the next time it resets.
    pub fn set_interval(&mut self, interval: RefreshInterval) {
        self.interval = interval;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> Option<RefreshTrigger> {
        if !self.enabled {
            return None;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.seconds_remaining = self.interval.as_secs();
            Some(RefreshTrigger::Auto)
        } else {
            None
        }
    }

    pub fn trigger_manual_refresh(&mut self) -> RefreshTrigger {
        if self.enabled {
            self.seconds_remaining = self.interval.as_secs();
        }
        RefreshTrigger::Manual
    }

    pub fn mark_refreshed(&mut self, at: DateTime<Local>) {
        self.last_refresh = Some(at);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> RefreshInterval {
        self.interval
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn last_refresh(&self) -> Option<&DateTime<Local>> {
        self.last_refresh.as_ref()
    }
}
