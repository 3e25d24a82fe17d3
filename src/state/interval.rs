//! Flash interval values and the interval menu presets

use std::{fmt, str::FromStr, time::Duration};

use thiserror::Error;

/// Errors produced while building a flash interval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("flash interval must be strictly positive")]
    NonPositive,
    #[error("flash interval must not exceed 100 years")]
    TooLarge,
    #[error("invalid interval '{0}', expected something like 10s, 5m, 1h or a number of minutes")]
    Parse(String),
    #[error("no interval preset at menu index {0}")]
    UnknownPreset(usize),
}

/// A strictly positive duration between two flashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlashInterval(Duration);

impl FlashInterval {
    /// Sixty minutes, the interval used until the user picks another one
    pub const DEFAULT: FlashInterval = FlashInterval(Duration::from_secs(60 * 60));

    /// Longest accepted interval, one hundred years
    pub const MAX: FlashInterval = FlashInterval(Duration::from_secs(100 * 365 * 86_400));

    /// Create an interval, rejecting zero-length durations and anything
    /// longer than [`FlashInterval::MAX`]
    pub fn new(duration: Duration) -> Result<Self, IntervalError> {
        if duration.is_zero() {
            return Err(IntervalError::NonPositive);
        }
        if duration > Self::MAX.0 {
            return Err(IntervalError::TooLarge);
        }
        Ok(Self(duration))
    }

    pub fn from_secs(secs: u64) -> Result<Self, IntervalError> {
        Self::new(Duration::from_secs(secs))
    }

    /// The interval as a plain duration
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Text shown under the counter, e.g. `Interval 60 minutes`
    pub fn label(&self) -> String {
        let secs = self.0.as_secs();
        if secs >= 60 && secs % 60 == 0 {
            let minutes = secs / 60;
            if minutes == 1 {
                "Interval 1 minute".to_string()
            } else {
                format!("Interval {} minutes", minutes)
            }
        } else if secs == 1 {
            "Interval 1 second".to_string()
        } else if secs == 0 {
            format!("Interval {} ms", self.0.as_millis())
        } else {
            format!("Interval {} seconds", secs)
        }
    }
}

impl Default for FlashInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<FlashInterval> for Duration {
    fn from(interval: FlashInterval) -> Self {
        interval.0
    }
}

impl fmt::Display for FlashInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        if secs == 0 {
            write!(f, "{}ms", self.0.as_millis())
        } else if secs % 3600 == 0 {
            write!(f, "{}h", secs / 3600)
        } else if secs % 60 == 0 {
            write!(f, "{}m", secs / 60)
        } else {
            write!(f, "{}s", secs)
        }
    }
}

impl FromStr for FlashInterval {
    type Err = IntervalError;

    /// Accepts `10s`, `5m`, `1h`, `250ms` or a bare number of minutes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let split = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        let (number, unit) = input.split_at(split);

        let value: u64 = number
            .parse()
            .map_err(|_| IntervalError::Parse(s.to_string()))?;

        let duration = match unit.trim() {
            "" | "m" | "min" | "mins" | "minute" | "minutes" => {
                Duration::from_secs(value.saturating_mul(60))
            }
            "s" | "sec" | "secs" | "second" | "seconds" => Duration::from_secs(value),
            "h" | "hr" | "hour" | "hours" => Duration::from_secs(value.saturating_mul(3600)),
            "ms" => Duration::from_millis(value),
            _ => return Err(IntervalError::Parse(s.to_string())),
        };

        Self::new(duration)
    }
}

/// Entries of the interval menu, in the order they are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalPreset {
    TestTenSeconds,
    OneMinute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    FortyFiveMinutes,
    SixtyMinutes,
    NinetyMinutes,
}

impl IntervalPreset {
    pub const ALL: [IntervalPreset; 9] = [
        IntervalPreset::TestTenSeconds,
        IntervalPreset::OneMinute,
        IntervalPreset::FiveMinutes,
        IntervalPreset::TenMinutes,
        IntervalPreset::FifteenMinutes,
        IntervalPreset::ThirtyMinutes,
        IntervalPreset::FortyFiveMinutes,
        IntervalPreset::SixtyMinutes,
        IntervalPreset::NinetyMinutes,
    ];

    /// Look up a preset by its position in the menu
    pub fn from_index(index: usize) -> Result<Self, IntervalError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(IntervalError::UnknownPreset(index))
    }

    /// Menu entry text
    pub fn label(&self) -> &'static str {
        match self {
            IntervalPreset::TestTenSeconds => "TEST 10 sec",
            IntervalPreset::OneMinute => "1 minute",
            IntervalPreset::FiveMinutes => "5 minutes",
            IntervalPreset::TenMinutes => "10 minutes",
            IntervalPreset::FifteenMinutes => "15 minutes",
            IntervalPreset::ThirtyMinutes => "30 minutes",
            IntervalPreset::FortyFiveMinutes => "45 minutes",
            IntervalPreset::SixtyMinutes => "60 minutes",
            IntervalPreset::NinetyMinutes => "90 minutes",
        }
    }

    pub fn interval(&self) -> FlashInterval {
        let secs = match self {
            IntervalPreset::TestTenSeconds => 10,
            IntervalPreset::OneMinute => 60,
            IntervalPreset::FiveMinutes => 5 * 60,
            IntervalPreset::TenMinutes => 10 * 60,
            IntervalPreset::FifteenMinutes => 15 * 60,
            IntervalPreset::ThirtyMinutes => 30 * 60,
            IntervalPreset::FortyFiveMinutes => 45 * 60,
            IntervalPreset::SixtyMinutes => 60 * 60,
            IntervalPreset::NinetyMinutes => 90 * 60,
        };
        FlashInterval(Duration::from_secs(secs))
    }
}
