//! Elapsed time

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use super::{Millis, Resolution, Time, TimeParts};
use crate::{Error, Result};

/// A non-negative span of time with no upper bound.
///
/// The hour is the full quotient of the stored unit count and may exceed
/// 23; minute, second and millisecond always stay within their natural
/// ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePeriod<R: Resolution> {
    units: u64,
    resolution: PhantomData<R>,
}

impl<R: Resolution> TimePeriod<R> {
    /// Build from components; the hour is unbounded.
    pub fn from_parts(parts: TimeParts) -> Result<Self> {
        let units = parts.to_units::<R>(None)?;
        Ok(Self::from_units(units))
    }

    pub fn from_hms(hour: u64, minute: u32, second: u32) -> Result<Self> {
        Self::from_parts(TimeParts::hms(hour, minute.into(), second.into()))
    }

    pub const fn zero() -> Self {
        Self::from_units(0)
    }

    pub const fn from_units(units: u64) -> Self {
        Self {
            units,
            resolution: PhantomData,
        }
    }

    /// Absolute distance between two times of day. Symmetric in its
    /// arguments and never longer than one day.
    pub fn between(a: Time<R>, b: Time<R>) -> Self {
        Self::from_units(a.as_units().abs_diff(b.as_units()))
    }

    pub fn as_units(&self) -> u64 {
        self.units
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    pub fn hour(&self) -> u64 {
        self.units / R::UNITS_PER_HOUR
    }

    pub fn minute(&self) -> u32 {
        (self.units / R::UNITS_PER_MINUTE % 60) as u32
    }

    pub fn second(&self) -> u32 {
        (self.units / R::UNITS_PER_SECOND % 60) as u32
    }

    pub fn millisecond(&self) -> u32 {
        (self.units % R::UNITS_PER_SECOND) as u32
    }

    pub fn parts(&self) -> TimeParts {
        TimeParts::from_units::<R>(self.units)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let parts = TimeParts::parse::<R>(input, false)?;
        Self::from_parts(parts)
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Difference, or `None` when `rhs` is the longer period.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.units.checked_sub(rhs.units).map(Self::from_units)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.units.checked_add(rhs.units).map(Self::from_units)
    }

    /// Distance between two periods regardless of order.
    pub fn abs_diff(self, other: Self) -> Self {
        Self::from_units(self.units.abs_diff(other.units))
    }

    /// Convert to a chrono duration, `None` if it does not fit.
    pub fn to_chrono_duration(&self) -> Option<chrono::Duration> {
        let millis = self.units.checked_mul(1000 / R::UNITS_PER_SECOND)?;
        chrono::Duration::try_milliseconds(i64::try_from(millis).ok()?)
    }
}

impl TimePeriod<Millis> {
    pub fn from_hms_milli(hour: u64, minute: u32, second: u32, millisecond: u32) -> Result<Self> {
        Self::from_parts(TimeParts::hms_milli(
            hour,
            minute.into(),
            second.into(),
            millisecond.into(),
        ))
    }
}

impl<R: Resolution> fmt::Display for TimePeriod<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if R::FRACTION_DIGITS > 0 {
            write!(f, ":{:0width$}", self.millisecond(), width = R::FRACTION_DIGITS)?;
        }
        Ok(())
    }
}

impl<R: Resolution> FromStr for TimePeriod<R> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<R: Resolution> Add for TimePeriod<R> {
    type Output = TimePeriod<R>;

    /// # Panics
    ///
    /// Panics if the sum overflows the unit count. Use
    /// [`TimePeriod::checked_add`] to handle that case.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("overflow when adding periods")
    }
}

impl<R: Resolution> AddAssign for TimePeriod<R> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Resolution> Sub for TimePeriod<R> {
    type Output = TimePeriod<R>;

    /// Subtracting a longer period wraps by whole days until the result is
    /// non-negative. Once the true difference exceeds a day the result is
    /// shorter than that difference; use [`TimePeriod::checked_sub`] or
    /// [`TimePeriod::abs_diff`] when that matters.
    fn sub(self, rhs: Self) -> Self::Output {
        match self.units.checked_sub(rhs.units) {
            Some(units) => Self::from_units(units),
            None => {
                let deficit = (rhs.units - self.units) % R::UNITS_PER_DAY;
                Self::from_units((R::UNITS_PER_DAY - deficit) % R::UNITS_PER_DAY)
            }
        }
    }
}

impl<R: Resolution> Sum for TimePeriod<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<R: Resolution> TryFrom<chrono::Duration> for TimePeriod<R> {
    type Error = Error;

    fn try_from(duration: chrono::Duration) -> Result<Self> {
        if duration < chrono::Duration::zero() {
            return Err(Error::Validation(format!(
                "Negative duration cannot be a period: {}",
                duration
            )));
        }
        let millis = duration.num_milliseconds() as u64;
        Ok(Self::from_units(millis / (1000 / R::UNITS_PER_SECOND)))
    }
}

impl<R: Resolution> Serialize for TimePeriod<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, R: Resolution> Deserialize<'de> for TimePeriod<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
