//! Time of day

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use super::{Millis, Resolution, Seconds, TimeParts, TimePeriod};
use crate::{Error, Result};

const HOURS_PER_DAY: u64 = 24;
const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// A point within one day, `00:00:00` up to but excluding `24:00:00`.
///
/// Stored as a count of elementary units since midnight that is always
/// below [`Resolution::UNITS_PER_DAY`]. Shifting by a [`TimePeriod`] wraps
/// around midnight in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time<R: Resolution> {
    units: u64,
    resolution: PhantomData<R>,
}

impl<R: Resolution> Time<R> {
    pub const UNITS_PER_DAY: u64 = R::UNITS_PER_DAY;

    /// Build from components; hour must be below 24.
    pub fn from_parts(parts: TimeParts) -> Result<Self> {
        let units = parts.to_units::<R>(Some(HOURS_PER_DAY))?;
        Ok(Self::from_raw(units))
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::from_parts(TimeParts::hms(hour.into(), minute.into(), second.into()))
    }

    pub const fn midnight() -> Self {
        Self::from_raw(0)
    }

    /// Any unit count, reduced modulo one day.
    pub fn from_units(units: u64) -> Self {
        Self::from_raw(units % R::UNITS_PER_DAY)
    }

    const fn from_raw(units: u64) -> Self {
        Self {
            units,
            resolution: PhantomData,
        }
    }

    /// Elementary units since midnight.
    pub fn as_units(&self) -> u64 {
        self.units
    }

    pub fn hour(&self) -> u32 {
        (self.units / R::UNITS_PER_HOUR) as u32
    }

    pub fn minute(&self) -> u32 {
        (self.units / R::UNITS_PER_MINUTE % 60) as u32
    }

    pub fn second(&self) -> u32 {
        (self.units / R::UNITS_PER_SECOND % 60) as u32
    }

    /// Sub-second part; always 0 at whole-second resolution.
    pub fn millisecond(&self) -> u32 {
        (self.units % R::UNITS_PER_SECOND) as u32
    }

    pub fn parts(&self) -> TimeParts {
        TimeParts::from_units::<R>(self.units)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let parts = TimeParts::parse::<R>(input, true)?;
        Self::from_parts(parts)
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Convert to a chrono time of day.
    pub fn to_naive_time(&self) -> NaiveTime {
        let millis = self.units * 1000 / R::UNITS_PER_SECOND;
        NaiveTime::default() + chrono::Duration::milliseconds(millis as i64)
    }
}

impl Time<Millis> {
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Result<Self> {
        Self::from_parts(TimeParts::hms_milli(
            hour.into(),
            minute.into(),
            second.into(),
            millisecond.into(),
        ))
    }
}

impl From<Time<Seconds>> for Time<Millis> {
    fn from(time: Time<Seconds>) -> Self {
        Self::from_raw(time.units * Millis::UNITS_PER_SECOND)
    }
}

impl<R: Resolution> fmt::Display for Time<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
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

impl<R: Resolution> FromStr for Time<R> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<R: Resolution> Add<TimePeriod<R>> for Time<R> {
    type Output = Time<R>;

    fn add(self, rhs: TimePeriod<R>) -> Self::Output {
        let shift = rhs.as_units() % R::UNITS_PER_DAY;
        Self::from_raw((self.units + shift) % R::UNITS_PER_DAY)
    }
}

impl<R: Resolution> Sub<TimePeriod<R>> for Time<R> {
    type Output = Time<R>;

    fn sub(self, rhs: TimePeriod<R>) -> Self::Output {
        let shift = rhs.as_units() % R::UNITS_PER_DAY;
        Self::from_raw((self.units + R::UNITS_PER_DAY - shift) % R::UNITS_PER_DAY)
    }
}

impl<R: Resolution> AddAssign<TimePeriod<R>> for Time<R> {
    fn add_assign(&mut self, rhs: TimePeriod<R>) {
        *self = *self + rhs;
    }
}

impl<R: Resolution> SubAssign<TimePeriod<R>> for Time<R> {
    fn sub_assign(&mut self, rhs: TimePeriod<R>) {
        *self = *self - rhs;
    }
}

impl<R: Resolution> TryFrom<NaiveTime> for Time<R> {
    type Error = Error;

    /// Precision finer than the resolution is truncated. A leap second
    /// has no representation and is rejected.
    fn try_from(time: NaiveTime) -> Result<Self> {
        let fraction = u64::from(time.nanosecond()) / (NANOS_PER_SECOND / R::UNITS_PER_SECOND);
        Self::from_parts(
            TimeParts::hms(time.hour().into(), time.minute().into(), time.second().into())
                .millisecond(fraction),
        )
    }
}

impl<R: Resolution> Serialize for Time<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, R: Resolution> Deserialize<'de> for Time<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
