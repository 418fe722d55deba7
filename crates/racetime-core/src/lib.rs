//! Time-of-day and elapsed-time value types used by the race console.
//!
//! Both types come in two resolutions: [`Seconds`] and [`Millis`]. The
//! aliases [`BasicTime`], [`BasicPeriod`], [`PreciseTime`] and
//! [`PrecisePeriod`] name the four concrete instantiations.

pub mod error;
pub mod models;
pub mod storage;
pub mod time;

pub use error::{Component, Error, Result};
pub use time::{
    BasicPeriod, BasicTime, Millis, PrecisePeriod, PreciseTime, Resolution, Seconds, Time,
    TimeParts, TimePeriod,
};
