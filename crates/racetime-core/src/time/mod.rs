//! Clock and period value types
//!
//! [`Time`] is a point within one day, [`TimePeriod`] is an elapsed
//! quantity that may span many days. Both store a single count of
//! elementary units whose size is picked by the [`Resolution`] parameter.

mod clock;
mod parts;
mod period;
mod resolution;

pub use clock::Time;
pub use parts::TimeParts;
pub use period::TimePeriod;
pub use resolution::{Millis, Resolution, Seconds};

/// Time of day with whole-second resolution.
pub type BasicTime = Time<Seconds>;
/// Elapsed time with whole-second resolution.
pub type BasicPeriod = TimePeriod<Seconds>;
/// Time of day with millisecond resolution.
pub type PreciseTime = Time<Millis>;
/// Elapsed time with millisecond resolution.
pub type PrecisePeriod = TimePeriod<Millis>;
