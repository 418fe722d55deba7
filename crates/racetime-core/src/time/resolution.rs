use std::fmt::Debug;
use std::hash::Hash;

/// Size of the elementary unit a time value is counted in.
pub trait Resolution:
    Debug + Clone + Copy + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    /// Elementary units in one second.
    const UNITS_PER_SECOND: u64;

    /// Digits used to render the sub-second field, 0 when there is none.
    const FRACTION_DIGITS: usize;

    /// Whether every parsed field must have exactly its rendered width.
    const STRICT_WIDTH: bool;

    /// Short name used in log lines and diagnostics.
    const NAME: &'static str;

    const UNITS_PER_MINUTE: u64 = Self::UNITS_PER_SECOND * 60;
    const UNITS_PER_HOUR: u64 = Self::UNITS_PER_MINUTE * 60;
    const UNITS_PER_DAY: u64 = Self::UNITS_PER_HOUR * 24;

    /// Number of colon-separated fields in the textual form.
    fn field_count() -> usize {
        if Self::FRACTION_DIGITS > 0 {
            4
        } else {
            3
        }
    }
}

/// Whole seconds: `HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seconds;

impl Resolution for Seconds {
    const UNITS_PER_SECOND: u64 = 1;
    const FRACTION_DIGITS: usize = 0;
    const STRICT_WIDTH: bool = true;
    const NAME: &'static str = "seconds";
}

/// Milliseconds: `HH:MM:SS:mmm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis;

impl Resolution for Millis {
    const UNITS_PER_SECOND: u64 = 1000;
    const FRACTION_DIGITS: usize = 3;
    const STRICT_WIDTH: bool = false;
    const NAME: &'static str = "milliseconds";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_lengths() {
        assert_eq!(Seconds::UNITS_PER_DAY, 86_400);
        assert_eq!(Millis::UNITS_PER_DAY, 86_400_000);
        assert_eq!(Millis::UNITS_PER_HOUR, 3_600_000);
    }

    #[test]
    fn test_field_count() {
        assert_eq!(Seconds::field_count(), 3);
        assert_eq!(Millis::field_count(), 4);
    }
}
