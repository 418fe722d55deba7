//! Component input shared by the [`Time`](super::Time) and
//! [`TimePeriod`](super::TimePeriod) factories.

use super::Resolution;
use crate::{Component, Error, Result};

const MINUTES_PER_HOUR: u64 = 60;
const SECONDS_PER_MINUTE: u64 = 60;

/// Hour, minute, second and millisecond, each of which may be left out.
///
/// Trailing components that are left out count as zero, so
/// `TimeParts::new().hour(7)` means `07:00:00`. Leaving out a component
/// while supplying a later one is a [`Error::MissingValue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeParts {
    pub hour: Option<u64>,
    pub minute: Option<u64>,
    pub second: Option<u64>,
    pub millisecond: Option<u64>,
}

impl TimeParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hms(hour: u64, minute: u64, second: u64) -> Self {
        Self::new().hour(hour).minute(minute).second(second)
    }

    pub fn hms_milli(hour: u64, minute: u64, second: u64, millisecond: u64) -> Self {
        Self::hms(hour, minute, second).millisecond(millisecond)
    }

    pub fn hour(mut self, hour: u64) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(mut self, minute: u64) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(mut self, second: u64) -> Self {
        self.second = Some(second);
        self
    }

    pub fn millisecond(mut self, millisecond: u64) -> Self {
        self.millisecond = Some(millisecond);
        self
    }

    /// Validate the components and fold them into elementary units.
    ///
    /// `hour_limit` is the exclusive upper bound of the hour, `None` for
    /// periods whose hour is unbounded.
    pub(crate) fn to_units<R: Resolution>(self, hour_limit: Option<u64>) -> Result<u64> {
        let fields = [
            (Component::Hour, self.hour),
            (Component::Minute, self.minute),
            (Component::Second, self.second),
            (Component::Millisecond, self.millisecond),
        ];

        let supplied = fields
            .iter()
            .rposition(|(_, value)| value.is_some())
            .ok_or(Error::MissingValue(Component::Hour))?;
        if let Some((component, _)) = fields[..supplied].iter().find(|(_, v)| v.is_none()) {
            return Err(Error::MissingValue(*component));
        }

        let hour = self.hour.unwrap_or(0);
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let millisecond = self.millisecond.unwrap_or(0);

        if let Some(limit) = hour_limit {
            check(Component::Hour, hour, limit)?;
        }
        check(Component::Minute, minute, MINUTES_PER_HOUR)?;
        check(Component::Second, second, SECONDS_PER_MINUTE)?;
        check(Component::Millisecond, millisecond, R::UNITS_PER_SECOND)?;

        let overflow = Error::OutOfRange {
            component: Component::Hour,
            value: hour,
            limit: u64::MAX / R::UNITS_PER_HOUR,
        };
        let rest = minute * R::UNITS_PER_MINUTE + second * R::UNITS_PER_SECOND + millisecond;

        hour.checked_mul(R::UNITS_PER_HOUR)
            .and_then(|units| units.checked_add(rest))
            .ok_or(overflow)
    }

    /// Split an elementary-unit count back into components. The hour is
    /// the full quotient and is never wrapped.
    pub(crate) fn from_units<R: Resolution>(units: u64) -> Self {
        Self {
            hour: Some(units / R::UNITS_PER_HOUR),
            minute: Some(units / R::UNITS_PER_MINUTE % MINUTES_PER_HOUR),
            second: Some(units / R::UNITS_PER_SECOND % SECONDS_PER_MINUTE),
            millisecond: Some(units % R::UNITS_PER_SECOND),
        }
    }

    /// Parse the colon-separated textual form.
    ///
    /// With `bounded_hour` unset the hour field may have any width, which
    /// is how periods render hours past 99.
    pub(crate) fn parse<R: Resolution>(input: &str, bounded_hour: bool) -> Result<Self> {
        let fields: Vec<&str> = input.split(':').collect();
        if fields.len() != R::field_count() {
            return Err(Error::format(
                input,
                format!(
                    "expected {} colon-separated fields, found {}",
                    R::field_count(),
                    fields.len()
                ),
            ));
        }

        let widths = [2, 2, 2, R::FRACTION_DIGITS];
        let mut values = [0u64; 4];
        for (index, field) in fields.iter().enumerate() {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::format(
                    input,
                    format!("field {} is not an unsigned number", index + 1),
                ));
            }

            let width = widths[index];
            let unbounded = index == 0 && !bounded_hour;
            if !unbounded {
                if R::STRICT_WIDTH && field.len() != width {
                    return Err(Error::format(
                        input,
                        format!("field {} must be {} digits wide", index + 1, width),
                    ));
                }
                if field.len() > width {
                    return Err(Error::format(
                        input,
                        format!("field {} is wider than {} digits", index + 1, width),
                    ));
                }
            }

            values[index] = field
                .parse()
                .map_err(|_| Error::format(input, format!("field {} is too large", index + 1)))?;
        }

        let parts = Self::hms(values[0], values[1], values[2]);
        if R::FRACTION_DIGITS > 0 {
            Ok(parts.millisecond(values[3]))
        } else {
            Ok(parts)
        }
    }
}

fn check(component: Component, value: u64, limit: u64) -> Result<()> {
    if value >= limit {
        return Err(Error::OutOfRange {
            component,
            value,
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Millis, Seconds};

    #[test]
    fn test_trailing_components_default_to_zero() {
        let units = TimeParts::new().hour(2).to_units::<Seconds>(Some(24)).unwrap();
        assert_eq!(units, 7200);

        let units = TimeParts::new()
            .hour(1)
            .minute(1)
            .to_units::<Millis>(Some(24))
            .unwrap();
        assert_eq!(units, 3_660_000);
    }

    #[test]
    fn test_missing_components() {
        let err = TimeParts::new().to_units::<Seconds>(Some(24)).unwrap_err();
        assert!(matches!(err, Error::MissingValue(Component::Hour)));

        let err = TimeParts::new()
            .minute(5)
            .second(1)
            .to_units::<Seconds>(Some(24))
            .unwrap_err();
        assert!(matches!(err, Error::MissingValue(Component::Hour)));

        let err = TimeParts::new()
            .hour(5)
            .second(1)
            .to_units::<Seconds>(Some(24))
            .unwrap_err();
        assert!(matches!(err, Error::MissingValue(Component::Minute)));

        let err = TimeParts::new()
            .hour(5)
            .minute(1)
            .millisecond(1)
            .to_units::<Millis>(Some(24))
            .unwrap_err();
        assert!(matches!(err, Error::MissingValue(Component::Second)));
    }

    #[test]
    fn test_range_checks() {
        let err = TimeParts::hms(24, 0, 0).to_units::<Seconds>(Some(24)).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                component: Component::Hour,
                value: 24,
                limit: 24
            }
        ));

        let err = TimeParts::hms_milli(0, 0, 0, 1000)
            .to_units::<Millis>(Some(24))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                component: Component::Millisecond,
                ..
            }
        ));

        // A whole-second value has no room for milliseconds
        let err = TimeParts::hms_milli(0, 0, 0, 1)
            .to_units::<Seconds>(Some(24))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { limit: 1, .. }));
        assert!(TimeParts::hms_milli(0, 0, 0, 0)
            .to_units::<Seconds>(Some(24))
            .is_ok());
    }

    #[test]
    fn test_unbounded_hour_overflow() {
        let err = TimeParts::new()
            .hour(u64::MAX)
            .to_units::<Millis>(None)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                component: Component::Hour,
                limit,
                ..
            } if limit == u64::MAX / Millis::UNITS_PER_HOUR
        ));

        // The hour alone fits but the minutes push the total past u64::MAX
        let max_hour = u64::MAX / Millis::UNITS_PER_HOUR;
        let err = TimeParts::new()
            .hour(max_hour)
            .minute(59)
            .to_units::<Millis>(None)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                component: Component::Hour,
                limit,
                ..
            } if limit == max_hour
        ));

        assert_eq!(
            TimeParts::new().hour(100).to_units::<Seconds>(None).unwrap(),
            360_000
        );
    }

    #[test]
    fn test_from_units() {
        let parts = TimeParts::from_units::<Millis>(90_061_001);
        assert_eq!(parts, TimeParts::hms_milli(25, 1, 1, 1));

        let parts = TimeParts::from_units::<Seconds>(3_723);
        assert_eq!(parts, TimeParts::hms_milli(1, 2, 3, 0));
    }

    #[test]
    fn test_parse_strict_width() {
        assert_eq!(
            TimeParts::parse::<Seconds>("07:08:09", true).unwrap(),
            TimeParts::hms(7, 8, 9)
        );
        assert!(TimeParts::parse::<Seconds>("7:08:09", true).is_err());
        assert!(TimeParts::parse::<Seconds>("007:08:09", true).is_err());
        assert!(TimeParts::parse::<Seconds>("07:08", true).is_err());
        assert!(TimeParts::parse::<Seconds>("07:08:09:000", true).is_err());
    }

    #[test]
    fn test_parse_variable_width() {
        assert_eq!(
            TimeParts::parse::<Millis>("1:22:45:111", true).unwrap(),
            TimeParts::hms_milli(1, 22, 45, 111)
        );
        assert_eq!(
            TimeParts::parse::<Millis>("1:2:3:4", true).unwrap(),
            TimeParts::hms_milli(1, 2, 3, 4)
        );
        assert!(TimeParts::parse::<Millis>("01:02:03:0004", true).is_err());
        assert!(TimeParts::parse::<Millis>("01:02::004", true).is_err());
    }

    #[test]
    fn test_parse_unbounded_hour() {
        assert_eq!(
            TimeParts::parse::<Seconds>("123:04:05", false).unwrap(),
            TimeParts::hms(123, 4, 5)
        );
        assert!(TimeParts::parse::<Seconds>("123:04:05", true).is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_spaces() {
        for input in ["+1:00:00:000", "-1:00:00:000", " 1:00:00:000", "1:00:00:0x0"] {
            assert!(
                TimeParts::parse::<Millis>(input, true).is_err(),
                "{input} should be rejected"
            );
        }
    }
}
