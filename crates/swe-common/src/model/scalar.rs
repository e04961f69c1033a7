//! Scalar component payloads.
//!
//! Each scalar holds at most one native value. Setters are plain
//! pass-through: constraints are never checked on assignment.

use chrono::{DateTime, TimeDelta, Utc};

use crate::definitions::{frames, units};
use crate::model::{AllowedTokens, AllowedValues};

/// Payload of a `Boolean` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boolean {
    pub value: Option<bool>,
}

impl Boolean {
    pub fn get(&self) -> Option<bool> {
        self.value
    }

    pub fn set(&mut self, value: Option<bool>) {
        self.value = value;
    }
}

/// Payload of a `Text` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub value: Option<String>,
    pub constraint: Option<AllowedTokens>,
}

impl Text {
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set(&mut self, value: Option<String>) {
        self.value = value;
    }
}

/// Payload of a `Category` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub value: Option<String>,
    /// Dictionary listing the possible values, referenced by URI.
    pub code_space: Option<String>,
    pub constraint: Option<AllowedTokens>,
}

impl Category {
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set(&mut self, value: Option<String>) {
        self.value = value;
    }
}

/// Payload of a `Count` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Count {
    pub value: Option<i64>,
    pub constraint: Option<AllowedValues>,
}

impl Count {
    pub fn get(&self) -> Option<i64> {
        self.value
    }

    pub fn set(&mut self, value: Option<i64>) {
        self.value = value;
    }
}

/// Payload of a `Quantity` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quantity {
    pub value: Option<f64>,
    /// Unit of measure code (UCUM).
    pub uom: Option<String>,
    pub constraint: Option<AllowedValues>,
}

impl Quantity {
    pub fn get(&self) -> Option<f64> {
        self.value
    }

    pub fn set(&mut self, value: Option<f64>) {
        self.value = value;
    }
}

/// Payload of a `Time` component.
///
/// The value is a count of seconds since `reference_time`, expressed in
/// the temporal frame `local_frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct Time {
    pub value: Option<f64>,
    pub uom: String,
    pub reference_time: DateTime<Utc>,
    pub local_frame: String,
    pub constraint: Option<AllowedValues>,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            value: None,
            uom: units::ISO_8601_GREGORIAN.to_string(),
            // Unix epoch
            reference_time: DateTime::<Utc>::default(),
            local_frame: frames::UTC.to_string(),
            constraint: None,
        }
    }
}

impl Time {
    pub fn get(&self) -> Option<f64> {
        self.value
    }

    pub fn set(&mut self, value: Option<f64>) {
        self.value = value;
    }

    /// Sets the value from an absolute instant.
    pub fn set_datetime(&mut self, instant: DateTime<Utc>) {
        let delta = instant.signed_duration_since(self.reference_time);
        let secs = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
        self.value = Some(secs);
    }

    /// Returns the value as an absolute instant.
    ///
    /// Returns `None` if unset, non-finite, or outside the representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.value?;
        if !secs.is_finite() {
            return None;
        }
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1e9).round() as i64;
        let delta = TimeDelta::try_seconds(whole as i64)? + TimeDelta::nanoseconds(nanos);
        self.reference_time.checked_add_signed(delta)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_unset_by_default() {
        assert_eq!(Boolean::default().get(), None);
        assert_eq!(Text::default().get(), None);
        assert_eq!(Count::default().get(), None);
        assert_eq!(Quantity::default().get(), None);
        assert_eq!(Time::default().get(), None);
    }

    #[test]
    fn test_time_defaults() {
        let time = Time::default();
        assert_eq!(time.uom, units::ISO_8601_GREGORIAN);
        assert_eq!(time.reference_time.timestamp(), 0);
        assert_eq!(time.local_frame, frames::UTC);
    }

    #[test]
    fn test_time_defaults_are_independent() {
        let mut a = Time::default();
        let b = Time::default();
        a.local_frame.push_str("#modified");
        a.reference_time = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(b.local_frame, frames::UTC);
        assert_eq!(b.reference_time.timestamp(), 0);
    }

    #[test]
    fn test_time_datetime_roundtrip() {
        let mut time = Time::default();
        let instant = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 15).unwrap();
        time.set_datetime(instant);
        assert_eq!(time.get(), Some(instant.timestamp() as f64));
        assert_eq!(time.datetime(), Some(instant));
    }

    #[test]
    fn test_time_relative_reference() {
        let mut time = Time {
            reference_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            ..Time::default()
        };
        time.set(Some(90.5));
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 30).unwrap()
            + TimeDelta::milliseconds(500);
        assert_eq!(time.datetime(), Some(expected));
    }

    #[test]
    fn test_time_datetime_non_finite() {
        let mut time = Time::default();
        time.set(Some(f64::INFINITY));
        assert_eq!(time.datetime(), None);
        time.set(None);
        assert_eq!(time.datetime(), None);
    }

    #[test]
    fn test_constraint_not_enforced() {
        let mut count = Count {
            value: None,
            constraint: Some(AllowedValues::from_interval(0.0, 10.0)),
        };
        count.set(Some(500));
        assert_eq!(count.get(), Some(500));
    }
}
