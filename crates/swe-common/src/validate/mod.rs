//! Constraint validation for component trees.
//!
//! Assigning a value never checks constraints. This module provides the
//! explicit pass that does, for callers who want it:
//! - Token enumerations and patterns on `Text` and `Category`
//! - Enumerated values, intervals and significant figures on `Count`,
//!   `Quantity` and `Time`
//!
//! Unset values always pass.

use regex::Regex;

use crate::error::ValidationError;
use crate::model::{AllowedTokens, AllowedValues, Component, ComponentData};

/// Validates every set value in the tree rooted at `component`.
///
/// Returns the first violation found, visiting children in order.
pub fn validate_component(component: &Component) -> Result<(), ValidationError> {
    validate_value(component)?;
    match component.data() {
        ComponentData::DataRecord(r) => {
            for field in r.fields() {
                validate_component(field)?;
            }
        }
        ComponentData::Vector(v) => {
            for (_, coord) in v.coordinates() {
                validate_component(coord)?;
            }
        }
        ComponentData::DataArray(a) => {
            for element in a.elements() {
                validate_component(element)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Validates the value of a single scalar component against its constraint.
///
/// Composites are not descended into.
pub fn validate_value(component: &Component) -> Result<(), ValidationError> {
    let name = component.name();
    match component.data() {
        ComponentData::Text(t) => check_tokens(name, t.value.as_deref(), t.constraint.as_ref()),
        ComponentData::Category(c) => {
            check_tokens(name, c.value.as_deref(), c.constraint.as_ref())
        }
        ComponentData::Count(c) => {
            check_values(name, c.value.map(|v| v as f64), c.constraint.as_ref())
        }
        ComponentData::Quantity(q) => check_values(name, q.value, q.constraint.as_ref()),
        ComponentData::Time(t) => check_values(name, t.value, t.constraint.as_ref()),
        _ => Ok(()),
    }
}

fn check_tokens(
    component: &str,
    value: Option<&str>,
    constraint: Option<&AllowedTokens>,
) -> Result<(), ValidationError> {
    let (Some(value), Some(constraint)) = (value, constraint) else {
        return Ok(());
    };
    if constraint.values.is_none() && constraint.pattern.is_none() {
        return Ok(());
    }

    // Legal if enumerated or matching the pattern
    if let Some(values) = &constraint.values {
        if values.iter().any(|v| v == value) {
            return Ok(());
        }
    }
    if let Some(pattern) = &constraint.pattern {
        let re = full_match_regex(pattern).map_err(|e| ValidationError::InvalidPattern {
            component: component.to_string(),
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        if re.is_match(value) {
            return Ok(());
        }
        if constraint.values.is_none() {
            return Err(ValidationError::PatternMismatch {
                component: component.to_string(),
                value: value.to_string(),
                pattern: pattern.clone(),
            });
        }
    }
    Err(ValidationError::TokenNotAllowed {
        component: component.to_string(),
        value: value.to_string(),
    })
}

/// Compiles `pattern` so that it must match the whole value.
///
/// The pattern has to compile on its own first; only then is it safe to wrap
/// in anchors.
fn full_match_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    Regex::new(&format!("^(?:{pattern})$"))
}

fn check_values(
    component: &str,
    value: Option<f64>,
    constraint: Option<&AllowedValues>,
) -> Result<(), ValidationError> {
    let (Some(value), Some(constraint)) = (value, constraint) else {
        return Ok(());
    };

    // Enumerated values and the interval are alternatives
    let enumerated = constraint.values.as_ref().map(|vs| vs.contains(&value));
    let in_interval = constraint
        .interval
        .map(|(min, max)| (min..=max).contains(&value));
    match (enumerated, in_interval) {
        (Some(false), None) => {
            return Err(ValidationError::ValueNotAllowed {
                component: component.to_string(),
                value,
            });
        }
        (None | Some(false), Some(false)) => {
            let (min, max) = constraint.interval.unwrap_or_default();
            return Err(ValidationError::OutOfInterval {
                component: component.to_string(),
                value,
                min,
                max,
            });
        }
        _ => {}
    }

    if let Some(max) = constraint.significant_figures {
        if significant_figures(value) > max {
            return Err(ValidationError::TooManySignificantFigures {
                component: component.to_string(),
                value,
                max,
            });
        }
    }
    Ok(())
}

/// Counts the significant digits in the shortest decimal form of `value`.
fn significant_figures(value: f64) -> u32 {
    if !value.is_finite() || value == 0.0 {
        return 1;
    }
    let formatted = format!("{:e}", value.abs());
    let mantissa = formatted.split('e').next().unwrap_or_default();
    mantissa.chars().filter(char::is_ascii_digit).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn mode_text() -> Component {
        Component::text("mode", "Mode", "urn:mode")
            .with_allowed_tokens(AllowedTokens::from_values(["auto", "manual"]))
    }

    #[test]
    fn test_unset_values_pass() {
        assert!(validate_component(&mode_text()).is_ok());
        let q = Component::quantity("q", "Q", "urn:q")
            .with_allowed_values(AllowedValues::from_interval(0.0, 1.0));
        assert!(validate_component(&q).is_ok());
    }

    #[test]
    fn test_token_enumeration() {
        let mut comp = mode_text();
        comp.set_value(Value::from("auto")).unwrap();
        assert!(validate_value(&comp).is_ok());

        comp.set_value(Value::from("off")).unwrap();
        assert_eq!(
            validate_value(&comp),
            Err(ValidationError::TokenNotAllowed {
                component: "mode".to_string(),
                value: "off".to_string(),
            })
        );
    }

    #[test]
    fn test_token_pattern_is_full_match() {
        let mut comp = Component::category("code", "Code", "urn:code")
            .with_allowed_tokens(AllowedTokens::from_pattern("[A-Z]{3}"));
        comp.set_value(Value::from("ABC")).unwrap();
        assert!(validate_value(&comp).is_ok());

        comp.set_value(Value::from("ABCD")).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::PatternMismatch { .. })
        ));
    }

    #[test]
    fn test_tokens_or_pattern() {
        let mut tokens = AllowedTokens::from_pattern("[0-9]+");
        tokens.add_value("none");
        let mut comp = Component::text("t", "T", "urn:t").with_allowed_tokens(tokens);

        comp.set_value(Value::from("none")).unwrap();
        assert!(validate_value(&comp).is_ok());
        comp.set_value(Value::from("42")).unwrap();
        assert!(validate_value(&comp).is_ok());
        comp.set_value(Value::from("x")).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::TokenNotAllowed { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let mut comp = Component::text("t", "T", "urn:t")
            .with_allowed_tokens(AllowedTokens::from_pattern("(unclosed"));
        comp.set_value(Value::from("x")).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_pattern_cannot_escape_anchors() {
        let mut comp = Component::text("t", "T", "urn:t")
            .with_allowed_tokens(AllowedTokens::from_pattern("a)|(b"));
        comp.set_value(Value::from("azzzz")).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_pattern_alternation_is_anchored() {
        let mut comp = Component::text("t", "T", "urn:t")
            .with_allowed_tokens(AllowedTokens::from_pattern("a|ab"));
        comp.set_value(Value::from("ab")).unwrap();
        assert!(validate_value(&comp).is_ok());
        comp.set_value(Value::from("abc")).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::PatternMismatch { .. })
        ));
    }

    #[test]
    fn test_interval() {
        let mut comp = Component::quantity("lat", "Latitude", "urn:lat")
            .with_allowed_values(AllowedValues::from_interval(-90.0, 90.0));
        comp.set_value(Value::Real(90.0)).unwrap();
        assert!(validate_value(&comp).is_ok());

        comp.set_value(Value::Real(91.0)).unwrap();
        assert_eq!(
            validate_value(&comp),
            Err(ValidationError::OutOfInterval {
                component: "lat".to_string(),
                value: 91.0,
                min: -90.0,
                max: 90.0,
            })
        );
    }

    #[test]
    fn test_enumerated_counts() {
        let mut comp = Component::count("n", "N", "urn:n")
            .with_allowed_values(AllowedValues::from_values([1.0, 2.0, 4.0]));
        comp.set_value(Value::Count(4)).unwrap();
        assert!(validate_value(&comp).is_ok());
        comp.set_value(Value::Count(3)).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::ValueNotAllowed { .. })
        ));
    }

    #[test]
    fn test_significant_figures() {
        assert_eq!(significant_figures(1.25), 3);
        assert_eq!(significant_figures(0.0012), 2);
        assert_eq!(significant_figures(-1200.0), 2);
        assert_eq!(significant_figures(0.0), 1);

        let mut comp = Component::quantity("q", "Q", "urn:q")
            .with_allowed_values(AllowedValues::new().with_significant_figures(3));
        comp.set_value(Value::Real(1.25)).unwrap();
        assert!(validate_value(&comp).is_ok());
        comp.set_value(Value::Real(1.255)).unwrap();
        assert!(matches!(
            validate_value(&comp),
            Err(ValidationError::TooManySignificantFigures { max: 3, .. })
        ));
    }

    #[test]
    fn test_tree_walk_finds_nested_violation() {
        let template = Component::data_record("rec", "Record", "urn:rec").with_field(mode_text());
        let mut arr = Component::data_array("arr", "Array", "urn:arr");
        arr.as_array_mut()
            .unwrap()
            .set_component_template_and_size(2, template)
            .unwrap();
        arr.set_value(Value::Array(vec![
            Value::record([("mode", "auto")]),
            Value::record([("mode", "turbo")]),
        ]))
        .unwrap();

        assert!(matches!(
            validate_component(&arr),
            Err(ValidationError::TokenNotAllowed { ref value, .. }) if value == "turbo"
        ));
    }
}
