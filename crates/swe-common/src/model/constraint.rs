//! Constraint value objects.
//!
//! Constraints describe the legal value set of a scalar component. They are
//! carried as metadata and projected into the schema; assigning a value never
//! checks them. See [`crate::validate`] for the opt-in check.

/// Allowed tokens for `Text` and `Category` components.
///
/// A value is legal if it is one of the enumerated tokens or matches the
/// pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedTokens {
    /// Enumerated tokens, without duplicates.
    pub values: Option<Vec<String>>,
    /// Regular expression the whole value must match.
    pub pattern: Option<String>,
}

impl AllowedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constraint enumerating the given tokens.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = Self::new();
        for v in values {
            tokens.add_value(v);
        }
        tokens
    }

    /// Creates a constraint from a pattern.
    pub fn from_pattern(pattern: impl Into<String>) -> Self {
        Self {
            values: None,
            pattern: Some(pattern.into()),
        }
    }

    /// Adds a token. Adding a token already present is a no-op.
    pub fn add_value(&mut self, value: impl Into<String>) -> &[String] {
        let value = value.into();
        let values = self.values.get_or_insert_with(Vec::new);
        if !values.contains(&value) {
            values.push(value);
        }
        values
    }

    /// Removes a token if present.
    pub fn remove_value(&mut self, value: &str) -> Option<&[String]> {
        let values = self.values.as_mut()?;
        values.retain(|v| v != value);
        Some(values)
    }
}

/// Allowed values for `Count`, `Quantity` and `Time` components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowedValues {
    /// Enumerated values, without duplicates.
    pub values: Option<Vec<f64>>,
    /// Inclusive `[min, max]` interval.
    pub interval: Option<(f64, f64)>,
    /// Maximum number of significant digits.
    pub significant_figures: Option<u32>,
}

impl AllowedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constraint enumerating the given values.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut allowed = Self::new();
        for v in values {
            allowed.add_value(v);
        }
        allowed
    }

    /// Creates a constraint from an inclusive interval.
    pub fn from_interval(min: f64, max: f64) -> Self {
        Self {
            interval: Some((min, max)),
            ..Self::default()
        }
    }

    /// Sets the significant figures limit.
    pub fn with_significant_figures(mut self, figures: u32) -> Self {
        self.significant_figures = Some(figures);
        self
    }

    /// Adds a value. Adding a value already present is a no-op.
    pub fn add_value(&mut self, value: f64) -> &[f64] {
        let values = self.values.get_or_insert_with(Vec::new);
        if !values.contains(&value) {
            values.push(value);
        }
        values
    }

    /// Removes a value if present.
    pub fn remove_value(&mut self, value: f64) -> Option<&[f64]> {
        let values = self.values.as_mut()?;
        values.retain(|v| *v != value);
        Some(values)
    }
}
