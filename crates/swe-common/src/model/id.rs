//! Component identifiers.
//!
//! Every component receives a random UUID when it is constructed or copied.
//! Identifiers are never reused and cannot be reassigned.

use std::fmt;

use uuid::Uuid;

/// A process-unique component identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Generates a fresh random identifier.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the 16 raw bytes of the identifier.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Formats an identifier as non-hyphenated lowercase hex.
pub fn format_id(id: &ComponentId) -> String {
    id.to_string()
}

/// Parses an identifier from hex (with or without hyphens).
pub fn parse_id(s: &str) -> Option<ComponentId> {
    Uuid::try_parse(s).ok().map(ComponentId)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids: HashSet<ComponentId> = (0..1000).map(|_| ComponentId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let id = ComponentId::generate();
        let formatted = format_id(&id);
        assert_eq!(formatted.len(), 32);
        assert!(!formatted.contains('-'));
        assert_eq!(parse_id(&formatted), Some(id));
    }

    #[test]
    fn test_parse_with_hyphens() {
        let hex = "550e8400e29b41d4a716446655440000";
        let with_hyphens = "550e8400-e29b-41d4-a716-446655440000";

        let id1 = parse_id(hex).unwrap();
        let id2 = parse_id(with_hyphens).unwrap();
        assert_eq!(id1, id2);
        assert!(parse_id("not-an-id").is_none());
    }
}
