//! Resource limits for component trees.
//!
//! Array templating cost is O(size * template size), so the element count of
//! a single array is bounded.

/// Maximum number of elements a single `DataArray` may hold.
pub const MAX_ARRAY_ELEMENTS: usize = 64 * 1024 * 1024;

/// SWE Common data model version implemented by this crate.
pub const SWE_COMMON_VERSION: &str = "2.0";
