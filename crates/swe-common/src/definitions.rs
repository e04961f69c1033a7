//! Well-known OGC definition, unit and frame URIs.
//!
//! These are the defaults stamped onto components that carry fixed
//! semantics (`Time`, array element counts).

// =============================================================================
// PROPERTY DEFINITIONS
// =============================================================================

/// Well-known observed-property definitions.
pub mod properties {
    /// Sampling time - default definition of a `Time` component.
    pub const SAMPLING_TIME: &str = "http://www.opengis.net/def/property/OGC/0/SamplingTime";

    /// Element count - definition of a `DataArray` element count.
    pub const ELEMENT_COUNT: &str = "http://www.opengis.net/def/property/OGC/0/ElementCount";

    /// Sensor location - conventional definition of a location `Vector`.
    pub const SENSOR_LOCATION: &str = "http://www.opengis.net/def/property/OGC/0/SensorLocation";
}

// =============================================================================
// UNITS OF MEASURE
// =============================================================================

/// Well-known unit URIs.
pub mod units {
    /// ISO 8601 calendar time - default unit of a `Time` component.
    pub const ISO_8601_GREGORIAN: &str = "http://www.opengis.net/def/uom/ISO-8601/0/Gregorian";
}

// =============================================================================
// REFERENCE FRAMES
// =============================================================================

/// Well-known temporal and spatial reference frames.
pub mod frames {
    /// Coordinated Universal Time - default local frame of a `Time` component.
    pub const UTC: &str = "http://www.opengis.net/def/trs/BIPM/0/UTC";

    /// WGS 84 geographic 3D (lat, lon, ellipsoidal height).
    pub const WGS84_3D: &str = "http://www.opengis.net/def/crs/EPSG/0/4979";
}

/// Name given to the element count of every `DataArray`.
pub const ELEMENT_COUNT_NAME: &str = "elementCount";

/// Label given to the element count of every `DataArray`.
pub const ELEMENT_COUNT_LABEL: &str = "Element Count";
