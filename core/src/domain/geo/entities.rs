/// Latitude/longitude pair from the map marker or browser geolocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Human-readable address resolved from coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// Full formatted address, written into the location field on confirm.
    pub display_name: String,
    /// City or town, when the geocoder reports one.
    pub locality: Option<String>,
}
