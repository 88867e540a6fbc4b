use crate::domain::geo::{
    entities::{Coordinates, ResolvedAddress},
    ports::ReverseGeocoder,
};

/// Default marker position until geolocation kicks in (central London).
pub const DEFAULT_POSITION: Coordinates = Coordinates {
    lat: 51.505,
    lon: -0.09,
};

const CONFIRM_RETRY_LABEL: &str = "Confirm Location";
const FETCHING_LABEL: &str = "Fetching address...";

/// Map-picker overlay controller. Tile rendering and geolocation stay in the
/// browser; this owns the marker position, the resolved address, and the
/// confirm-button state.
pub struct MapPicker<G>
where
    G: ReverseGeocoder,
{
    geocoder: G,
    marker: Coordinates,
    resolved: Option<ResolvedAddress>,
    confirm_label: String,
}

impl<G> MapPicker<G>
where
    G: ReverseGeocoder,
{
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            marker: DEFAULT_POSITION,
            resolved: None,
            confirm_label: CONFIRM_RETRY_LABEL.to_string(),
        }
    }

    pub fn marker(&self) -> Coordinates {
        self.marker
    }

    pub fn confirm_label(&self) -> &str {
        &self.confirm_label
    }

    /// Marker drag/drop: move the marker and look up the address under it.
    pub async fn marker_dropped(&mut self, at: Coordinates) {
        self.marker = at;
        self.lookup(at).await;
    }

    /// "Use my current location": recenter on the browser-reported position
    /// and run the same lookup as a marker drop.
    pub async fn use_current_location(&mut self, position: Coordinates) {
        self.marker_dropped(position).await;
    }

    /// The address written into the location field on confirm. Inert until a
    /// lookup has succeeded at least once.
    pub fn confirm(&self) -> Option<&str> {
        self.resolved
            .as_ref()
            .map(|address| address.display_name.as_str())
    }

    async fn lookup(&mut self, at: Coordinates) {
        self.confirm_label = FETCHING_LABEL.to_string();

        match self.geocoder.reverse(at).await {
            Ok(address) => {
                self.confirm_label = format!(
                    "Confirm: {}",
                    address.locality.as_deref().unwrap_or("Selected Location")
                );
                self.resolved = Some(address);
            }
            Err(error) => {
                // Degrade to the generic retry label; a previously resolved
                // address stays confirmable.
                tracing::warn!("Reverse geocoding failed: {}", error);
                self.confirm_label = CONFIRM_RETRY_LABEL.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::geo::ports::MockReverseGeocoder;

    fn westminster() -> ResolvedAddress {
        ResolvedAddress {
            display_name: "Westminster Bridge, London, United Kingdom".to_string(),
            locality: Some("London".to_string()),
        }
    }

    #[test]
    fn test_confirm_is_inert_before_any_lookup() {
        let picker = MapPicker::new(MockReverseGeocoder::new());
        assert!(picker.confirm().is_none());
        assert_eq!(picker.confirm_label(), "Confirm Location");
        assert_eq!(picker.marker(), DEFAULT_POSITION);
    }

    #[tokio::test]
    async fn test_marker_drop_resolves_address() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .times(1)
            .returning(|_| Box::pin(async { Ok(westminster()) }));

        let mut picker = MapPicker::new(geocoder);
        picker
            .marker_dropped(Coordinates { lat: 51.5007, lon: -0.1246 })
            .await;

        assert_eq!(picker.confirm_label(), "Confirm: London");
        assert_eq!(
            picker.confirm(),
            Some("Westminster Bridge, London, United Kingdom")
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_previous_address() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .times(1)
            .returning(|_| Box::pin(async { Ok(westminster()) }));
        geocoder.expect_reverse().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let mut picker = MapPicker::new(geocoder);
        picker
            .marker_dropped(Coordinates { lat: 51.5007, lon: -0.1246 })
            .await;
        picker
            .marker_dropped(Coordinates { lat: 48.8584, lon: 2.2945 })
            .await;

        assert_eq!(picker.confirm_label(), "Confirm Location");
        assert_eq!(
            picker.confirm(),
            Some("Westminster Bridge, London, United Kingdom")
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_without_address_stays_inert() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder.expect_reverse().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let mut picker = MapPicker::new(geocoder);
        picker.marker_dropped(DEFAULT_POSITION).await;

        assert!(picker.confirm().is_none());
    }

    #[tokio::test]
    async fn test_missing_locality_falls_back_to_generic_label() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder.expect_reverse().returning(|_| {
            Box::pin(async {
                Ok(ResolvedAddress {
                    display_name: "Middle of the North Sea".to_string(),
                    locality: None,
                })
            })
        });

        let mut picker = MapPicker::new(geocoder);
        picker.marker_dropped(DEFAULT_POSITION).await;

        assert_eq!(picker.confirm_label(), "Confirm: Selected Location");
    }

    #[tokio::test]
    async fn test_use_current_location_recenters_marker() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .returning(|_| Box::pin(async { Ok(westminster()) }));

        let mut picker = MapPicker::new(geocoder);
        let here = Coordinates { lat: 51.5007, lon: -0.1246 };
        picker.use_current_location(here).await;

        assert_eq!(picker.marker(), here);
        assert!(picker.confirm().is_some());
    }
}
