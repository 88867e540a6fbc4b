use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geo::{
        entities::{Coordinates, ResolvedAddress},
        ports::ReverseGeocoder,
    },
};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Reverse-geocoding client against the OpenStreetMap Nominatim API.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: String,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
}

impl NominatimClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, at: Coordinates) -> Result<ResolvedAddress, CoreError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.base_url, at.lat, at.lon
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Nominatim request failed: {}", e);
            CoreError::ExternalServiceError(format!("Geocoding error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Nominatim error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Geocoding returned error: {}",
                status
            )));
        }

        let body: NominatimResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse geocoding response: {}", e))
        })?;

        Ok(ResolvedAddress {
            display_name: body.display_name,
            locality: body.address.city.or(body.address.town),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_prefers_city_over_town() {
        let body: NominatimResponse = serde_json::from_str(
            r#"{
                "display_name": "Westminster Bridge, London, United Kingdom",
                "address": { "city": "London", "town": "Lambeth" }
            }"#,
        )
        .unwrap();

        assert_eq!(body.address.city.as_deref(), Some("London"));
    }

    #[test]
    fn test_response_without_address_block_still_parses() {
        let body: NominatimResponse = serde_json::from_str(
            r#"{ "display_name": "Middle of the North Sea" }"#,
        )
        .unwrap();

        assert_eq!(body.display_name, "Middle of the North Sea");
        assert!(body.address.city.is_none());
        assert!(body.address.town.is_none());
    }
}
