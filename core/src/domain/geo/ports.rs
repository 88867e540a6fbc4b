use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geo::entities::{Coordinates, ResolvedAddress},
};

/// Client trait for the external reverse-geocoding provider
#[cfg_attr(test, mockall::automock)]
pub trait ReverseGeocoder: Send + Sync {
    fn reverse(
        &self,
        at: Coordinates,
    ) -> impl Future<Output = Result<ResolvedAddress, CoreError>> + Send;
}
