pub mod nominatim_client;

pub use nominatim_client::*;
