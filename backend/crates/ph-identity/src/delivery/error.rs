use ph_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Delivery gateway rejected message with status {status} {location}")]
    Rejected { status: u16, location: ErrorLocation },
}

impl From<reqwest::Error> for DeliveryError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
