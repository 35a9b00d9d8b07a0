use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Image url shown on the hotel listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct HotelImage(String);

impl HotelImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
