use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Attendance happens online, no presence at the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct IsRemote(bool);

impl IsRemote {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct IncludesHotel(bool);

impl IncludesHotel {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
