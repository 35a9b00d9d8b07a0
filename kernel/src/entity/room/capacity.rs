use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Maximum number of bookings a room accepts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RoomCapacity(i32);

impl RoomCapacity {
    pub fn new(capacity: impl Into<i32>) -> Self {
        Self(capacity.into())
    }
}

/// Number of bookings currently referencing a room.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Fromln, AsRefln)]
pub struct RoomOccupancy(i64);

impl RoomOccupancy {
    pub fn new(count: impl Into<i64>) -> Self {
        Self(count.into())
    }

    pub fn is_full(&self, capacity: &RoomCapacity) -> bool {
        self.0 >= i64::from(capacity.0)
    }
}
