mod capacity;
mod id;
mod name;

pub use self::{capacity::*, id::*, name::*};
use crate::entity::{CreatedAt, HotelId, UpdatedAt};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Room {
    id: RoomId,
    name: RoomName,
    capacity: RoomCapacity,
    hotel_id: HotelId,
    created_at: CreatedAt<Room>,
    updated_at: UpdatedAt<Room>,
}

impl Room {
    pub fn new(
        id: RoomId,
        name: RoomName,
        capacity: RoomCapacity,
        hotel_id: HotelId,
        created_at: CreatedAt<Room>,
        updated_at: UpdatedAt<Room>,
    ) -> Self {
        Self {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}
