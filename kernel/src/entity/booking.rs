mod id;

pub use self::id::*;
use crate::entity::{CreatedAt, Room, RoomId, UpdatedAt, UserId};
use destructure::Destructure;
use vodca::References;

/// A booking joined with the room it currently occupies.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    user_id: UserId,
    room: Room,
    created_at: CreatedAt<Booking>,
    updated_at: UpdatedAt<Booking>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        user_id: UserId,
        room: Room,
        created_at: CreatedAt<Booking>,
        updated_at: UpdatedAt<Booking>,
    ) -> Self {
        Self {
            id,
            user_id,
            room,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewBooking {
    user_id: UserId,
    room_id: RoomId,
}

impl NewBooking {
    pub fn new(user_id: UserId, room_id: RoomId) -> Self {
        Self { user_id, room_id }
    }
}
