use kernel::prelude::entity::{Booking, DestructBooking};

use crate::transfer::RoomDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub room: RoomDto,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id, user_id, room, ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            room: RoomDto::from(room),
        }
    }
}

#[derive(Debug)]
pub struct GetBookingDto {
    pub user_id: i32,
}

#[derive(Debug)]
pub struct CreateBookingDto {
    pub user_id: i32,
    pub room_id: i32,
}

#[derive(Debug)]
pub struct UpdateBookingDto {
    pub user_id: i32,
    pub booking_id: i32,
    pub room_id: i32,
}
