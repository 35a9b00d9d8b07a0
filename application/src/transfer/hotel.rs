use kernel::prelude::entity::{DestructHotel, DestructRoom, Hotel, Room};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Hotel> for HotelDto {
    fn from(value: Hotel) -> Self {
        let DestructHotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Room> for RoomDto {
    fn from(value: Room) -> Self {
        let DestructRoom {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            capacity: capacity.into(),
            hotel_id: hotel_id.into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HotelWithRoomsDto {
    pub hotel: HotelDto,
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug)]
pub struct GetHotelsDto {
    pub user_id: i32,
}

#[derive(Debug)]
pub struct GetHotelRoomsDto {
    pub user_id: i32,
    pub hotel_id: i32,
}
