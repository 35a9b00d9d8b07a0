use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

use application::transfer::{HotelDto, HotelWithRoomsDto, RoomDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    id: i32,
    name: String,
    image: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<HotelDto> for HotelResponse {
    fn from(dto: HotelDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            image: dto.image,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<RoomDto> for RoomResponse {
    fn from(dto: RoomDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            capacity: dto.capacity,
            hotel_id: dto.hotel_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    rooms: Vec<RoomResponse>,
}

pub struct Presenter;

impl Exhaust<Vec<HotelDto>> for Presenter {
    type To = Json<Vec<HotelResponse>>;
    fn emit(&self, input: Vec<HotelDto>) -> Self::To {
        Json(input.into_iter().map(HotelResponse::from).collect())
    }
}

impl Exhaust<HotelWithRoomsDto> for Presenter {
    type To = Json<HotelWithRoomsResponse>;
    fn emit(&self, input: HotelWithRoomsDto) -> Self::To {
        Json(HotelWithRoomsResponse {
            hotel: HotelResponse::from(input.hotel),
            rooms: input.rooms.into_iter().map(RoomResponse::from).collect(),
        })
    }
}
