use axum::Json;
use serde::Serialize;

use application::transfer::BookingDto;

use crate::controller::Exhaust;
use crate::route::hotel::RoomResponse;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    id: i32,
    #[serde(rename = "Room")]
    room: RoomResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    booking_id: i32,
}

pub struct Presenter;

impl Exhaust<BookingDto> for Presenter {
    type To = Json<BookingResponse>;
    fn emit(&self, input: BookingDto) -> Self::To {
        Json(BookingResponse {
            id: input.id,
            room: RoomResponse::from(input.room),
        })
    }
}

impl Exhaust<i32> for Presenter {
    type To = Json<BookingIdResponse>;
    fn emit(&self, input: i32) -> Self::To {
        Json(BookingIdResponse { booking_id: input })
    }
}
