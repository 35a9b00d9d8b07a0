use serde::Deserialize;

use application::transfer::{CreateBookingDto, GetBookingDto, UpdateBookingDto};

use crate::auth::AuthorizedUser;
use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    room_id: i32,
}

pub struct Transformer;

impl Intake<AuthorizedUser> for Transformer {
    type To = GetBookingDto;
    fn emit(&self, input: AuthorizedUser) -> Self::To {
        GetBookingDto { user_id: input.0 }
    }
}

impl Intake<(AuthorizedUser, BookingRequest)> for Transformer {
    type To = CreateBookingDto;
    fn emit(&self, input: (AuthorizedUser, BookingRequest)) -> Self::To {
        let (user, req) = input;
        CreateBookingDto {
            user_id: user.0,
            room_id: req.room_id,
        }
    }
}

impl Intake<(AuthorizedUser, i32, BookingRequest)> for Transformer {
    type To = UpdateBookingDto;
    fn emit(&self, input: (AuthorizedUser, i32, BookingRequest)) -> Self::To {
        let (user, booking_id, req) = input;
        UpdateBookingDto {
            user_id: user.0,
            booking_id,
            room_id: req.room_id,
        }
    }
}
