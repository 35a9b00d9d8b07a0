use application::transfer::{GetHotelRoomsDto, GetHotelsDto};

use crate::auth::AuthorizedUser;
use crate::controller::Intake;

pub struct Transformer;

impl Intake<AuthorizedUser> for Transformer {
    type To = GetHotelsDto;
    fn emit(&self, input: AuthorizedUser) -> Self::To {
        GetHotelsDto { user_id: input.0 }
    }
}

impl Intake<(AuthorizedUser, i32)> for Transformer {
    type To = GetHotelRoomsDto;
    fn emit(&self, input: (AuthorizedUser, i32)) -> Self::To {
        let (user, hotel_id) = input;
        GetHotelRoomsDto {
            user_id: user.0,
            hotel_id,
        }
    }
}
