use serde::Deserialize;

use application::transfer::{CreateTicketDto, GetTicketDto};

use crate::auth::AuthorizedUser;
use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    ticket_type_id: i32,
}

pub struct Transformer;

impl Intake<AuthorizedUser> for Transformer {
    type To = GetTicketDto;
    fn emit(&self, input: AuthorizedUser) -> Self::To {
        GetTicketDto { user_id: input.0 }
    }
}

impl Intake<(AuthorizedUser, CreateTicketRequest)> for Transformer {
    type To = CreateTicketDto;
    fn emit(&self, input: (AuthorizedUser, CreateTicketRequest)) -> Self::To {
        let (user, req) = input;
        CreateTicketDto {
            user_id: user.0,
            ticket_type_id: req.ticket_type_id,
        }
    }
}
