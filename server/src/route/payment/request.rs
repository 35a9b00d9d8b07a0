use serde::Deserialize;

use application::transfer::{CardDto, GetPaymentDto, ProcessPaymentDto};

use crate::auth::AuthorizedUser;
use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentQuery {
    ticket_id: i32,
}

/// Card numbers arrive either as digits or as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardNumber {
    Text(String),
    Digits(u64),
}

impl From<CardNumber> for String {
    fn from(number: CardNumber) -> Self {
        match number {
            CardNumber::Text(text) => text,
            CardNumber::Digits(digits) => digits.to_string(),
        }
    }
}

// name, expirationDate and cvv are sent by clients but never stored.
#[derive(Deserialize)]
pub struct CardDataRequest {
    issuer: String,
    number: CardNumber,
}

impl std::fmt::Debug for CardDataRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDataRequest")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    ticket_id: i32,
    card_data: CardDataRequest,
}

pub struct Transformer;

impl Intake<(AuthorizedUser, GetPaymentQuery)> for Transformer {
    type To = GetPaymentDto;
    fn emit(&self, input: (AuthorizedUser, GetPaymentQuery)) -> Self::To {
        let (user, query) = input;
        GetPaymentDto {
            user_id: user.0,
            ticket_id: query.ticket_id,
        }
    }
}

impl Intake<(AuthorizedUser, ProcessPaymentRequest)> for Transformer {
    type To = ProcessPaymentDto;
    fn emit(&self, input: (AuthorizedUser, ProcessPaymentRequest)) -> Self::To {
        let (user, req) = input;
        ProcessPaymentDto {
            user_id: user.0,
            ticket_id: req.ticket_id,
            card: CardDto {
                issuer: req.card_data.issuer,
                number: req.card_data.number.into(),
            },
        }
    }
}
