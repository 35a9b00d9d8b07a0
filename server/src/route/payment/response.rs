use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

use application::transfer::PaymentDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    id: i32,
    ticket_id: i32,
    value: i32,
    card_issuer: String,
    card_last_digits: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

pub struct Presenter;

impl Exhaust<PaymentDto> for Presenter {
    type To = Json<PaymentResponse>;
    fn emit(&self, input: PaymentDto) -> Self::To {
        Json(PaymentResponse {
            id: input.id,
            ticket_id: input.ticket_id,
            value: input.value,
            card_issuer: input.card_issuer,
            card_last_digits: input.card_last_digits,
            created_at: input.created_at,
            updated_at: input.updated_at,
        })
    }
}
