mod card;
mod id;
mod value;

pub use self::{card::*, id::*, value::*};
use crate::entity::{CreatedAt, TicketId, UpdatedAt};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Payment {
    id: PaymentId,
    ticket_id: TicketId,
    value: PaymentValue,
    card_issuer: CardIssuer,
    card_last_digits: CardLastDigits,
    created_at: CreatedAt<Payment>,
    updated_at: UpdatedAt<Payment>,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        ticket_id: TicketId,
        value: PaymentValue,
        card_issuer: CardIssuer,
        card_last_digits: CardLastDigits,
        created_at: CreatedAt<Payment>,
        updated_at: UpdatedAt<Payment>,
    ) -> Self {
        Self {
            id,
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewPayment {
    ticket_id: TicketId,
    value: PaymentValue,
    card_issuer: CardIssuer,
    card_last_digits: CardLastDigits,
}

impl NewPayment {
    pub fn new(
        ticket_id: TicketId,
        value: PaymentValue,
        card_issuer: CardIssuer,
        card_last_digits: CardLastDigits,
    ) -> Self {
        Self {
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
        }
    }
}
