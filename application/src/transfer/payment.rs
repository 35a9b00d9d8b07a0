use kernel::prelude::entity::{DestructPayment, Payment};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaymentDto {
    pub id: i32,
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Payment> for PaymentDto {
    fn from(value: Payment) -> Self {
        let DestructPayment {
            id,
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            ticket_id: ticket_id.into(),
            value: value.into(),
            card_issuer: card_issuer.into(),
            card_last_digits: card_last_digits.into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetPaymentDto {
    pub user_id: i32,
    pub ticket_id: i32,
}

/// Card details as submitted, only issuer and number are kept.
pub struct CardDto {
    pub issuer: String,
    pub number: String,
}

impl std::fmt::Debug for CardDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDto")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct ProcessPaymentDto {
    pub user_id: i32,
    pub ticket_id: i32,
    pub card: CardDto,
}
