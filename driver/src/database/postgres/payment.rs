use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::PaymentQuery;
use kernel::interface::update::PaymentModifier;
use kernel::prelude::entity::{
    CardIssuer, CardLastDigits, CreatedAt, NewPayment, Payment, PaymentId, PaymentValue, TicketId,
    UpdatedAt,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresPaymentRepository;

#[async_trait::async_trait]
impl PaymentQuery for PostgresPaymentRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_ticket_id(
        &self,
        con: &mut PostgresTransaction,
        ticket_id: &TicketId,
    ) -> error_stack::Result<Option<Payment>, KernelError> {
        PgPaymentInternal::find_by_ticket_id(con, ticket_id).await
    }
}

#[async_trait::async_trait]
impl PaymentModifier for PostgresPaymentRepository {
    type Transaction = PostgresTransaction;
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        payment: &NewPayment,
    ) -> error_stack::Result<Payment, KernelError> {
        PgPaymentInternal::create(con, payment).await
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: i32,
    ticket_id: i32,
    value: i32,
    card_issuer: String,
    card_last_digits: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Payment::new(
            PaymentId::new(row.id),
            TicketId::new(row.ticket_id),
            PaymentValue::new(row.value),
            CardIssuer::new(row.card_issuer),
            CardLastDigits::new(row.card_last_digits),
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgPaymentInternal;

impl PgPaymentInternal {
    async fn find_by_ticket_id(
        con: &mut PgConnection,
        ticket_id: &TicketId,
    ) -> error_stack::Result<Option<Payment>, KernelError> {
        let row = sqlx::query_as::<_, PaymentRow>(
            // language=postgresql
            r#"
            SELECT id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
            FROM payments
            WHERE ticket_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(ticket_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Payment::from))
    }

    async fn create(
        con: &mut PgConnection,
        payment: &NewPayment,
    ) -> error_stack::Result<Payment, KernelError> {
        let row = sqlx::query_as::<_, PaymentRow>(
            // language=postgresql
            r#"
            INSERT INTO payments (ticket_id, value, card_issuer, card_last_digits)
            VALUES ($1, $2, $3, $4)
            RETURNING id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
            "#,
        )
        .bind(payment.ticket_id().as_ref())
        .bind(payment.value().as_ref())
        .bind(payment.card_issuer().as_ref())
        .bind(payment.card_last_digits().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Payment::from(row))
    }
}
