use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnPaymentQuery, DependOnTicketQuery, PaymentQuery, TicketQuery,
};
use kernel::interface::update::{
    DependOnPaymentModifier, DependOnTicketModifier, PaymentModifier, TicketModifier,
};
use kernel::prelude::entity::{
    CardIssuer, CardLastDigits, NewPayment, PaymentValue, TicketId, UserId,
};
use kernel::prelude::policy;
use kernel::KernelError;

use crate::transfer::{GetPaymentDto, PaymentDto, ProcessPaymentDto};

#[async_trait::async_trait]
pub trait GetPaymentService: 'static + Sync + Send + DependOnTicketQuery + DependOnPaymentQuery {
    #[tracing::instrument(skip(self))]
    async fn get_payment(&self, dto: GetPaymentDto) -> error_stack::Result<PaymentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let ticket_id = TicketId::new(dto.ticket_id);
        let ticket = self
            .ticket_query()
            .find_by_id(&mut connection, &ticket_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Ticket {} not found", dto.ticket_id))
            })?;
        policy::ensure_ticket_owner(&ticket, &UserId::new(dto.user_id))?;

        let payment = self
            .payment_query()
            .find_by_ticket_id(&mut connection, &ticket_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Ticket {} has no payment", dto.ticket_id))
            })?;

        Ok(PaymentDto::from(payment))
    }
}

impl<T> GetPaymentService for T where T: DependOnTicketQuery + DependOnPaymentQuery {}

#[async_trait::async_trait]
pub trait ProcessPaymentService:
    'static + Sync + Send + DependOnTicketQuery + DependOnPaymentModifier + DependOnTicketModifier
{
    /// Charges the ticket price and marks the ticket paid in one unit of work.
    #[tracing::instrument(skip(self))]
    async fn process_payment(
        &self,
        dto: ProcessPaymentDto,
    ) -> error_stack::Result<PaymentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let ticket_id = TicketId::new(dto.ticket_id);
        let ticket = self
            .ticket_query()
            .find_by_id(&mut connection, &ticket_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Ticket {} not found", dto.ticket_id))
            })?;
        policy::ensure_ticket_owner(&ticket, &UserId::new(dto.user_id))?;
        policy::ensure_unpaid(&ticket)?;

        let payment = NewPayment::new(
            ticket_id,
            PaymentValue::from(*ticket.ticket_type().price()),
            CardIssuer::new(dto.card.issuer),
            CardLastDigits::from_card_number(&dto.card.number),
        );
        let payment = self
            .payment_modifier()
            .create(&mut connection, &payment)
            .await?;
        self.ticket_modifier()
            .mark_paid(&mut connection, &ticket_id)
            .await?;
        connection.commit().await?;

        tracing::debug!("Ticket {} paid", dto.ticket_id);
        Ok(PaymentDto::from(payment))
    }
}

impl<T> ProcessPaymentService for T where
    T: DependOnTicketQuery + DependOnPaymentModifier + DependOnTicketModifier
{
}
