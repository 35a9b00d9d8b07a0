use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{NewTicket, TicketId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait TicketModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        ticket: &NewTicket,
    ) -> error_stack::Result<TicketId, KernelError>;
    async fn mark_paid(
        &self,
        con: &mut Self::Transaction,
        id: &TicketId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnTicketModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type TicketModifier: TicketModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn ticket_modifier(&self) -> &Self::TicketModifier;
}
