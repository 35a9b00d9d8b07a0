use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Payment, TicketId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PaymentQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_ticket_id(
        &self,
        con: &mut Self::Transaction,
        ticket_id: &TicketId,
    ) -> error_stack::Result<Option<Payment>, KernelError>;
}

pub trait DependOnPaymentQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type PaymentQuery: PaymentQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn payment_query(&self) -> &Self::PaymentQuery;
}
