use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Ticket, TicketId, TicketType, TicketTypeId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait TicketTypeQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<TicketType>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &TicketTypeId,
    ) -> error_stack::Result<Option<TicketType>, KernelError>;
}

pub trait DependOnTicketTypeQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type TicketTypeQuery: TicketTypeQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn ticket_type_query(&self) -> &Self::TicketTypeQuery;
}

/// Tickets are always returned joined with their type and enrollment.
#[async_trait::async_trait]
pub trait TicketQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &TicketId,
    ) -> error_stack::Result<Option<Ticket>, KernelError>;
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Ticket>, KernelError>;
}

pub trait DependOnTicketQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type TicketQuery: TicketQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn ticket_query(&self) -> &Self::TicketQuery;
}
