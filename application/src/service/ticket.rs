use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnEnrollmentQuery, DependOnTicketQuery, DependOnTicketTypeQuery, EnrollmentQuery,
    TicketQuery, TicketTypeQuery,
};
use kernel::interface::update::{DependOnTicketModifier, TicketModifier};
use kernel::prelude::entity::{NewTicket, TicketTypeId, UserId};
use kernel::prelude::policy;
use kernel::KernelError;

use crate::transfer::{CreateTicketDto, GetTicketDto, TicketDto, TicketTypeDto};

#[async_trait::async_trait]
pub trait GetTicketTypesService: 'static + Sync + Send + DependOnTicketTypeQuery {
    #[tracing::instrument(skip(self))]
    async fn get_ticket_types(&self) -> error_stack::Result<Vec<TicketTypeDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let types = self.ticket_type_query().find_all(&mut connection).await?;
        Ok(types.into_iter().map(TicketTypeDto::from).collect())
    }
}

impl<T> GetTicketTypesService for T where T: DependOnTicketTypeQuery {}

#[async_trait::async_trait]
pub trait GetTicketService: 'static + Sync + Send + DependOnTicketQuery {
    #[tracing::instrument(skip(self))]
    async fn get_ticket(&self, dto: GetTicketDto) -> error_stack::Result<TicketDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let ticket = self
            .ticket_query()
            .find_by_user_id(&mut connection, &UserId::new(dto.user_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("User has no ticket")
            })?;
        Ok(TicketDto::from(ticket))
    }
}

impl<T> GetTicketService for T where T: DependOnTicketQuery {}

#[async_trait::async_trait]
pub trait CreateTicketService:
    'static
    + Sync
    + Send
    + DependOnEnrollmentQuery
    + DependOnTicketTypeQuery
    + DependOnTicketQuery
    + DependOnTicketModifier
{
    /// Reserves a ticket of the given type for the user's enrollment.
    #[tracing::instrument(skip(self))]
    async fn create_ticket(&self, dto: CreateTicketDto) -> error_stack::Result<TicketDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let enrollment = self
            .enrollment_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("User has no enrollment")
            })?;

        let ticket_type_id = TicketTypeId::new(dto.ticket_type_id);
        self.ticket_type_query()
            .find_by_id(&mut connection, &ticket_type_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Ticket type {} not found", dto.ticket_type_id))
            })?;

        let existing = self
            .ticket_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;
        policy::ensure_no_ticket(existing.as_ref())?;

        let id = self
            .ticket_modifier()
            .create(
                &mut connection,
                &NewTicket::new(*enrollment.id(), ticket_type_id),
            )
            .await?;
        let ticket = self
            .ticket_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("Ticket {} vanished after insert", id.as_ref()))
            })?;
        connection.commit().await?;

        Ok(TicketDto::from(ticket))
    }
}

impl<T> CreateTicketService for T where
    T: DependOnEnrollmentQuery + DependOnTicketTypeQuery + DependOnTicketQuery + DependOnTicketModifier
{
}
