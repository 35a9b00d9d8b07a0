use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::TicketQuery;
use kernel::interface::update::TicketModifier;
use kernel::prelude::entity::{
    CreatedAt, Enrollment, EnrollmentId, EnrollmentName, IncludesHotel, IsRemote, NewTicket,
    Ticket, TicketId, TicketPrice, TicketStatus, TicketType, TicketTypeId, TicketTypeName,
    UpdatedAt, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresTicketRepository;

#[async_trait::async_trait]
impl TicketQuery for PostgresTicketRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &TicketId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        PgTicketInternal::find_by_id(con, id).await
    }

    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        PgTicketInternal::find_by_user_id(con, user_id).await
    }
}

#[async_trait::async_trait]
impl TicketModifier for PostgresTicketRepository {
    type Transaction = PostgresTransaction;
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        ticket: &NewTicket,
    ) -> error_stack::Result<TicketId, KernelError> {
        PgTicketInternal::create(con, ticket).await
    }

    async fn mark_paid(
        &self,
        con: &mut PostgresTransaction,
        id: &TicketId,
    ) -> error_stack::Result<(), KernelError> {
        PgTicketInternal::mark_paid(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    status: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
    ticket_type_id: i32,
    ticket_type_name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
    ticket_type_created_at: OffsetDateTime,
    ticket_type_updated_at: OffsetDateTime,
    enrollment_id: i32,
    enrollment_name: String,
    user_id: i32,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = Report<KernelError>;
    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let ticket_type = TicketType::new(
            TicketTypeId::new(row.ticket_type_id),
            TicketTypeName::new(row.ticket_type_name),
            TicketPrice::new(row.price),
            IsRemote::new(row.is_remote),
            IncludesHotel::new(row.includes_hotel),
            CreatedAt::new(row.ticket_type_created_at),
            UpdatedAt::new(row.ticket_type_updated_at),
        );
        let enrollment = Enrollment::new(
            EnrollmentId::new(row.enrollment_id),
            EnrollmentName::new(row.enrollment_name),
            UserId::new(row.user_id),
        );
        Ok(Ticket::new(
            TicketId::new(row.id),
            row.status.parse::<TicketStatus>()?,
            ticket_type,
            enrollment,
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        ))
    }
}

pub(in crate::database) struct PgTicketInternal;

impl PgTicketInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &TicketId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        let row = sqlx::query_as::<_, TicketRow>(
            // language=postgresql
            r#"
            SELECT
                t.id, t.status, t.created_at, t.updated_at,
                tt.id AS ticket_type_id, tt.name AS ticket_type_name, tt.price,
                tt.is_remote, tt.includes_hotel,
                tt.created_at AS ticket_type_created_at, tt.updated_at AS ticket_type_updated_at,
                e.id AS enrollment_id, e.name AS enrollment_name, e.user_id
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            JOIN enrollments e ON e.id = t.enrollment_id
            WHERE t.id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Ticket::try_from).transpose()
    }

    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        let row = sqlx::query_as::<_, TicketRow>(
            // language=postgresql
            r#"
            SELECT
                t.id, t.status, t.created_at, t.updated_at,
                tt.id AS ticket_type_id, tt.name AS ticket_type_name, tt.price,
                tt.is_remote, tt.includes_hotel,
                tt.created_at AS ticket_type_created_at, tt.updated_at AS ticket_type_updated_at,
                e.id AS enrollment_id, e.name AS enrollment_name, e.user_id
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            JOIN enrollments e ON e.id = t.enrollment_id
            WHERE e.user_id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Ticket::try_from).transpose()
    }

    async fn create(
        con: &mut PgConnection,
        ticket: &NewTicket,
    ) -> error_stack::Result<TicketId, KernelError> {
        // language=postgresql
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO tickets (enrollment_id, ticket_type_id, status)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(ticket.enrollment_id().as_ref())
        .bind(ticket.ticket_type_id().as_ref())
        .bind(TicketStatus::Reserved.as_str())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(TicketId::new(id))
    }

    async fn mark_paid(con: &mut PgConnection, id: &TicketId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE tickets
            SET status = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(TicketStatus::Paid.as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
