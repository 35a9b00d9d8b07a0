use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::TicketTypeQuery;
use kernel::prelude::entity::{
    CreatedAt, IncludesHotel, IsRemote, TicketPrice, TicketType, TicketTypeId, TicketTypeName,
    UpdatedAt,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresTicketTypeRepository;

#[async_trait::async_trait]
impl TicketTypeQuery for PostgresTicketTypeRepository {
    type Transaction = PostgresTransaction;
    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<TicketType>, KernelError> {
        PgTicketTypeInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &TicketTypeId,
    ) -> error_stack::Result<Option<TicketType>, KernelError> {
        PgTicketTypeInternal::find_by_id(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct TicketTypeRow {
    id: i32,
    name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        TicketType::new(
            TicketTypeId::new(row.id),
            TicketTypeName::new(row.name),
            TicketPrice::new(row.price),
            IsRemote::new(row.is_remote),
            IncludesHotel::new(row.includes_hotel),
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgTicketTypeInternal;

impl PgTicketTypeInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<TicketType>, KernelError> {
        let rows = sqlx::query_as::<_, TicketTypeRow>(
            // language=postgresql
            r#"
            SELECT id, name, price, is_remote, includes_hotel, created_at, updated_at
            FROM ticket_types
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(TicketType::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &TicketTypeId,
    ) -> error_stack::Result<Option<TicketType>, KernelError> {
        let row = sqlx::query_as::<_, TicketTypeRow>(
            // language=postgresql
            r#"
            SELECT id, name, price, is_remote, includes_hotel, created_at, updated_at
            FROM ticket_types
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(TicketType::from))
    }
}
