use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::HotelQuery;
use kernel::prelude::entity::{CreatedAt, Hotel, HotelId, HotelImage, HotelName, UpdatedAt};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresHotelRepository;

#[async_trait::async_trait]
impl HotelQuery for PostgresHotelRepository {
    type Transaction = PostgresTransaction;
    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Hotel>, KernelError> {
        PgHotelInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &HotelId,
    ) -> error_stack::Result<Option<Hotel>, KernelError> {
        PgHotelInternal::find_by_id(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel::new(
            HotelId::new(row.id),
            HotelName::new(row.name),
            HotelImage::new(row.image),
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgHotelInternal;

impl PgHotelInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Hotel>, KernelError> {
        let rows = sqlx::query_as::<_, HotelRow>(
            // language=postgresql
            r#"
            SELECT id, name, image, created_at, updated_at
            FROM hotels
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &HotelId,
    ) -> error_stack::Result<Option<Hotel>, KernelError> {
        let row = sqlx::query_as::<_, HotelRow>(
            // language=postgresql
            r#"
            SELECT id, name, image, created_at, updated_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Hotel::from))
    }
}
