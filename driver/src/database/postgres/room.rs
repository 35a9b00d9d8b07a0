use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::RoomQuery;
use kernel::prelude::entity::{
    CreatedAt, HotelId, Room, RoomCapacity, RoomId, RoomName, UpdatedAt,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresRoomRepository;

#[async_trait::async_trait]
impl RoomQuery for PostgresRoomRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        PgRoomInternal::find_by_id(con, id).await
    }

    async fn find_by_hotel_id(
        &self,
        con: &mut PostgresTransaction,
        hotel_id: &HotelId,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        PgRoomInternal::find_by_hotel_id(con, hotel_id).await
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room::new(
            RoomId::new(row.id),
            RoomName::new(row.name),
            RoomCapacity::new(row.capacity),
            HotelId::new(row.hotel_id),
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgRoomInternal;

impl PgRoomInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        let row = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Room::from))
    }

    async fn find_by_hotel_id(
        con: &mut PgConnection,
        hotel_id: &HotelId,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id
            "#,
        )
        .bind(hotel_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Room::from).collect())
    }
}
