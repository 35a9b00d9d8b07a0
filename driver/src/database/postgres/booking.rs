use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{
    Booking, BookingId, CreatedAt, HotelId, NewBooking, Room, RoomCapacity, RoomId, RoomName,
    RoomOccupancy, UpdatedAt, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for PostgresBookingRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id).await
    }

    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_user_id(con, user_id).await
    }

    async fn count_by_room_id(
        &self,
        con: &mut PostgresTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<RoomOccupancy, KernelError> {
        PgBookingInternal::count_by_room_id(con, room_id).await
    }
}

#[async_trait::async_trait]
impl BookingModifier for PostgresBookingRepository {
    type Transaction = PostgresTransaction;
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError> {
        PgBookingInternal::create(con, booking).await
    }

    async fn update_room(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::update_room(con, id, room_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i32,
    user_id: i32,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
    room_id: i32,
    room_name: String,
    capacity: i32,
    hotel_id: i32,
    room_created_at: OffsetDateTime,
    room_updated_at: OffsetDateTime,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        let room = Room::new(
            RoomId::new(row.room_id),
            RoomName::new(row.room_name),
            RoomCapacity::new(row.capacity),
            HotelId::new(row.hotel_id),
            CreatedAt::new(row.room_created_at),
            UpdatedAt::new(row.room_updated_at),
        );
        Booking::new(
            BookingId::new(row.id),
            UserId::new(row.user_id),
            room,
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT
                b.id, b.user_id, b.created_at, b.updated_at,
                r.id AS room_id, r.name AS room_name, r.capacity, r.hotel_id,
                r.created_at AS room_created_at, r.updated_at AS room_updated_at
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            WHERE b.id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Booking::from))
    }

    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT
                b.id, b.user_id, b.created_at, b.updated_at,
                r.id AS room_id, r.name AS room_name, r.capacity, r.hotel_id,
                r.created_at AS room_created_at, r.updated_at AS room_updated_at
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            WHERE b.user_id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Booking::from))
    }

    async fn count_by_room_id(
        con: &mut PgConnection,
        room_id: &RoomId,
    ) -> error_stack::Result<RoomOccupancy, KernelError> {
        // language=postgresql
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE room_id = $1
            "#,
        )
        .bind(room_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(RoomOccupancy::new(count))
    }

    async fn create(
        con: &mut PgConnection,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError> {
        // language=postgresql
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO bookings (user_id, room_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(booking.user_id().as_ref())
        .bind(booking.room_id().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(BookingId::new(id))
    }

    async fn update_room(
        con: &mut PgConnection,
        id: &BookingId,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE bookings
            SET room_id = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(room_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
