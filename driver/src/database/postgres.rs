use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnBookingQuery, DependOnEnrollmentQuery, DependOnHotelQuery, DependOnPaymentQuery,
    DependOnRoomQuery, DependOnSessionQuery, DependOnTicketQuery, DependOnTicketTypeQuery,
};
use kernel::interface::update::{
    DependOnBookingModifier, DependOnPaymentModifier, DependOnTicketModifier,
};
use kernel::KernelError;

use crate::error::ConvertError;
use crate::{env, env_or};

pub use self::{
    booking::*, enrollment::*, hotel::*, payment::*, room::*, session::*, ticket::*,
    ticket_type::*,
};

mod booking;
mod enrollment;
mod hotel;
mod payment;
mod room;
mod session;
mod ticket;
mod ticket_type;

const POSTGRES_URL: &str = "POSTGRES_URL";
const POSTGRES_MAX_CONNECTIONS: &str = "POSTGRES_MAX_CONNECTIONS";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

const SERIALIZATION_FAILURE: &str = "40001";
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let max_connections = env_or(POSTGRES_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?;
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await
            .convert_error()?;
        tracing::debug!("Connected to postgres with {max_connections} connections at most");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to apply migrations")
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let mut tx = self.pool.begin().await.convert_error()?;
        // language=postgresql
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .convert_error()?;
        Ok(PostgresTransaction(tx))
    }
}

/// Serializable transaction, rolled back when dropped uncommitted.
pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                Error::Database(database)
                    if matches!(
                        database.code().as_deref(),
                        Some(SERIALIZATION_FAILURE | UNIQUE_VIOLATION)
                    ) =>
                {
                    KernelError::Concurrency
                }
                _ => KernelError::Internal,
            };
            Report::new(error).change_context(context)
        })
    }
}

impl DependOnSessionQuery for PostgresDatabase {
    type SessionQuery = PostgresSessionRepository;
    fn session_query(&self) -> &Self::SessionQuery {
        &PostgresSessionRepository
    }
}

impl DependOnEnrollmentQuery for PostgresDatabase {
    type EnrollmentQuery = PostgresEnrollmentRepository;
    fn enrollment_query(&self) -> &Self::EnrollmentQuery {
        &PostgresEnrollmentRepository
    }
}

impl DependOnTicketTypeQuery for PostgresDatabase {
    type TicketTypeQuery = PostgresTicketTypeRepository;
    fn ticket_type_query(&self) -> &Self::TicketTypeQuery {
        &PostgresTicketTypeRepository
    }
}

impl DependOnTicketQuery for PostgresDatabase {
    type TicketQuery = PostgresTicketRepository;
    fn ticket_query(&self) -> &Self::TicketQuery {
        &PostgresTicketRepository
    }
}

impl DependOnTicketModifier for PostgresDatabase {
    type TicketModifier = PostgresTicketRepository;
    fn ticket_modifier(&self) -> &Self::TicketModifier {
        &PostgresTicketRepository
    }
}

impl DependOnHotelQuery for PostgresDatabase {
    type HotelQuery = PostgresHotelRepository;
    fn hotel_query(&self) -> &Self::HotelQuery {
        &PostgresHotelRepository
    }
}

impl DependOnRoomQuery for PostgresDatabase {
    type RoomQuery = PostgresRoomRepository;
    fn room_query(&self) -> &Self::RoomQuery {
        &PostgresRoomRepository
    }
}

impl DependOnBookingQuery for PostgresDatabase {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &PostgresBookingRepository
    }
}

impl DependOnBookingModifier for PostgresDatabase {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &PostgresBookingRepository
    }
}

impl DependOnPaymentQuery for PostgresDatabase {
    type PaymentQuery = PostgresPaymentRepository;
    fn payment_query(&self) -> &Self::PaymentQuery {
        &PostgresPaymentRepository
    }
}

impl DependOnPaymentModifier for PostgresDatabase {
    type PaymentModifier = PostgresPaymentRepository;
    fn payment_modifier(&self) -> &Self::PaymentModifier {
        &PostgresPaymentRepository
    }
}

#[cfg(test)]
pub(in crate::database) mod test {
    use error_stack::ResultExt;
    use rand::Rng;
    use sqlx::PgConnection;

    use kernel::KernelError;

    use super::PostgresDatabase;

    pub async fn database() -> error_stack::Result<PostgresDatabase, KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        Ok(db)
    }

    fn unique(prefix: &str) -> String {
        let suffix: u64 = rand::thread_rng().gen();
        format!("{prefix}-{suffix:x}")
    }

    /// Inserts a user with a session, returning `(user_id, token)`.
    pub async fn user(con: &mut PgConnection) -> error_stack::Result<(i32, String), KernelError> {
        let token = unique("token");
        // language=postgresql
        let (user_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, 'secret')
            RETURNING id
            "#,
        )
        .bind(unique("user"))
        .fetch_one(&mut *con)
        .await
        .change_context_lazy(|| KernelError::Internal)?;
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO sessions (user_id, token)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(&token)
        .execute(&mut *con)
        .await
        .change_context_lazy(|| KernelError::Internal)?;
        Ok((user_id, token))
    }

    pub async fn enrollment(
        con: &mut PgConnection,
        user_id: i32,
    ) -> error_stack::Result<i32, KernelError> {
        // language=postgresql
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO enrollments (name, user_id)
            VALUES ('attendee', $1)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .fetch_one(con)
        .await
        .change_context_lazy(|| KernelError::Internal)?;
        Ok(id)
    }

    pub async fn ticket_type(
        con: &mut PgConnection,
        is_remote: bool,
        includes_hotel: bool,
    ) -> error_stack::Result<i32, KernelError> {
        // language=postgresql
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO ticket_types (name, price, is_remote, includes_hotel)
            VALUES ($1, 600, $2, $3)
            RETURNING id
            "#,
        )
        .bind(unique("type"))
        .bind(is_remote)
        .bind(includes_hotel)
        .fetch_one(con)
        .await
        .change_context_lazy(|| KernelError::Internal)?;
        Ok(id)
    }

    pub async fn hotel(con: &mut PgConnection) -> error_stack::Result<i32, KernelError> {
        // language=postgresql
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO hotels (name, image)
            VALUES ($1, 'https://images.test/hotel.png')
            RETURNING id
            "#,
        )
        .bind(unique("hotel"))
        .fetch_one(con)
        .await
        .change_context_lazy(|| KernelError::Internal)?;
        Ok(id)
    }

    pub async fn room(
        con: &mut PgConnection,
        hotel_id: i32,
        capacity: i32,
    ) -> error_stack::Result<i32, KernelError> {
        // language=postgresql
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO rooms (name, capacity, hotel_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(unique("room"))
        .bind(capacity)
        .bind(hotel_id)
        .fetch_one(con)
        .await
        .change_context_lazy(|| KernelError::Internal)?;
        Ok(id)
    }
}
