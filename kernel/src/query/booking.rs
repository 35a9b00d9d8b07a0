use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Booking, BookingId, RoomId, RoomOccupancy, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
    async fn count_by_room_id(
        &self,
        con: &mut Self::Transaction,
        room_id: &RoomId,
    ) -> error_stack::Result<RoomOccupancy, KernelError>;
}

pub trait DependOnBookingQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingQuery: BookingQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_query(&self) -> &Self::BookingQuery;
}
