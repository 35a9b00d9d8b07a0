use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BookingId, NewBooking, RoomId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError>;
    async fn update_room(
        &self,
        con: &mut Self::Transaction,
        id: &BookingId,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingModifier: BookingModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
