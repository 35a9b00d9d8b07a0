use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{HotelId, Room, RoomId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError>;
    async fn find_by_hotel_id(
        &self,
        con: &mut Self::Transaction,
        hotel_id: &HotelId,
    ) -> error_stack::Result<Vec<Room>, KernelError>;
}

pub trait DependOnRoomQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomQuery: RoomQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn room_query(&self) -> &Self::RoomQuery;
}
