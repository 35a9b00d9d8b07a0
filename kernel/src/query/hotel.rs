use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Hotel, HotelId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait HotelQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Hotel>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &HotelId,
    ) -> error_stack::Result<Option<Hotel>, KernelError>;
}

pub trait DependOnHotelQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type HotelQuery: HotelQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn hotel_query(&self) -> &Self::HotelQuery;
}
