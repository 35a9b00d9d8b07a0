use error_stack::Report;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    DependOnHotelQuery, DependOnRoomQuery, DependOnTicketQuery, HotelQuery, RoomQuery,
    TicketQuery,
};
use kernel::prelude::entity::{HotelId, UserId};
use kernel::prelude::policy;
use kernel::KernelError;

use crate::transfer::{GetHotelRoomsDto, GetHotelsDto, HotelDto, HotelWithRoomsDto, RoomDto};

#[async_trait::async_trait]
pub trait GetHotelsService: 'static + Sync + Send + DependOnTicketQuery + DependOnHotelQuery {
    #[tracing::instrument(skip(self))]
    async fn get_hotels(&self, dto: GetHotelsDto) -> error_stack::Result<Vec<HotelDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let ticket = self
            .ticket_query()
            .find_by_user_id(&mut connection, &UserId::new(dto.user_id))
            .await?;
        policy::authorize_hotel_listing(ticket.as_ref())?;

        let hotels = self.hotel_query().find_all(&mut connection).await?;
        Ok(hotels.into_iter().map(HotelDto::from).collect())
    }
}

impl<T> GetHotelsService for T where T: DependOnTicketQuery + DependOnHotelQuery {}

#[async_trait::async_trait]
pub trait GetHotelRoomsService:
    'static + Sync + Send + DependOnTicketQuery + DependOnHotelQuery + DependOnRoomQuery
{
    #[tracing::instrument(skip(self))]
    async fn get_hotel_rooms(
        &self,
        dto: GetHotelRoomsDto,
    ) -> error_stack::Result<HotelWithRoomsDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let ticket = self
            .ticket_query()
            .find_by_user_id(&mut connection, &UserId::new(dto.user_id))
            .await?;
        policy::authorize_hotel_listing(ticket.as_ref())?;

        let hotel_id = HotelId::new(dto.hotel_id);
        let hotel = self
            .hotel_query()
            .find_by_id(&mut connection, &hotel_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Hotel {} not found", dto.hotel_id))
            })?;
        let rooms = self
            .room_query()
            .find_by_hotel_id(&mut connection, &hotel_id)
            .await?;

        Ok(HotelWithRoomsDto {
            hotel: HotelDto::from(hotel),
            rooms: rooms.into_iter().map(RoomDto::from).collect(),
        })
    }
}

impl<T> GetHotelRoomsService for T where
    T: DependOnTicketQuery + DependOnHotelQuery + DependOnRoomQuery
{
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::TicketStatus;
    use kernel::KernelError;

    use crate::service::memory::MemoryDatabase;
    use crate::service::{GetHotelRoomsService, GetHotelsService};
    use crate::transfer::{GetHotelRoomsDto, GetHotelsDto};

    #[tokio::test]
    async fn lists_hotels_for_paid_hotel_ticket() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let first = db.hotel();
        let second = db.hotel();

        let hotels = db.get_hotels(GetHotelsDto { user_id: user }).await?;
        let ids = hotels.iter().map(|hotel| hotel.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn remote_ticket_still_lists_hotels() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(true, true, TicketStatus::Paid);
        db.hotel();

        let hotels = db.get_hotels(GetHotelsDto { user_id: user }).await?;
        assert_eq!(hotels.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unpaid_ticket_requires_payment() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Reserved);
        let hotel = db.hotel();

        let result = db.get_hotels(GetHotelsDto { user_id: user }).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::PaymentRequired
        );
        let result = db
            .get_hotel_rooms(GetHotelRoomsDto {
                user_id: user,
                hotel_id: hotel,
            })
            .await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::PaymentRequired
        );
    }

    #[tokio::test]
    async fn ticket_without_hotel_is_forbidden() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, false, TicketStatus::Paid);
        db.hotel();

        let result = db.get_hotels(GetHotelsDto { user_id: user }).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
    }

    #[tokio::test]
    async fn no_ticket_is_forbidden() {
        let db = MemoryDatabase::default();
        let user = db.user();

        let result = db.get_hotels(GetHotelsDto { user_id: user }).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
    }

    #[tokio::test]
    async fn hotel_comes_with_its_rooms() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let other = db.hotel();
        let single = db.room(hotel, 1);
        let double = db.room(hotel, 2);
        db.room(other, 3);

        let found = db
            .get_hotel_rooms(GetHotelRoomsDto {
                user_id: user,
                hotel_id: hotel,
            })
            .await?;
        assert_eq!(found.hotel.id, hotel);
        let rooms = found.rooms.iter().map(|room| room.id).collect::<Vec<_>>();
        assert_eq!(rooms, vec![single, double]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();

        let result = db
            .get_hotel_rooms(GetHotelRoomsDto {
                user_id: user,
                hotel_id: hotel + 100,
            })
            .await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::NotFound
        );
    }
}
