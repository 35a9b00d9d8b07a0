use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnRoomQuery, DependOnTicketQuery, RoomQuery,
    TicketQuery,
};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{BookingId, NewBooking, RoomId, UserId};
use kernel::prelude::policy;
use kernel::KernelError;

use crate::transfer::{BookingDto, CreateBookingDto, GetBookingDto, UpdateBookingDto};

#[async_trait::async_trait]
pub trait GetBookingService: 'static + Sync + Send + DependOnBookingQuery {
    #[tracing::instrument(skip(self))]
    async fn get_booking(&self, dto: GetBookingDto) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let booking = self
            .booking_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("User has no booking")
            })?;

        Ok(BookingDto::from(booking))
    }
}

impl<T> GetBookingService for T where T: DependOnBookingQuery {}

#[async_trait::async_trait]
pub trait CreateBookingService:
    'static
    + Sync
    + Send
    + DependOnTicketQuery
    + DependOnRoomQuery
    + DependOnBookingQuery
    + DependOnBookingModifier
{
    /// Books a room for the user and returns the new booking id.
    #[tracing::instrument(skip(self))]
    async fn create_booking(&self, dto: CreateBookingDto) -> error_stack::Result<i32, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let ticket = self
            .ticket_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;
        policy::authorize_hotel_booking(ticket)?;

        let room_id = RoomId::new(dto.room_id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &room_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Room {} not found", dto.room_id))
            })?;

        let existing = self
            .booking_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;
        policy::ensure_no_booking(existing.as_ref())?;

        let occupancy = self
            .booking_query()
            .count_by_room_id(&mut connection, room.id())
            .await?;
        policy::ensure_vacancy(&room, &occupancy)?;

        let id = self
            .booking_modifier()
            .create(&mut connection, &NewBooking::new(user_id, room_id))
            .await?;
        connection.commit().await?;

        tracing::debug!("Booked room {} as booking {}", dto.room_id, id.as_ref());
        Ok(id.into())
    }
}

impl<T> CreateBookingService for T where
    T: DependOnTicketQuery + DependOnRoomQuery + DependOnBookingQuery + DependOnBookingModifier
{
}

#[async_trait::async_trait]
pub trait UpdateBookingService:
    'static
    + Sync
    + Send
    + DependOnTicketQuery
    + DependOnRoomQuery
    + DependOnBookingQuery
    + DependOnBookingModifier
{
    /// Moves an existing booking of the user to another room.
    #[tracing::instrument(skip(self))]
    async fn update_booking(
        &self,
        dto: UpdateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let ticket = self
            .ticket_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;
        policy::authorize_hotel_booking(ticket)?;

        let booking_id = BookingId::new(dto.booking_id);
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &booking_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Booking {} not found", dto.booking_id))
            })?;
        policy::ensure_booking_owner(&booking, &user_id)?;

        let room_id = RoomId::new(dto.room_id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &room_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Room {} not found", dto.room_id))
            })?;
        policy::ensure_room_changed(&booking, &room)?;

        let occupancy = self
            .booking_query()
            .count_by_room_id(&mut connection, room.id())
            .await?;
        policy::ensure_vacancy(&room, &occupancy)?;

        self.booking_modifier()
            .update_room(&mut connection, &booking_id, &room_id)
            .await?;
        let updated = self
            .booking_query()
            .find_by_id(&mut connection, &booking_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("Booking {} vanished on update", dto.booking_id))
            })?;
        connection.commit().await?;

        Ok(BookingDto::from(updated))
    }
}

impl<T> UpdateBookingService for T where
    T: DependOnTicketQuery + DependOnRoomQuery + DependOnBookingQuery + DependOnBookingModifier
{
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::TicketStatus;
    use kernel::KernelError;

    use crate::service::memory::MemoryDatabase;
    use crate::service::{CreateBookingService, GetBookingService, UpdateBookingService};
    use crate::transfer::{CreateBookingDto, GetBookingDto, UpdateBookingDto};

    fn create(user_id: i32, room_id: i32) -> CreateBookingDto {
        CreateBookingDto { user_id, room_id }
    }

    fn update(user_id: i32, booking_id: i32, room_id: i32) -> UpdateBookingDto {
        UpdateBookingDto {
            user_id,
            booking_id,
            room_id,
        }
    }

    #[tokio::test]
    async fn books_free_room() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let room = db.room(hotel, 4);

        let booking_id = db.create_booking(create(user, room)).await?;

        let store = db.snapshot();
        assert_eq!(store.bookings.len(), 1);
        assert_eq!(store.bookings[0].id, booking_id);
        assert_eq!(store.bookings[0].room_id, room);
        assert_eq!(store.occupancy(room), 1);

        let found = db.get_booking(GetBookingDto { user_id: user }).await?;
        assert_eq!(found.id, booking_id);
        assert_eq!(found.room.id, room);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_ticket_without_hotel_entitlement() {
        for (is_remote, includes_hotel, status) in [
            (true, true, TicketStatus::Paid),
            (false, false, TicketStatus::Paid),
            (false, true, TicketStatus::Reserved),
        ] {
            let db = MemoryDatabase::default();
            let (user, _) = db.attendee(is_remote, includes_hotel, status);
            let hotel = db.hotel();
            let room = db.room(hotel, 4);

            let result = db.create_booking(create(user, room)).await;
            assert_eq!(
                result.unwrap_err().current_context(),
                &KernelError::Forbidden
            );
            assert!(db.snapshot().bookings.is_empty());
        }
    }

    #[tokio::test]
    async fn user_without_ticket_is_forbidden() {
        let db = MemoryDatabase::default();
        let user = db.user();
        let hotel = db.hotel();
        let room = db.room(hotel, 4);

        let result = db.create_booking(create(user, room)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
    }

    #[tokio::test]
    async fn missing_room_is_not_found() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let room = db.room(hotel, 4);

        let result = db.create_booking(create(user, room + 100)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::NotFound
        );
    }

    #[tokio::test]
    async fn second_booking_is_forbidden() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let room_a = db.room(hotel, 4);
        let room_b = db.room(hotel, 1);
        db.booking(user, room_a);

        let result = db.create_booking(create(user, room_b)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
        assert_eq!(db.snapshot().bookings.len(), 1);
    }

    #[tokio::test]
    async fn full_room_is_forbidden() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let other = db.user();
        let hotel = db.hotel();
        let room = db.room(hotel, 1);
        db.booking(other, room);

        let result = db.create_booking(create(user, room)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
        assert_eq!(db.snapshot().occupancy(room), 1);
    }

    #[tokio::test]
    async fn missing_booking_lookup_is_not_found() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);

        let result = db.get_booking(GetBookingDto { user_id: user }).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::NotFound
        );
    }

    #[tokio::test]
    async fn moves_booking_to_free_room() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let current = db.room(hotel, 4);
        let target = db.room(hotel, 4);
        let booking = db.booking(user, current);

        let updated = db.update_booking(update(user, booking, target)).await?;
        assert_eq!(updated.id, booking);
        assert_eq!(updated.room.id, target);

        let store = db.snapshot();
        assert_eq!(store.occupancy(current), 0);
        assert_eq!(store.occupancy(target), 1);
        Ok(())
    }

    #[tokio::test]
    async fn same_room_update_is_forbidden_even_with_capacity() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let room = db.room(hotel, 10);
        let booking = db.booking(user, room);

        let result = db.update_booking(update(user, booking, room)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
    }

    #[tokio::test]
    async fn update_into_full_room_is_forbidden() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let other = db.user();
        let hotel = db.hotel();
        let current = db.room(hotel, 1);
        let target = db.room(hotel, 1);
        let booking = db.booking(user, current);
        db.booking(other, target);

        let result = db.update_booking(update(user, booking, target)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
        assert_eq!(db.snapshot().occupancy(current), 1);
    }

    #[tokio::test]
    async fn update_checks_ticket_first() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Reserved);
        let hotel = db.hotel();
        let current = db.room(hotel, 4);
        let target = db.room(hotel, 4);
        let booking = db.booking(user, current);

        let result = db.update_booking(update(user, booking, target)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
    }

    #[tokio::test]
    async fn update_of_unknown_booking_or_room_is_not_found() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let hotel = db.hotel();
        let current = db.room(hotel, 4);
        let booking = db.booking(user, current);

        let result = db.update_booking(update(user, booking + 100, current)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::NotFound
        );

        let result = db.update_booking(update(user, booking, current + 100)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::NotFound
        );
    }

    #[tokio::test]
    async fn foreign_booking_cannot_be_moved() {
        let db = MemoryDatabase::default();
        let (user, _) = db.attendee(false, true, TicketStatus::Paid);
        let other = db.user();
        let hotel = db.hotel();
        let current = db.room(hotel, 4);
        let target = db.room(hotel, 4);
        let foreign = db.booking(other, current);

        let result = db.update_booking(update(user, foreign, target)).await;
        assert_eq!(
            result.unwrap_err().current_context(),
            &KernelError::Forbidden
        );
        assert_eq!(db.snapshot().occupancy(current), 1);
        assert_eq!(db.snapshot().occupancy(target), 0);
    }
}
