//! Transactional in-memory store backing the service tests.
//!
//! A transaction works on a private copy of the store and only replaces the shared
//! state on commit, so a failed service call leaves no trace.

use std::sync::{Arc, Mutex};

use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnEnrollmentQuery, DependOnHotelQuery,
    DependOnPaymentQuery, DependOnRoomQuery, DependOnSessionQuery, DependOnTicketQuery,
    DependOnTicketTypeQuery, EnrollmentQuery, HotelQuery, PaymentQuery, RoomQuery, SessionQuery,
    TicketQuery, TicketTypeQuery,
};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnPaymentModifier, DependOnTicketModifier,
    PaymentModifier, TicketModifier,
};
use kernel::prelude::entity::{
    Booking, BookingId, CardIssuer, CardLastDigits, CreatedAt, Enrollment, EnrollmentId,
    EnrollmentName, Hotel, HotelId, HotelImage, HotelName, IncludesHotel, IsRemote, NewBooking,
    NewPayment, NewTicket, Payment, PaymentId, PaymentValue, Room, RoomCapacity, RoomId,
    RoomName, RoomOccupancy, Session, SessionToken, Ticket, TicketId, TicketPrice, TicketStatus,
    TicketType, TicketTypeId, TicketTypeName, UpdatedAt, UserId,
};
use kernel::KernelError;

#[derive(Debug, Clone)]
pub struct SessionRow {
    pub token: String,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct EnrollmentRow {
    pub id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct TicketTypeRow {
    pub id: i32,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone)]
pub struct TicketRow {
    pub id: i32,
    pub enrollment_id: i32,
    pub ticket_type_id: i32,
    pub status: TicketStatus,
}

#[derive(Debug, Clone)]
pub struct PaymentRow {
    pub id: i32,
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
}

#[derive(Debug, Clone)]
pub struct RoomRow {
    pub id: i32,
    pub hotel_id: i32,
    pub capacity: i32,
}

#[derive(Debug, Clone)]
pub struct BookingRow {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: Vec<i32>,
    pub sessions: Vec<SessionRow>,
    pub enrollments: Vec<EnrollmentRow>,
    pub ticket_types: Vec<TicketTypeRow>,
    pub tickets: Vec<TicketRow>,
    pub payments: Vec<PaymentRow>,
    pub hotels: Vec<i32>,
    pub rooms: Vec<RoomRow>,
    pub bookings: Vec<BookingRow>,
    sequence: i32,
}

impl Store {
    fn next_id(&mut self) -> i32 {
        self.sequence += 1;
        self.sequence
    }

    pub fn occupancy(&self, room_id: i32) -> usize {
        self.bookings
            .iter()
            .filter(|booking| booking.room_id == room_id)
            .count()
    }

    pub fn ticket_row(&self, id: i32) -> Option<&TicketRow> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    fn enrollment(&self, id: i32) -> Option<Enrollment> {
        self.enrollments
            .iter()
            .find(|row| row.id == id)
            .map(|row| {
                Enrollment::new(
                    EnrollmentId::new(row.id),
                    EnrollmentName::new(format!("attendee {}", row.user_id)),
                    UserId::new(row.user_id),
                )
            })
    }

    fn ticket_type(&self, id: i32) -> Option<TicketType> {
        self.ticket_types
            .iter()
            .find(|row| row.id == id)
            .map(|row| {
                TicketType::new(
                    TicketTypeId::new(row.id),
                    TicketTypeName::new(format!("type {}", row.id)),
                    TicketPrice::new(row.price),
                    IsRemote::new(row.is_remote),
                    IncludesHotel::new(row.includes_hotel),
                    CreatedAt::new(OffsetDateTime::UNIX_EPOCH),
                    UpdatedAt::new(OffsetDateTime::UNIX_EPOCH),
                )
            })
    }

    fn ticket(&self, row: &TicketRow) -> Option<Ticket> {
        Some(Ticket::new(
            TicketId::new(row.id),
            row.status,
            self.ticket_type(row.ticket_type_id)?,
            self.enrollment(row.enrollment_id)?,
            CreatedAt::new(OffsetDateTime::UNIX_EPOCH),
            UpdatedAt::new(OffsetDateTime::UNIX_EPOCH),
        ))
    }

    fn hotel(&self, id: i32) -> Option<Hotel> {
        self.hotels.iter().find(|hotel| **hotel == id).map(|id| {
            Hotel::new(
                HotelId::new(*id),
                HotelName::new(format!("hotel {id}")),
                HotelImage::new(format!("https://images.test/{id}.png")),
                CreatedAt::new(OffsetDateTime::UNIX_EPOCH),
                UpdatedAt::new(OffsetDateTime::UNIX_EPOCH),
            )
        })
    }

    fn room(&self, row: &RoomRow) -> Room {
        Room::new(
            RoomId::new(row.id),
            RoomName::new(format!("room {}", row.id)),
            RoomCapacity::new(row.capacity),
            HotelId::new(row.hotel_id),
            CreatedAt::new(OffsetDateTime::UNIX_EPOCH),
            UpdatedAt::new(OffsetDateTime::UNIX_EPOCH),
        )
    }

    fn booking(&self, row: &BookingRow) -> Option<Booking> {
        let room = self.rooms.iter().find(|room| room.id == row.room_id)?;
        Some(Booking::new(
            BookingId::new(row.id),
            UserId::new(row.user_id),
            self.room(room),
            CreatedAt::new(OffsetDateTime::UNIX_EPOCH),
            UpdatedAt::new(OffsetDateTime::UNIX_EPOCH),
        ))
    }

    fn payment(&self, row: &PaymentRow) -> Payment {
        Payment::new(
            PaymentId::new(row.id),
            TicketId::new(row.ticket_id),
            PaymentValue::new(row.value),
            CardIssuer::new(row.card_issuer.clone()),
            CardLastDigits::new(row.card_last_digits.clone()),
            CreatedAt::new(OffsetDateTime::UNIX_EPOCH),
            UpdatedAt::new(OffsetDateTime::UNIX_EPOCH),
        )
    }
}

pub struct MemoryTransaction {
    shared: Arc<Mutex<Store>>,
    working: Store,
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.shared.lock().unwrap() = self.working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryRepository;

#[derive(Default)]
pub struct MemoryDatabase {
    store: Arc<Mutex<Store>>,
    repository: MemoryRepository,
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let working = self.store.lock().unwrap().clone();
        Ok(MemoryTransaction {
            shared: Arc::clone(&self.store),
            working,
        })
    }
}

// Fixtures. Every id comes from one sequence, so ids never collide across tables.
impl MemoryDatabase {
    fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.store.lock().unwrap())
    }

    pub fn snapshot(&self) -> Store {
        self.store.lock().unwrap().clone()
    }

    pub fn user(&self) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.users.push(id);
            id
        })
    }

    /// Signed-in user holding `token`.
    pub fn session(&self, token: &str) -> i32 {
        let user_id = self.user();
        self.write(|store| {
            store.sessions.push(SessionRow {
                token: token.to_string(),
                user_id,
            })
        });
        user_id
    }

    pub fn enrollment(&self, user_id: i32) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.enrollments.push(EnrollmentRow { id, user_id });
            id
        })
    }

    pub fn ticket_type(&self, is_remote: bool, includes_hotel: bool, price: i32) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.ticket_types.push(TicketTypeRow {
                id,
                price,
                is_remote,
                includes_hotel,
            });
            id
        })
    }

    pub fn ticket(&self, enrollment_id: i32, ticket_type_id: i32, status: TicketStatus) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.tickets.push(TicketRow {
                id,
                enrollment_id,
                ticket_type_id,
                status,
            });
            id
        })
    }

    /// Enrolled user with a single ticket, returns `(user, ticket)`.
    pub fn attendee(&self, is_remote: bool, includes_hotel: bool, status: TicketStatus) -> (i32, i32) {
        let user_id = self.user();
        let enrollment_id = self.enrollment(user_id);
        let ticket_type_id = self.ticket_type(is_remote, includes_hotel, 250);
        let ticket_id = self.ticket(enrollment_id, ticket_type_id, status);
        (user_id, ticket_id)
    }

    pub fn hotel(&self) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.hotels.push(id);
            id
        })
    }

    pub fn room(&self, hotel_id: i32, capacity: i32) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.rooms.push(RoomRow {
                id,
                hotel_id,
                capacity,
            });
            id
        })
    }

    pub fn booking(&self, user_id: i32, room_id: i32) -> i32 {
        self.write(|store| {
            let id = store.next_id();
            store.bookings.push(BookingRow {
                id,
                user_id,
                room_id,
            });
            id
        })
    }
}

#[async_trait::async_trait]
impl SessionQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_by_token(
        &self,
        con: &mut MemoryTransaction,
        token: &SessionToken,
    ) -> error_stack::Result<Option<Session>, KernelError> {
        let token = String::from(token.clone());
        Ok(con
            .working
            .sessions
            .iter()
            .find(|session| session.token == token)
            .map(|session| {
                Session::new(
                    SessionToken::new(session.token.clone()),
                    UserId::new(session.user_id),
                )
            }))
    }
}

#[async_trait::async_trait]
impl EnrollmentQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_by_user_id(
        &self,
        con: &mut MemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError> {
        let user_id = i32::from(*user_id);
        let store = &con.working;
        Ok(store
            .enrollments
            .iter()
            .find(|row| row.user_id == user_id)
            .and_then(|row| store.enrollment(row.id)))
    }
}

#[async_trait::async_trait]
impl TicketTypeQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<TicketType>, KernelError> {
        let store = &con.working;
        Ok(store
            .ticket_types
            .iter()
            .filter_map(|row| store.ticket_type(row.id))
            .collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &TicketTypeId,
    ) -> error_stack::Result<Option<TicketType>, KernelError> {
        Ok(con.working.ticket_type(i32::from(*id)))
    }
}

#[async_trait::async_trait]
impl TicketQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &TicketId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        let store = &con.working;
        Ok(store
            .ticket_row(i32::from(*id))
            .and_then(|row| store.ticket(row)))
    }

    async fn find_by_user_id(
        &self,
        con: &mut MemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        let user_id = i32::from(*user_id);
        let store = &con.working;
        let Some(enrollment) = store.enrollments.iter().find(|row| row.user_id == user_id) else {
            return Ok(None);
        };
        Ok(store
            .tickets
            .iter()
            .find(|row| row.enrollment_id == enrollment.id)
            .and_then(|row| store.ticket(row)))
    }
}

#[async_trait::async_trait]
impl HotelQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Hotel>, KernelError> {
        let store = &con.working;
        Ok(store
            .hotels
            .iter()
            .filter_map(|id| store.hotel(*id))
            .collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &HotelId,
    ) -> error_stack::Result<Option<Hotel>, KernelError> {
        Ok(con.working.hotel(i32::from(*id)))
    }
}

#[async_trait::async_trait]
impl RoomQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        let id = i32::from(*id);
        let store = &con.working;
        Ok(store
            .rooms
            .iter()
            .find(|row| row.id == id)
            .map(|row| store.room(row)))
    }

    async fn find_by_hotel_id(
        &self,
        con: &mut MemoryTransaction,
        hotel_id: &HotelId,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        let hotel_id = i32::from(*hotel_id);
        let store = &con.working;
        Ok(store
            .rooms
            .iter()
            .filter(|row| row.hotel_id == hotel_id)
            .map(|row| store.room(row))
            .collect())
    }
}

#[async_trait::async_trait]
impl BookingQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let id = i32::from(*id);
        let store = &con.working;
        Ok(store
            .bookings
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| store.booking(row)))
    }

    async fn find_by_user_id(
        &self,
        con: &mut MemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let user_id = i32::from(*user_id);
        let store = &con.working;
        Ok(store
            .bookings
            .iter()
            .find(|row| row.user_id == user_id)
            .and_then(|row| store.booking(row)))
    }

    async fn count_by_room_id(
        &self,
        con: &mut MemoryTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<RoomOccupancy, KernelError> {
        let count = con.working.occupancy(i32::from(*room_id));
        Ok(RoomOccupancy::new(count as i64))
    }
}

#[async_trait::async_trait]
impl PaymentQuery for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn find_by_ticket_id(
        &self,
        con: &mut MemoryTransaction,
        ticket_id: &TicketId,
    ) -> error_stack::Result<Option<Payment>, KernelError> {
        let ticket_id = i32::from(*ticket_id);
        let store = &con.working;
        Ok(store
            .payments
            .iter()
            .find(|row| row.ticket_id == ticket_id)
            .map(|row| store.payment(row)))
    }
}

#[async_trait::async_trait]
impl BookingModifier for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError> {
        let store = &mut con.working;
        let user_id = i32::from(*booking.user_id());
        if store.bookings.iter().any(|row| row.user_id == user_id) {
            return Err(error_stack::Report::new(KernelError::Concurrency)
                .attach_printable("bookings.user_id unique violation"));
        }
        let id = store.next_id();
        store.bookings.push(BookingRow {
            id,
            user_id,
            room_id: i32::from(*booking.room_id()),
        });
        Ok(BookingId::new(id))
    }

    async fn update_room(
        &self,
        con: &mut MemoryTransaction,
        id: &BookingId,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        let id = i32::from(*id);
        if let Some(row) = con.working.bookings.iter_mut().find(|row| row.id == id) {
            row.room_id = i32::from(*room_id);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TicketModifier for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        ticket: &NewTicket,
    ) -> error_stack::Result<TicketId, KernelError> {
        let store = &mut con.working;
        let id = store.next_id();
        store.tickets.push(TicketRow {
            id,
            enrollment_id: i32::from(*ticket.enrollment_id()),
            ticket_type_id: i32::from(*ticket.ticket_type_id()),
            status: TicketStatus::Reserved,
        });
        Ok(TicketId::new(id))
    }

    async fn mark_paid(
        &self,
        con: &mut MemoryTransaction,
        id: &TicketId,
    ) -> error_stack::Result<(), KernelError> {
        let id = i32::from(*id);
        if let Some(row) = con.working.tickets.iter_mut().find(|row| row.id == id) {
            row.status = TicketStatus::Paid;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PaymentModifier for MemoryRepository {
    type Transaction = MemoryTransaction;
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        payment: &NewPayment,
    ) -> error_stack::Result<Payment, KernelError> {
        let store = &mut con.working;
        let row = PaymentRow {
            id: store.next_id(),
            ticket_id: i32::from(*payment.ticket_id()),
            value: i32::from(*payment.value()),
            card_issuer: String::from(payment.card_issuer().clone()),
            card_last_digits: String::from(payment.card_last_digits().clone()),
        };
        let created = store.payment(&row);
        store.payments.push(row);
        Ok(created)
    }
}

macro_rules! depend_on_memory {
    ($($depend:ident :: $assoc:ident => $getter:ident),* $(,)?) => {
        $(
            impl $depend for MemoryDatabase {
                type $assoc = MemoryRepository;
                fn $getter(&self) -> &Self::$assoc {
                    &self.repository
                }
            }
        )*
    };
}

depend_on_memory! {
    DependOnSessionQuery::SessionQuery => session_query,
    DependOnEnrollmentQuery::EnrollmentQuery => enrollment_query,
    DependOnTicketTypeQuery::TicketTypeQuery => ticket_type_query,
    DependOnTicketQuery::TicketQuery => ticket_query,
    DependOnHotelQuery::HotelQuery => hotel_query,
    DependOnRoomQuery::RoomQuery => room_query,
    DependOnBookingQuery::BookingQuery => booking_query,
    DependOnPaymentQuery::PaymentQuery => payment_query,
    DependOnBookingModifier::BookingModifier => booking_modifier,
    DependOnTicketModifier::TicketModifier => ticket_modifier,
    DependOnPaymentModifier::PaymentModifier => payment_modifier,
}
