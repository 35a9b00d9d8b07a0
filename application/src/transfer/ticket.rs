use kernel::prelude::entity::{DestructTicket, DestructTicketType, Ticket, TicketType};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TicketTypeDto {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketType> for TicketTypeDto {
    fn from(value: TicketType) -> Self {
        let DestructTicketType {
            id,
            name,
            price,
            is_remote,
            includes_hotel,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            is_remote: is_remote.into(),
            includes_hotel: includes_hotel.into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TicketDto {
    pub id: i32,
    pub status: String,
    pub ticket_type: TicketTypeDto,
    pub enrollment_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Ticket> for TicketDto {
    fn from(value: Ticket) -> Self {
        let DestructTicket {
            id,
            status,
            ticket_type,
            enrollment,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            status: status.to_string(),
            ticket_type: TicketTypeDto::from(ticket_type),
            enrollment_id: (*enrollment.id()).into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetTicketDto {
    pub user_id: i32,
}

#[derive(Debug)]
pub struct CreateTicketDto {
    pub user_id: i32,
    pub ticket_type_id: i32,
}
