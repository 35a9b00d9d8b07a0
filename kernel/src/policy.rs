//! Business rules gating ticket payment and hotel access.
//!
//! Every check is a pure function over records already fetched from the store,
//! so services stay in charge of what is read and when.

use error_stack::Report;

use crate::entity::{Booking, Room, RoomOccupancy, Ticket, UserId};
use crate::KernelError;

/// Attendance mode a ticket must have to book a hotel room.
pub const HOTEL_BOOKING_REQUIRES_REMOTE_TICKET: bool = false;

fn forbidden(reason: &'static str) -> Report<KernelError> {
    Report::new(KernelError::Forbidden).attach_printable(reason)
}

/// Ticket authorization check used before any booking change.
pub fn authorize_hotel_booking(
    ticket: Option<Ticket>,
) -> error_stack::Result<Ticket, KernelError> {
    let ticket = ticket.ok_or_else(|| forbidden("User does not own a ticket"))?;
    let ticket_type = ticket.ticket_type();
    if *ticket_type.is_remote().as_ref() != HOTEL_BOOKING_REQUIRES_REMOTE_TICKET {
        return Err(forbidden("Ticket attendance mode does not allow hotel booking"));
    }
    if !*ticket_type.includes_hotel().as_ref() {
        return Err(forbidden("Ticket type does not include hotel"));
    }
    if !ticket.is_paid() {
        return Err(forbidden("Ticket is not paid yet"));
    }
    Ok(ticket)
}

/// Listing hotels only needs a hotel-inclusive ticket, unpaid ones ask for payment.
pub fn authorize_hotel_listing(ticket: Option<&Ticket>) -> error_stack::Result<(), KernelError> {
    let ticket = ticket.ok_or_else(|| forbidden("User does not own a ticket"))?;
    if !*ticket.ticket_type().includes_hotel().as_ref() {
        return Err(forbidden("Ticket type does not include hotel"));
    }
    if !ticket.is_paid() {
        return Err(Report::new(KernelError::PaymentRequired)
            .attach_printable(format!("Ticket {} is not paid", ticket.id().as_ref())));
    }
    Ok(())
}

pub fn ensure_vacancy(
    room: &Room,
    occupancy: &RoomOccupancy,
) -> error_stack::Result<(), KernelError> {
    if occupancy.is_full(room.capacity()) {
        return Err(Report::new(KernelError::Forbidden)
            .attach_printable(format!("Room {} is at full capacity", room.id().as_ref())));
    }
    Ok(())
}

pub fn ensure_no_booking(existing: Option<&Booking>) -> error_stack::Result<(), KernelError> {
    match existing {
        Some(booking) => Err(Report::new(KernelError::Forbidden).attach_printable(format!(
            "User already holds booking {}",
            booking.id().as_ref()
        ))),
        None => Ok(()),
    }
}

pub fn ensure_booking_owner(
    booking: &Booking,
    user_id: &UserId,
) -> error_stack::Result<(), KernelError> {
    if booking.user_id() != user_id {
        return Err(forbidden("Booking belongs to another user"));
    }
    Ok(())
}

pub fn ensure_room_changed(booking: &Booking, target: &Room) -> error_stack::Result<(), KernelError> {
    if booking.room().id() == target.id() {
        return Err(forbidden("Booking already refers to this room"));
    }
    Ok(())
}

pub fn ensure_ticket_owner(ticket: &Ticket, user_id: &UserId) -> error_stack::Result<(), KernelError> {
    if ticket.owner() != user_id {
        return Err(Report::new(KernelError::Unauthorized)
            .attach_printable(format!("Ticket {} belongs to another user", ticket.id().as_ref())));
    }
    Ok(())
}

pub fn ensure_unpaid(ticket: &Ticket) -> error_stack::Result<(), KernelError> {
    if ticket.is_paid() {
        return Err(forbidden("Ticket is already paid"));
    }
    Ok(())
}

pub fn ensure_no_ticket(existing: Option<&Ticket>) -> error_stack::Result<(), KernelError> {
    if existing.is_some() {
        return Err(forbidden("Enrollment already owns a ticket"));
    }
    Ok(())
}
