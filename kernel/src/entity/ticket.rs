mod id;
mod status;

pub use self::{id::*, status::*};
use crate::entity::{CreatedAt, Enrollment, EnrollmentId, TicketType, TicketTypeId, UpdatedAt, UserId};
use destructure::Destructure;
use vodca::References;

/// A ticket as read from the store, joined with its type and the enrollment owning it.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Ticket {
    id: TicketId,
    status: TicketStatus,
    ticket_type: TicketType,
    enrollment: Enrollment,
    created_at: CreatedAt<Ticket>,
    updated_at: UpdatedAt<Ticket>,
}

impl Ticket {
    pub fn new(
        id: TicketId,
        status: TicketStatus,
        ticket_type: TicketType,
        enrollment: Enrollment,
        created_at: CreatedAt<Ticket>,
        updated_at: UpdatedAt<Ticket>,
    ) -> Self {
        Self {
            id,
            status,
            ticket_type,
            enrollment,
            created_at,
            updated_at,
        }
    }

    pub fn owner(&self) -> &UserId {
        self.enrollment.user_id()
    }

    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }
}

/// Tickets are always issued [`TicketStatus::Reserved`].
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewTicket {
    enrollment_id: EnrollmentId,
    ticket_type_id: TicketTypeId,
}

impl NewTicket {
    pub fn new(enrollment_id: EnrollmentId, ticket_type_id: TicketTypeId) -> Self {
        Self {
            enrollment_id,
            ticket_type_id,
        }
    }
}
