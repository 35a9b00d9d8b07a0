mod flag;
mod id;
mod name;
mod price;

pub use self::{flag::*, id::*, name::*, price::*};
use crate::entity::{CreatedAt, UpdatedAt};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct TicketType {
    id: TicketTypeId,
    name: TicketTypeName,
    price: TicketPrice,
    is_remote: IsRemote,
    includes_hotel: IncludesHotel,
    created_at: CreatedAt<TicketType>,
    updated_at: UpdatedAt<TicketType>,
}

impl TicketType {
    pub fn new(
        id: TicketTypeId,
        name: TicketTypeName,
        price: TicketPrice,
        is_remote: IsRemote,
        includes_hotel: IncludesHotel,
        created_at: CreatedAt<TicketType>,
        updated_at: UpdatedAt<TicketType>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            is_remote,
            includes_hotel,
            created_at,
            updated_at,
        }
    }
}
