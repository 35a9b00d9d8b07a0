mod id;
mod image;
mod name;

pub use self::{id::*, image::*, name::*};
use crate::entity::{CreatedAt, UpdatedAt};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Hotel {
    id: HotelId,
    name: HotelName,
    image: HotelImage,
    created_at: CreatedAt<Hotel>,
    updated_at: UpdatedAt<Hotel>,
}

impl Hotel {
    pub fn new(
        id: HotelId,
        name: HotelName,
        image: HotelImage,
        created_at: CreatedAt<Hotel>,
        updated_at: UpdatedAt<Hotel>,
    ) -> Self {
        Self {
            id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}
