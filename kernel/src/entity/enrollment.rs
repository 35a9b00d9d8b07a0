mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::UserId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Enrollment {
    id: EnrollmentId,
    name: EnrollmentName,
    user_id: UserId,
}

impl Enrollment {
    pub fn new(id: EnrollmentId, name: EnrollmentName, user_id: UserId) -> Self {
        Self { id, name, user_id }
    }
}
