mod token;

pub use self::token::*;
use crate::entity::UserId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Session {
    token: SessionToken,
    user_id: UserId,
}

impl Session {
    pub fn new(token: SessionToken, user_id: UserId) -> Self {
        Self { token, user_id }
    }
}
