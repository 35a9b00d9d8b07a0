use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TicketTypeId(i32);

impl TicketTypeId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
