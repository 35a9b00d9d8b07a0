use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TicketPrice(i32);

impl TicketPrice {
    pub fn new(price: impl Into<i32>) -> Self {
        Self(price.into())
    }
}
