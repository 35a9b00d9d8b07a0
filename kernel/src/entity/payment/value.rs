use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::TicketPrice;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PaymentValue(i32);

impl PaymentValue {
    pub fn new(value: impl Into<i32>) -> Self {
        Self(value.into())
    }
}

impl From<TicketPrice> for PaymentValue {
    fn from(price: TicketPrice) -> Self {
        Self(price.into())
    }
}
