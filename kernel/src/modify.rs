mod booking;
mod payment;
mod ticket;

pub use self::{booking::*, payment::*, ticket::*};
