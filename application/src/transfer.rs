mod booking;
mod hotel;
mod payment;
mod session;
mod ticket;

pub use self::{booking::*, hotel::*, payment::*, session::*, ticket::*};
