mod booking;
mod hotel;
mod payment;
mod session;
mod ticket;

#[cfg(test)]
mod memory;

pub use self::{booking::*, hotel::*, payment::*, session::*, ticket::*};
