mod booking;
mod enrollment;
mod hotel;
mod payment;
mod room;
mod session;
mod ticket;

pub use self::{booking::*, enrollment::*, hotel::*, payment::*, room::*, session::*, ticket::*};
