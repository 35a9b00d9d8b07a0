mod booking;
mod common;
mod enrollment;
mod hotel;
mod payment;
mod room;
mod session;
mod ticket;
mod ticket_type;
mod user;

pub use self::{
    booking::*, common::*, enrollment::*, hotel::*, payment::*, room::*, session::*, ticket::*,
    ticket_type::*, user::*,
};
