mod booking;
mod health;
mod hotel;
mod payment;
mod ticket;

pub use self::{
    booking::BookingRouter, health::HealthRouter, hotel::HotelRouter, payment::PaymentRouter,
    ticket::TicketRouter,
};
