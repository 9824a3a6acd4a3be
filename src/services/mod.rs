pub mod booking_service;
pub use booking_service::{Browse, BookingError, BookingRequest, BookingService, Confirmation};

pub mod booking_service_impl;
pub use booking_service_impl::SeaOrmBookingService;
