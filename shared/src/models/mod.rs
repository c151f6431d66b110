//! Catalog models

pub mod product;
pub mod reservation;

pub use product::Product;
pub use reservation::Reservation;
