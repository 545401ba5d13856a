//! Page components for the Card Shop.

mod catalog;
mod home;

pub use catalog::Catalog;
pub use home::Home;
