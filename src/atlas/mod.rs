mod boundary;
mod country;

pub use boundary::Boundary;
pub use country::{Country, CountryCode};
