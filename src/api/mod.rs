pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{FetchError, JsonClient, RestClient};
pub use types::{Country, CountryName, Currencies, Currency, Flags};
