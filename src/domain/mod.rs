pub mod checkout;
pub mod content;
pub mod donation;
pub mod ports;
pub mod search;
